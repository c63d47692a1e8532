//! Terminal rendering for citas-core types.
//!
//! Extension traits that add colored output with owo_colors, keeping
//! presentation out of the core crate.

use citas_core::{Appointment, Client, Reminder};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Client {
    fn render(&self) -> String {
        format!("{} {}", self.name.bold(), format!("(contact: {})", self.contact).dimmed())
    }
}

impl Render for Appointment {
    fn render(&self) -> String {
        let line = format!(
            "- {}: {} for {}",
            self.client_name.bold(),
            self.render_time(),
            self.service
        );

        if self.reminder_sent {
            format!("{} {}", line, "(reminder sent)".dimmed())
        } else {
            line
        }
    }
}

impl Render for Reminder {
    fn render(&self) -> String {
        self.to_string().yellow().to_string()
    }
}
