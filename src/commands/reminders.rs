use anyhow::Result;
use citas_core::{Agenda, StoreBackend};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run<B: StoreBackend>(agenda: &mut Agenda<B>) -> Result<()> {
    let reminders = agenda.reminders()?;

    if reminders.is_empty() {
        let message = format!(
            "No appointments within the next {} hours, or reminders were already sent.",
            agenda.reminder_window().num_hours()
        );
        println!("{}", message.dimmed());
        return Ok(());
    }

    for reminder in &reminders {
        println!("{}", reminder.render());
    }

    Ok(())
}
