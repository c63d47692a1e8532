use anyhow::Result;
use citas_core::{Agenda, StoreBackend};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run<B: StoreBackend>(agenda: &Agenda<B>, include_past: bool, json: bool) -> Result<()> {
    let appointments = agenda.list(include_past)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&appointments)?);
        return Ok(());
    }

    if appointments.is_empty() {
        println!("{}", "No appointments found.".dimmed());
        return Ok(());
    }

    for appointment in &appointments {
        println!("{}", appointment.render());
    }

    Ok(())
}
