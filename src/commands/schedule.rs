use anyhow::Result;
use citas_core::{Agenda, StoreBackend};
use owo_colors::OwoColorize;

pub fn run<B: StoreBackend>(
    agenda: &mut Agenda<B>,
    name: &str,
    contact: &str,
    datetime: &str,
    service: &str,
) -> Result<()> {
    let appointment = agenda.schedule(name, contact, datetime, service)?;

    println!(
        "{}",
        format!(
            "Appointment scheduled for {} on {} ({}).",
            appointment.client_name,
            appointment.render_time(),
            appointment.service
        )
        .green()
    );

    Ok(())
}
