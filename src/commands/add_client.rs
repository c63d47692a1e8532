use anyhow::Result;
use citas_core::{Agenda, StoreBackend};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run<B: StoreBackend>(agenda: &mut Agenda<B>, name: &str, contact: &str) -> Result<()> {
    let client = agenda.register_client(name, contact)?;

    println!("{} {}", "Client registered:".green(), client.render());

    Ok(())
}
