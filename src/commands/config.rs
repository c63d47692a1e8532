use anyhow::Result;
use citas_core::citas_config::CitasConfig;
use owo_colors::OwoColorize;

pub fn run(config: &CitasConfig) -> Result<()> {
    let config_path = CitasConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Data file:  {}", config.data_path().display());
    println!();
    println!("{}", "Reminders".bold());
    println!("  Window:     {} hours", config.reminder_threshold_hours);

    Ok(())
}
