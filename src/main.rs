mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use citas_core::Agenda;
use citas_core::citas_config::CitasConfig;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "citas")]
#[command(about = "Book clients and appointments and generate reminders for upcoming ones")]
struct Cli {
    /// Use this data file instead of the configured one
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Log what is being loaded and saved
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new client
    AddClient {
        /// Full name of the client
        name: String,

        /// Contact details (phone, WhatsApp, email...)
        contact: String,
    },
    /// Schedule a new appointment
    Schedule {
        /// Full name of the client
        name: String,

        /// Contact details. Ignored if the client already exists
        contact: String,

        /// Date and time in ISO 8601 format (e.g. 2024-08-05T15:30)
        datetime: String,

        /// Service or note for the appointment
        service: String,
    },
    /// Show upcoming appointments
    List {
        /// Also show appointments that already happened
        #[arg(short, long)]
        all: bool,

        /// Print appointments as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate reminders for appointments coming up soon
    Reminders,
    /// Show config and data file locations
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = load_config(cli.data_file)?;
    let mut agenda = Agenda::new(config.backend()).with_reminder_window(config.reminder_window());

    match cli.command {
        Commands::AddClient { name, contact } => {
            commands::add_client::run(&mut agenda, &name, &contact)
        }
        Commands::Schedule {
            name,
            contact,
            datetime,
            service,
        } => commands::schedule::run(&mut agenda, &name, &contact, &datetime, &service),
        Commands::List { all, json } => commands::list::run(&agenda, all, json),
        Commands::Reminders => commands::reminders::run(&mut agenda),
        Commands::Config => commands::config::run(&config),
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn load_config(data_file: Option<PathBuf>) -> Result<CitasConfig> {
    let config = CitasConfig::load()?.with_data_file(data_file);

    log::debug!("Using data file {}", config.data_path().display());
    Ok(config)
}
