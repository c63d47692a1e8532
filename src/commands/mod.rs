pub mod add_client;
pub mod config;
pub mod list;
pub mod reminders;
pub mod schedule;
