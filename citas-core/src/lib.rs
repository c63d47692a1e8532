//! Core types for the citas appointment scheduler.
//!
//! - `Store` holds clients and appointments and implements the lookup,
//!   scheduling, listing and reminder passes as pure operations
//! - `backend` loads and saves a `Store` (JSON file or in-memory)
//! - `Agenda` ties a backend to the store for the CLI's load/work/save cycle

pub mod agenda;
pub mod appointment;
pub mod backend;
pub mod citas_config;
pub mod client;
pub mod datetime;
pub mod error;
pub mod reminder;
pub mod store;

pub use agenda::Agenda;
pub use appointment::Appointment;
pub use backend::{JsonFile, MemoryBackend, StoreBackend};
pub use client::{Client, normalize_name};
pub use error::{CitasError, CitasResult};
pub use reminder::Reminder;
pub use store::Store;
