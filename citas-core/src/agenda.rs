//! The appointment book as seen by the CLI.
//!
//! Each operation loads the whole store from its backend, works on it in
//! memory and saves at most once.

use chrono::{Duration, Local, NaiveDateTime};

use crate::appointment::Appointment;
use crate::backend::StoreBackend;
use crate::client::Client;
use crate::datetime::parse_datetime;
use crate::error::CitasResult;
use crate::reminder::{DEFAULT_THRESHOLD_HOURS, Reminder};

/// The appointment book: a [`StoreBackend`] plus the reminder window.
///
/// Every operation is a full load, in-memory work on the [`Store`](crate::Store),
/// and at most one save.
pub struct Agenda<B: StoreBackend> {
    backend: B,
    reminder_window: Duration,
}

impl<B: StoreBackend> Agenda<B> {
    pub fn new(backend: B) -> Self {
        Agenda {
            backend,
            reminder_window: Duration::hours(DEFAULT_THRESHOLD_HOURS),
        }
    }

    pub fn with_reminder_window(mut self, window: Duration) -> Self {
        self.reminder_window = window;
        self
    }

    pub fn reminder_window(&self) -> Duration {
        self.reminder_window
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Register a client, or return the existing one with that name.
    pub fn register_client(&mut self, name: &str, contact: &str) -> CitasResult<Client> {
        let mut store = self.backend.load()?;
        let client = store.ensure_client(name, contact).clone();
        self.backend.save(&store)?;
        Ok(client)
    }

    /// Schedule an appointment. An unparsable date fails before the store is
    /// loaded, so nothing is written.
    pub fn schedule(
        &mut self,
        name: &str,
        contact: &str,
        datetime: &str,
        service: &str,
    ) -> CitasResult<Appointment> {
        let timestamp = parse_datetime(datetime)?;

        let mut store = self.backend.load()?;
        let appointment = store.schedule_at(name, contact, timestamp, service);
        self.backend.save(&store)?;
        Ok(appointment)
    }

    /// Appointments in time order; past ones only if `include_past`.
    pub fn list(&self, include_past: bool) -> CitasResult<Vec<Appointment>> {
        self.list_at(include_past, now())
    }

    pub fn list_at(&self, include_past: bool, now: NaiveDateTime) -> CitasResult<Vec<Appointment>> {
        let store = self.backend.load()?;
        Ok(store.list(include_past, now))
    }

    /// Generate reminders for appointments due within the reminder window.
    pub fn reminders(&mut self) -> CitasResult<Vec<Reminder>> {
        self.reminders_at(now())
    }

    /// Like [`Agenda::reminders`] with an explicit current time. The store is
    /// only saved when at least one reminder was generated.
    pub fn reminders_at(&mut self, now: NaiveDateTime) -> CitasResult<Vec<Reminder>> {
        let mut store = self.backend.load()?;
        let reminders = store.generate_reminders_within(now, self.reminder_window);

        if reminders.is_empty() {
            log::debug!("No reminders due, leaving store untouched");
        } else {
            log::info!("Generated {} reminders", reminders.len());
            self.backend.save(&store)?;
        }

        Ok(reminders)
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
