//! The appointment store: every client and appointment, as one value.
//!
//! All operations here are in-memory. Loading and saving belong to
//! [`StoreBackend`](crate::StoreBackend) implementations.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::appointment::Appointment;
use crate::client::Client;
use crate::datetime::parse_datetime;
use crate::error::CitasResult;
use crate::reminder::{DEFAULT_THRESHOLD_HOURS, PLACEHOLDER_CONTACT, Reminder};

/// Clients and appointments, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty() && self.appointments.is_empty()
    }

    /// First client whose name matches `name`, ignoring case.
    pub fn find_client(&self, name: &str) -> Option<&Client> {
        find_in(&self.clients, name)
    }

    /// Return the client called `name`, creating it with `contact` if there is
    /// none. An existing client keeps its stored contact.
    pub fn ensure_client(&mut self, name: &str, contact: &str) -> &Client {
        let index = match self.clients.iter().position(|c| c.matches(name)) {
            Some(index) => index,
            None => {
                log::info!("Registering new client '{}'", name);
                self.clients.push(Client::new(name, contact));
                self.clients.len() - 1
            }
        };
        &self.clients[index]
    }

    /// Schedule an appointment for `name` at `datetime` (ISO 8601).
    ///
    /// The date is parsed before anything else, so an invalid date leaves the
    /// store untouched.
    pub fn schedule(
        &mut self,
        name: &str,
        contact: &str,
        datetime: &str,
        service: &str,
    ) -> CitasResult<Appointment> {
        let timestamp = parse_datetime(datetime)?;
        Ok(self.schedule_at(name, contact, timestamp, service))
    }

    /// Schedule an appointment at an already parsed time. The appointment is
    /// filed under the stored client's name, which may differ in case from
    /// `name`.
    pub fn schedule_at(
        &mut self,
        name: &str,
        contact: &str,
        timestamp: NaiveDateTime,
        service: &str,
    ) -> Appointment {
        let client_name = self.ensure_client(name, contact).name.clone();

        let appointment = Appointment::new(client_name, timestamp, service);
        log::info!(
            "Scheduled {} for {} at {}",
            appointment.service,
            appointment.client_name,
            appointment.timestamp
        );
        self.appointments.push(appointment.clone());
        appointment
    }

    /// Appointments sorted by time. Unless `include_past` is set, only those
    /// at or after `now` are returned.
    pub fn list(&self, include_past: bool, now: NaiveDateTime) -> Vec<Appointment> {
        let mut appointments: Vec<Appointment> = self
            .appointments
            .iter()
            .filter(|a| include_past || a.timestamp >= now)
            .cloned()
            .collect();

        appointments.sort_by_key(|a| a.timestamp);
        appointments
    }

    /// Generate reminders for the default 24 hour window.
    pub fn generate_reminders(&mut self, now: NaiveDateTime) -> Vec<Reminder> {
        self.generate_reminders_within(now, Duration::hours(DEFAULT_THRESHOLD_HOURS))
    }

    /// Generate a reminder for every unsent appointment in `[now, now + window]`
    /// and mark it as sent.
    pub fn generate_reminders_within(
        &mut self,
        now: NaiveDateTime,
        window: Duration,
    ) -> Vec<Reminder> {
        let limit = now.checked_add_signed(window).unwrap_or(NaiveDateTime::MAX);
        let mut reminders = Vec::new();

        for appointment in self.appointments.iter_mut() {
            if appointment.reminder_sent || !appointment.is_within(now, limit) {
                continue;
            }

            let contact = match find_in(&self.clients, &appointment.client_name) {
                Some(client) => client.contact.clone(),
                None => {
                    log::warn!(
                        "No client record for '{}', using placeholder contact",
                        appointment.client_name
                    );
                    PLACEHOLDER_CONTACT.to_string()
                }
            };

            reminders.push(Reminder {
                client_name: appointment.client_name.clone(),
                service: appointment.service.clone(),
                timestamp: appointment.timestamp,
                contact,
            });
            appointment.reminder_sent = true;
        }

        reminders
    }
}

fn find_in<'a>(clients: &'a [Client], name: &str) -> Option<&'a Client> {
    clients.iter().find(|c| c.matches(name))
}
