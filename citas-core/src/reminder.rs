//! Reminder messages for upcoming appointments.

use chrono::NaiveDateTime;
use std::fmt;

/// Contact shown when an appointment's client is no longer in the store.
pub const PLACEHOLDER_CONTACT: &str = "(contact not registered)";

/// Default width of the reminder window, in hours.
pub const DEFAULT_THRESHOLD_HOURS: i64 = 24;

/// A reminder generated for an appointment inside the reminder window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub client_name: String,
    pub service: String,
    pub timestamp: NaiveDateTime,
    pub contact: String,
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Reminder: {} has a {} appointment on {} (contact: {}).",
            self.client_name,
            self.service,
            self.timestamp.format("%d/%m/%Y at %H:%M"),
            self.contact
        )
    }
}
