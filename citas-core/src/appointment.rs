//! Scheduled appointments.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::datetime;

/// An appointment for a client.
///
/// `client_name` refers to a [`Client`](crate::Client) by name but is not
/// checked against the stored clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub client_name: String,
    #[serde(rename = "datetime", with = "datetime::iso")]
    pub timestamp: NaiveDateTime,
    pub service: String,
    /// Flips to true once a reminder has been generated. Never reset.
    #[serde(default)]
    pub reminder_sent: bool,
}

impl Appointment {
    pub fn new(
        client_name: impl Into<String>,
        timestamp: NaiveDateTime,
        service: impl Into<String>,
    ) -> Self {
        Appointment {
            client_name: client_name.into(),
            timestamp,
            service: service.into(),
            reminder_sent: false,
        }
    }

    /// Whether the appointment falls inside `[from, to]` (both inclusive).
    pub fn is_within(&self, from: NaiveDateTime, to: NaiveDateTime) -> bool {
        from <= self.timestamp && self.timestamp <= to
    }

    /// Render the appointment time as `dd/mm/YYYY HH:MM`.
    pub fn render_time(&self) -> String {
        datetime::format_human(&self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 8, 5)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn new_appointment_has_no_reminder() {
        let appointment = Appointment::new("Ana", at(15, 30), "relleno");
        assert!(!appointment.reminder_sent);
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let appointment = Appointment::new("Ana", at(15, 30), "relleno");
        assert!(appointment.is_within(at(15, 30), at(16, 0)));
        assert!(appointment.is_within(at(15, 0), at(15, 30)));
        assert!(!appointment.is_within(at(15, 31), at(16, 0)));
        assert!(!appointment.is_within(at(14, 0), at(15, 30) - Duration::minutes(1)));
    }

    #[test]
    fn serializes_with_persisted_field_names() {
        let appointment = Appointment::new("Ana", at(15, 30), "relleno");
        let json = serde_json::to_value(&appointment).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "client_name": "Ana",
                "datetime": "2024-08-05T15:30:00",
                "service": "relleno",
                "reminder_sent": false
            })
        );
    }

    #[test]
    fn missing_reminder_flag_defaults_to_false() {
        let appointment: Appointment = serde_json::from_str(
            r#"{"client_name":"Ana","datetime":"2024-08-05T15:30","service":"relleno"}"#,
        )
        .unwrap();
        assert_eq!(appointment.timestamp, at(15, 30));
        assert!(!appointment.reminder_sent);
    }

    #[test]
    fn malformed_datetime_is_rejected() {
        let result: Result<Appointment, _> = serde_json::from_str(
            r#"{"client_name":"Ana","datetime":"soon","service":"relleno","reminder_sent":false}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn render_time() {
        let appointment = Appointment::new("Ana", at(15, 30), "relleno");
        assert_eq!(appointment.render_time(), "05/08/2024 15:30");
    }
}
