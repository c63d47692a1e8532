//! Clients of the studio.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A client, keyed case-insensitively by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub contact: String,
}

impl Client {
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Client {
            name: name.into(),
            contact: contact.into(),
        }
    }

    /// Whether this client is the one referred to by `name`, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        normalize_name(&self.name) == normalize_name(name)
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (contact: {})", self.name, self.contact)
    }
}

/// Normalize a client name for lookups. Every name comparison goes through
/// this function.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}
