//! Error types for citas.

use thiserror::Error;

/// Errors that can occur in citas operations.
#[derive(Error, Debug)]
pub enum CitasError {
    #[error("Invalid date '{0}': date must be in ISO 8601 format, for example 2024-08-05T15:30")]
    InvalidDateTime(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for citas operations.
pub type CitasResult<T> = Result<T, CitasError>;
