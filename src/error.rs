//! Error types for marker update decoding.

use thiserror::Error;

/// Main error type for decoding marker updates.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Invalid MarkerUpdate object: {0}")]
    InvalidInput(String),

    #[error("Unknown updateEventType: {0}")]
    UnrecognizedEventKind(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for UpdateError {
    fn from(e: serde_json::Error) -> Self {
        UpdateError::Deserialization(e.to_string())
    }
}

/// Result type for marker update operations.
pub type Result<T> = std::result::Result<T, UpdateError>;
