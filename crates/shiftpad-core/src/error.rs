//! Error types for Shiftpad core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes. The cipher transform itself
//! has no error taxonomy - it is a total function.

use thiserror::Error;

/// Result type alias for Shiftpad operations.
pub type Result<T> = std::result::Result<T, ShiftpadError>;

/// Core error type for Shiftpad operations.
#[derive(Debug, Error)]
pub enum ShiftpadError {
    /// Store backend error
    #[error("Store error: {0}")]
    Storage(String),

    /// Store file does not exist
    #[error("Store not found")]
    StoreNotFound,

    /// Credential or session error
    #[error("Auth error: {0}")]
    Auth(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for ShiftpadError {
    fn from(err: std::io::Error) -> Self {
        ShiftpadError::Storage(err.to_string())
    }
}

impl From<rusqlite::Error> for ShiftpadError {
    fn from(err: rusqlite::Error) -> Self {
        ShiftpadError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ShiftpadError {
    fn from(err: serde_json::Error) -> Self {
        ShiftpadError::Validation(err.to_string())
    }
}
