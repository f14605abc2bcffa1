//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating a contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number to edit or remove is not on the record
    #[error("Phone number {0} not found.")]
    PhoneNotFound(String),
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("Address book I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be encoded or decoded
    #[error("Address book snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Errors surfaced by command handlers.
///
/// Every variant is caught at the dispatch boundary and converted into a
/// user-facing message; none of them terminates the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Malformed phone or date input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A phone number was not found on the record
    #[error("Phone number {0} not found.")]
    PhoneNotFound(String),

    /// Too few or too many command arguments
    #[error("Expected arguments: {usage}")]
    Args { usage: &'static str },
}

impl From<RecordError> for CommandError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::Validation(e) => CommandError::Validation(e),
            RecordError::PhoneNotFound(p) => CommandError::PhoneNotFound(p),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
