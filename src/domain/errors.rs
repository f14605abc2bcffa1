//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// The provided phone number is invalid.
    #[error("Phone number must be 10 digits, got: {0}")]
    InvalidPhone(String),

    /// The provided birthday does not match DD.MM.YYYY.
    #[error("Invalid date format. Use DD.MM.YYYY, got: {0}")]
    InvalidBirthday(String),
}
