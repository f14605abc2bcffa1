//! Contact Assistant - a command-line contact book with birthday reminders.
//!
//! Stores names, validated phone numbers, and birthdays, persists the whole
//! book to disk as a JSON snapshot, and answers simple queries (list
//! contacts, find upcoming birthdays with weekend-adjusted greeting dates).
//!
//! # Architecture
//!
//! - **domain**: validated value objects (names, phone numbers, birthdays)
//! - **models**: the contact record
//! - **book**: the address book container and birthday-proximity query
//! - **storage**: whole-book snapshot persistence behind a trait
//! - **commands**: line parsing and command handlers
//! - **repl**: the interactive prompt loop
//! - **config**: configuration from environment variables
//! - **error**: custom error types for precise error handling

// Re-export commonly used types
pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use book::{AddressBook, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use config::Config;
pub use error::{CommandError, ConfigError, RecordError, StorageError};
pub use models::Record;
pub use storage::{BookStore, JsonFileStore};
