//! Data models for the contact assistant.

pub mod record;

pub use record::Record;
