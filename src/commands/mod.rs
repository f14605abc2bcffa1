//! Command parsing and handlers for the interactive loop.

pub mod handlers;
pub mod parser;

pub use handlers::execute;
pub use parser::parse_input;
