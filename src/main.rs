//! Contact Assistant - Main entry point
//!
//! Loads the address book from its snapshot, runs the interactive loop,
//! and saves the book back at clean shutdown.

use anyhow::{Context, Result};
use contact_assistant::storage::BookStore;
use contact_assistant::{repl, Config, JsonFileStore};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only so stdout stays clean for the REPL)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let store = JsonFileStore::new(&config.book_path);

    let mut book = store.load().with_context(|| {
        format!(
            "Failed to load address book from {}",
            config.book_path.display()
        )
    })?;

    repl::run(&mut book, config.birthday_window_days).context("Reading user input failed")?;

    store.save(&book).with_context(|| {
        format!(
            "Failed to save address book to {}",
            config.book_path.display()
        )
    })?;

    info!("Shutdown complete");
    Ok(())
}
