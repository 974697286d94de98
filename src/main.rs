//! Contact Catalog - main entry point.
//!
//! Wires the repository, service, and menu together and runs the
//! interactive loop until the user exits.

use anyhow::Result;
use contact_catalog::repositories::{ContactRepository, InMemoryContactRepository};
use contact_catalog::{Config, ContactService, Menu};
use std::io;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first; the fallback log filter comes from it
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging on stderr so console output stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let repository = Arc::new(InMemoryContactRepository::with_capacity(
        config.initial_capacity,
    )) as Arc<dyn ContactRepository>;
    let service = ContactService::new(repository);

    info!("Contact catalog initialized");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(&service, stdin.lock(), stdout.lock());

    if let Err(e) = menu.run() {
        error!("Menu loop failed: {}", e);
        return Err(e.into());
    }

    info!("Contact catalog shutdown complete");
    Ok(())
}
