//! Contact Assistant - Main entry point
//!
//! Loads the address book, runs the interactive prompt on stdin/stdout and
//! saves the book when the user exits.

use anyhow::Result;
use contact_assistant::session::run_stdio;
use contact_assistant::{Assistant, Config, JsonFileRepository};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stderr only, stdout carries the interactive session
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Using address book {} with a {}-day birthday window",
        config.data_file.display(),
        config.birthday_window_days
    );

    let repository = JsonFileRepository::new(config.data_file.clone());
    let mut assistant = Assistant::open(repository, &config);

    run_stdio(&mut assistant)?;

    info!("Contact assistant shutdown complete");
    Ok(())
}
