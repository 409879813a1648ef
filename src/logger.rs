//! Logger initialization.
//!
//! Builds a console `tracing` subscriber from the configured level.
//! `RUST_LOG` takes precedence when set, so individual targets can still be
//! tuned without touching the configuration file.

use tracing_subscriber::EnvFilter;

use crate::config::settings::LoggerSettings;

/// Initialize the global tracing subscriber.
///
/// # Errors
/// Fails if the configured level does not parse into a filter directive or
/// a global subscriber was already installed.
pub fn init_logger(settings: &LoggerSettings) -> anyhow::Result<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(_) => EnvFilter::try_from_default_env()?,
        Err(_) => EnvFilter::try_new(&settings.level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}
