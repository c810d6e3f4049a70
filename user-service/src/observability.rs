//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::Result};

/// Build the log filter from the configured level
///
/// Invalid directives fall back to `info` rather than failing startup.
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize JSON-formatted tracing for the process
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(config: &Config) -> Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter(config))
        .try_init()
        .map_err(|e| crate::error::Error::Internal(format!("Failed to initialize tracing: {}", e)))?;

    tracing::info!(
        environment = %config.service.environment,
        "Tracing initialized for service: {}",
        config.service.name
    );

    Ok(())
}
