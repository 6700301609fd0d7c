//! Tracing subscriber setup for binaries and tools embedding the formatters.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::error::CoreError;

/// ## Summary
/// Installs a global fmt subscriber filtered at the configured level.
///
/// ## Errors
/// Returns an error if the level is not a valid `EnvFilter` directive or a
/// global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(config.level.as_str()).map_err(|e| {
        CoreError::InvalidConfiguration(format!("logging.level {:?}: {e}", config.level))
    })?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!(level = %config.level, "Tracing initialised");

    Ok(())
}
