//! Tracing subscriber initialisation
//!
//! `RUST_LOG` takes precedence over the configured level. Output is either
//! human-readable or JSON lines.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use workboard_domain::{LoggingConfig, Result, WorkboardError};

/// Resolve the filter: `RUST_LOG` first, then the configured directive
///
/// # Errors
/// Returns `WorkboardError::Config` if the configured directive is invalid.
pub fn subscriber_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| WorkboardError::Config(format!("Invalid log filter '{}': {e}", config.level)))
}

/// Install the global subscriber
///
/// # Errors
/// Returns `WorkboardError::Config` if the filter is invalid or a global
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = subscriber_filter(config)?;

    let installed = if config.json {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        tracing_subscriber::registry().with(filter).with(json_layer).try_init()
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false);
        tracing_subscriber::registry().with(filter).with(fmt_layer).try_init()
    };
    installed.map_err(|e| WorkboardError::Config(format!("Failed to install subscriber: {e}")))?;

    tracing::debug!(level = %config.level, json = config.json, "Tracing initialized");
    Ok(())
}
