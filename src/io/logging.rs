//! Tracing subscriber setup for the command-line tool

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::io::error::{Result, invalid_parameter};

/// Build the log filter, preferring `RUST_LOG` over `base_level`
///
/// # Errors
///
/// Returns an error if `base_level` is not a valid filter directive
pub fn build_filter(base_level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(base_level))
        .map_err(|e| invalid_parameter("log_level", &base_level, &e))
}

/// Install a stderr subscriber for the whole process
///
/// Later calls are ignored, so tests and embedding applications that already
/// installed a subscriber keep theirs.
///
/// # Errors
///
/// Returns an error if `base_level` is not a valid filter directive
pub fn setup_logging(base_level: &str) -> Result<()> {
    let env_filter = build_filter(base_level)?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Logging already initialized");
    }

    Ok(())
}
