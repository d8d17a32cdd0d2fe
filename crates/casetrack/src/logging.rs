//! Log output setup for the binary.
//!
//! Logs go to stderr so stdout stays free for JSON.

use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `default_level` when it is set.
pub fn init(default_level: &str) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| CliError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
