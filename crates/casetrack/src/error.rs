//! Top-level error type for the command line.

use std::path::PathBuf;

use case_events::InvalidInput;
use thiserror::Error;
use timeline::{ConfigError, OutputError};

/// Everything that can stop a `casetrack` command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("output error: {0}")]
    Output(#[from] OutputError),

    #[error("unknown category '{category}', expected one of: {}", .available.join(", "))]
    UnknownCategory {
        category: String,
        available: Vec<String>,
    },

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
