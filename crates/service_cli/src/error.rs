//! Error types for the variates CLI.

use random_core::config::DistributionError;
use thiserror::Error;

/// CLI error.
#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Reading input or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Distribution could not be configured.
    #[error(transparent)]
    Distribution(#[from] DistributionError),

    /// JSON output could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
