//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Unknown range token.
    #[error("Invalid range: {0}. Use one of 1M, 6M, 1Y, 3Y, 5Y, ALL.")]
    InvalidRange(String),

    /// Input file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Input file is not valid for its command.
    #[error("Failed to parse {}: {message}", .path.display())]
    Parse {
        /// File path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
