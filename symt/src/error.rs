//! Error handling module for the symt CLI.
//!
//! Library errors are wrapped, everything else is a plain message.

use thiserror::Error;

/// Main error type for the symt CLI application.
#[derive(Error, Debug)]
pub enum SymtError {
    /// Error when a configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when a command-line value cannot be parsed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An identifier could not be encoded.
    #[error(transparent)]
    Symbol(#[from] symc_core::SymbolError),

    /// One or more self-check cases failed.
    #[error("Self-check failed: {failed} of {total} cases")]
    CheckFailed { failed: usize, total: usize },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using SymtError.
pub type Result<T> = std::result::Result<T, SymtError>;
