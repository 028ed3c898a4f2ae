//! Error types for the command line front end.

use randgen_core::RandomError;
use thiserror::Error;

/// Errors surfaced by `randgen` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A generator rejected its bounds or parameters.
    #[error("Generator error: {0}")]
    Random(#[from] RandomError),

    /// Configuration file could not be parsed or holds invalid values.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Command line argument outside what the command accepts.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Characters requested from an empty character set.
    #[error("Empty charset: cannot draw {length} characters")]
    EmptyCharset {
        /// Requested string length
        length: usize,
    },
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
