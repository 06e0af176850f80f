//! Error types for the command-line front end.

use std::path::PathBuf;

use sqlgram_core::ParseError;

/// Errors that stop a `sqlgram` run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A statement failed to parse.
    #[error("{0}")]
    Parse(Box<ParseError>),

    /// Failed to read a script file.
    #[error("Failed to read '{path}': {source}")]
    Read {
        /// Path of the script.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// IO error (stdin, stdout, stderr).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering a result as JSON failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<ParseError> for CliError {
    fn from(err: ParseError) -> Self {
        Self::Parse(Box::new(err))
    }
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
