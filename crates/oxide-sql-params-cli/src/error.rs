//! Error types for the command-line front-end.

use std::path::PathBuf;

use oxide_sql_params::BindError;

/// Errors that can occur while running a command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Reading the query or a bindings file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A bindings file could not be read.
    #[error("Failed to read bindings file '{path}': {source}")]
    BindingsFile {
        /// Path to the bindings file.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// Bindings were not valid JSON, or output could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A JSON value has no binding equivalent.
    #[error("Invalid binding for {name}: {reason}")]
    InvalidBinding {
        /// The parameter name, or `#n` for the n-th positional binding.
        name: String,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// The query could not be bound.
    #[error(transparent)]
    Bind(#[from] BindError),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
