//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// The tracefile could not be read
    #[error("Failed to read {}: {source}", path.display())]
    ReadInput {
        /// Tracefile path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The report could not be written
    #[error("Failed to write {}: {source}", path.display())]
    WriteOutput {
        /// Report path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Converter error (invalid exclusion pattern)
    #[error(transparent)]
    Convert(#[from] lcov_cobertura::ConvertError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create a read error for `path`
    #[must_use]
    pub fn read_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadInput {
            path: path.into(),
            source,
        }
    }

    /// Create a write error for `path`
    #[must_use]
    pub fn write_output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteOutput {
            path: path.into(),
            source,
        }
    }
}
