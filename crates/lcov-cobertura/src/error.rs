//! Result and error types for the converter.
//!
//! Parsing and rendering never fail; errors only arise while building
//! options or writing a finished report.

use thiserror::Error;

/// Result type for converter operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur around a conversion
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A package exclusion pattern is not a valid regular expression
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        /// Pattern as given by the caller
        pattern: String,
        /// Underlying regex compilation error
        #[source]
        source: regex::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
