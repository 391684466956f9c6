//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Input container not recognised from its extension
    UnsupportedFormat(String),
    /// Format recognised but support was compiled out
    MissingCapability {
        /// Input format that needs the capability
        format: String,
        /// Cargo feature that provides it
        feature: String,
    },
    /// Requested column absent from the input
    MissingColumn {
        /// Column name
        column: String,
        /// Input file
        path: String,
    },
    /// Configuration error
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::UnsupportedFormat(ext) => write!(f, "Unsupported file type: {ext}"),
            CliError::MissingCapability { format, feature } => write!(
                f,
                "{format} support is not available: rebuild with the '{feature}' feature"
            ),
            CliError::MissingColumn { column, path } => {
                write!(f, "Column '{column}' not found in {path}")
            }
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
