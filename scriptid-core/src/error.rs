//! Error types for scriptid-core
//!
//! Classification itself never fails: malformed tokens degrade to the
//! default language with zero confidence. Only configuration and snapshot
//! persistence surface errors.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for core operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unknown language code
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    /// Reading or writing the cache snapshot failed
    #[error("Cache persistence error at {}: {source}", path.display())]
    Persistence {
        /// Snapshot location
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The cache could not be serialized
    #[error("Cache snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
