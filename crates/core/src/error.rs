//! Error types for the casedex engine
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Only loading and configuration can fail. Queries against a loaded snapshot
//! are total: unknown filter values, unknown reference ids, and empty query
//! strings all produce empty result sequences, never errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for casedex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the casedex engine
#[derive(Debug, Error)]
pub enum Error {
    /// Source file could not be read
    #[error("failed to read '{path}': {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Document contained malformed JSON or ill-typed records
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),

    /// Document top level was neither a `use_cases` object nor an array
    #[error("unsupported document shape: {0}")]
    InvalidShape(String),

    /// Configuration value out of range or unparseable
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Build an I/O error carrying the offending path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
