//! Core types for Casedex
//!
//! This crate defines the foundational types used throughout the system:
//! - UseCase: the immutable catalog record
//! - IndexConfig: indexing and search configuration
//! - Error: error type hierarchy
//!
//! Nothing in this crate touches an index; index structures live in
//! `casedex-search`, and the load/query facade lives in `casedex-engine`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod record;

// Re-export commonly used types
pub use config::{IndexConfig, DEFAULT_INDEX_FIELDS, DEFAULT_SIMILARITY_THRESHOLD};
pub use error::{Error, Result};
pub use record::UseCase;
