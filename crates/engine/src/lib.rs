//! Load/query facade for casedex
//!
//! This crate provides:
//! - Document loader for the two accepted JSON shapes
//! - Snapshot: one record store plus its four indices, built atomically
//! - Indexer: the public facade (load, search, filter, similarity, statistics)
//! - Weighted Jaccard similarity between records
//! - Statistics aggregation over the current snapshot
//!
//! # Usage
//!
//! ```ignore
//! use casedex_engine::Indexer;
//! use casedex_core::IndexConfig;
//!
//! let indexer = Indexer::new(IndexConfig::default())?;
//! indexer.load_and_index(Path::new("use_cases.json"))?;
//! let hits = indexer.search("fraud detection", 10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod indexer;
pub mod loader;
pub mod results;
pub mod similarity;
pub mod snapshot;
pub mod stats;

// Re-export commonly used types
pub use indexer::Indexer;
pub use results::{SearchHit, SimilarHit};
pub use snapshot::Snapshot;
pub use stats::Statistics;
