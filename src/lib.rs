//! Casedex - in-memory search and similarity engine for AI use-case catalogs
//!
//! Casedex loads a flat JSON catalog of use-case records and answers
//! full-text search (with optional fuzzy term matching), exact categorical
//! filters, Jaccard-based similarity retrieval, and distribution statistics,
//! all against an atomically-swapped in-memory snapshot.
//!
//! # Quick Start
//!
//! ```ignore
//! use casedex::{IndexConfig, Indexer};
//!
//! let indexer = Indexer::new(IndexConfig::default())?;
//! indexer.load_and_index(Path::new("use_cases.json"))?;
//!
//! for hit in indexer.search("fraud detection", 10) {
//!     println!("{} ({:.2})", hit.case.name, hit.relevance_score);
//! }
//! ```
//!
//! Transport, CLI, and tool-handler surfaces are owned by callers; this
//! crate is the engine only.

// Re-export the public API
pub use casedex_core::{Error, IndexConfig, Result, UseCase, DEFAULT_INDEX_FIELDS};
pub use casedex_engine::{Indexer, SearchHit, SimilarHit, Snapshot, Statistics};
pub use casedex_search::{similarity_ratio, tokenize, tokenize_lower};
