//! Search infrastructure for casedex
//!
//! This crate provides:
//! - Basic tokenizer shared by indexing and queries
//! - Ratcliff/Obershelp similarity ratio for fuzzy term matching
//! - IndexSet: the inverted text index plus the three categorical indices
//! - Additive relevance scorer over the text index
//!
//! Index structures here are built once per load and never mutated; the
//! atomic snapshot swap around them lives in `casedex-engine`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod ratio;
pub mod scorer;
pub mod tokenizer;

// Re-export commonly used types
pub use index::{IndexSet, PostingSet};
pub use ratio::similarity_ratio;
pub use scorer::{rank, score_query, FUZZY_WEIGHT};
pub use tokenizer::{tokenize, tokenize_lower};
