//! Query result types
//!
//! Hits carry a clone of the stored record (copy-on-read; callers can
//! mutate their copy without corrupting the snapshot) plus the score that
//! produced them. Serialization flattens the record so external layers see
//! the record's own fields with `relevance_score` / `similarity_score`
//! alongside them.

use casedex_core::UseCase;
use serde::Serialize;

/// One full-text search result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    /// The matched record
    #[serde(flatten)]
    pub case: UseCase,
    /// Accumulated relevance score; finite and > 0
    pub relevance_score: f64,
}

/// One nearest-neighbor similarity result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarHit {
    /// The similar record
    #[serde(flatten)]
    pub case: UseCase,
    /// Weighted similarity in (0, 1]; zero-similarity records are dropped
    pub similarity_score: f64,
}
