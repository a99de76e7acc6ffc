//! Additive relevance scoring over the text index
//!
//! Each query token contributes independently to a per-record accumulator:
//! - an exact index hit adds `1.0` to every posting of that token;
//! - with fuzzy matching enabled, every vocabulary term whose
//!   Ratcliff/Obershelp ratio with the token reaches the configured
//!   threshold adds `ratio * 0.8` to its postings.
//!
//! An exact match also passes the fuzzy check with ratio 1.0 and is counted
//! by both rules (`1.0 + 0.8`). That double-count matches the reference
//! scoring law and is intentional; do not "fix" it here without changing
//! every recorded score expectation.
//!
//! The fuzzy pass scans the entire vocabulary per query token, i.e.
//! O(query_tokens x vocabulary_size). That trade favors exactness of the
//! scoring law over asymptotics and is acceptable at catalog scale.

use crate::index::IndexSet;
use crate::ratio::similarity_ratio;
use crate::tokenizer::tokenize_lower;
use casedex_core::IndexConfig;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// Weight applied to fuzzy-match contributions
pub const FUZZY_WEIGHT: f64 = 0.8;

/// Accumulate relevance scores for a query
///
/// Returns record position -> score for every record with a nonzero score.
/// An empty or whitespace-only query, or a query with no tokens after
/// tokenization, yields an empty map.
pub fn score_query(indices: &IndexSet, config: &IndexConfig, query: &str) -> FxHashMap<usize, f64> {
    let mut scores: FxHashMap<usize, f64> = FxHashMap::default();
    if query.trim().is_empty() {
        return scores;
    }

    for token in tokenize_lower(query) {
        if let Some(postings) = indices.lookup(&token) {
            for &position in postings {
                *scores.entry(position).or_insert(0.0) += 1.0;
            }
        }

        if config.fuzzy_matching {
            for (term, postings) in indices.terms() {
                let ratio = similarity_ratio(&token, term);
                if ratio >= config.similarity_threshold {
                    for &position in postings {
                        *scores.entry(position).or_insert(0.0) += ratio * FUZZY_WEIGHT;
                    }
                }
            }
        }
    }

    scores
}

/// Order accumulated scores and take the top `limit`
///
/// Descending by score; equal scores order by ascending record position so
/// results are deterministic across runs.
pub fn rank(scores: FxHashMap<usize, f64>, limit: usize) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = scores.into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    ranked.truncate(limit);
    ranked
}
