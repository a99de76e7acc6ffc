//! Weighted Jaccard similarity between use cases
//!
//! Similarity between a reference record and a candidate is a fixed-weight
//! blend of three signals:
//!
//! - `0.5 *` Jaccard overlap of `ai_methods`
//! - `0.3 *` exact `application_domain` equality
//! - `0.2 *` Jaccard overlap of `tasks`
//!
//! No index is consulted; lookup of the reference is a linear scan by `id`.
//! Similarity retrieval is infrequent relative to search, so an id-position
//! index is deliberately not maintained.

use casedex_core::UseCase;
use std::collections::HashSet;

/// Weight of the `ai_methods` Jaccard component
pub const METHOD_WEIGHT: f64 = 0.5;
/// Weight of the `application_domain` equality component
pub const DOMAIN_WEIGHT: f64 = 0.3;
/// Weight of the `tasks` Jaccard component
pub const TASK_WEIGHT: f64 = 0.2;

/// Jaccard index of two string lists: `|A n B| / |A u B|`
///
/// Duplicates collapse under set semantics. An empty union yields 0.
pub fn jaccard(a: &[String], b: &[String]) -> f64 {
    let a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let b: HashSet<&str> = b.iter().map(String::as_str).collect();
    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(&b).count();
    intersection as f64 / union as f64
}

/// Weighted similarity between two records, in [0, 1]
pub fn similarity(reference: &UseCase, candidate: &UseCase) -> f64 {
    let method_sim = jaccard(&reference.ai_methods, &candidate.ai_methods);
    let domain_sim = if reference.application_domain == candidate.application_domain {
        1.0
    } else {
        0.0
    };
    let task_sim = jaccard(&reference.tasks, &candidate.tasks);
    METHOD_WEIGHT * method_sim + DOMAIN_WEIGHT * domain_sim + TASK_WEIGHT * task_sim
}

/// Rank all records by similarity to the record with `reference_id`
///
/// Returns `(position, similarity)` pairs, highest first, at most `limit`.
/// Every record sharing the reference `id` is excluded (exclusion is by id,
/// not by position, so duplicate ids never leak into results). Records with
/// zero similarity are dropped. Unknown `reference_id` yields an empty
/// sequence. Ties order by ascending position.
pub fn find_similar(records: &[UseCase], reference_id: u64, limit: usize) -> Vec<(usize, f64)> {
    let Some(reference) = records.iter().find(|c| c.id == reference_id) else {
        return Vec::new();
    };

    let mut scored: Vec<(usize, f64)> = records
        .iter()
        .enumerate()
        .filter(|(_, candidate)| candidate.id != reference_id)
        .map(|(position, candidate)| (position, similarity(reference, candidate)))
        .filter(|&(_, score)| score > 0.0)
        .collect();

    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    scored.truncate(limit);
    scored
}
