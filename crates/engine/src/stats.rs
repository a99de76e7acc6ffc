//! Statistics aggregation
//!
//! Summaries are recomputed on demand from the current snapshot; nothing is
//! cached, so a summary can never go stale relative to the snapshot it was
//! computed from. Counts come straight from the index posting-set sizes.

use crate::snapshot::Snapshot;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// How many entries the top-N distributions carry
pub const TOP_N: usize = 10;

/// Distribution summary of one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Total loaded records
    pub total_use_cases: usize,
    /// Record count per application domain
    pub domains: BTreeMap<String, usize>,
    /// Record count per AI method
    pub ai_methods: BTreeMap<String, usize>,
    /// Record count per status
    pub statuses: BTreeMap<String, usize>,
    /// Top domains by count, descending (ties lexicographic)
    pub top_domains: Vec<(String, usize)>,
    /// Top AI methods by count, descending (ties lexicographic)
    pub top_ai_methods: Vec<(String, usize)>,
    /// All distinct task strings, sorted
    pub tasks: Vec<String>,
    /// Number of distinct task strings
    pub task_count: usize,
}

/// Compute the distribution summary for a snapshot
pub fn compute(snapshot: &Snapshot) -> Statistics {
    let indices = snapshot.indices();

    let domains: BTreeMap<String, usize> = indices
        .domains()
        .map(|(k, v)| (k.clone(), v.len()))
        .collect();
    let ai_methods: BTreeMap<String, usize> = indices
        .methods()
        .map(|(k, v)| (k.clone(), v.len()))
        .collect();
    let statuses: BTreeMap<String, usize> = indices
        .statuses()
        .map(|(k, v)| (k.clone(), v.len()))
        .collect();

    let tasks: BTreeSet<String> = snapshot
        .records()
        .iter()
        .flat_map(|c| c.tasks.iter().cloned())
        .collect();
    let tasks: Vec<String> = tasks.into_iter().collect();

    Statistics {
        total_use_cases: snapshot.len(),
        top_domains: top_n(&domains, TOP_N),
        top_ai_methods: top_n(&ai_methods, TOP_N),
        task_count: tasks.len(),
        domains,
        ai_methods,
        statuses,
        tasks,
    }
}

/// Highest-count entries of a distribution, descending (ties lexicographic)
fn top_n(counts: &BTreeMap<String, usize>, n: usize) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = counts
        .iter()
        .map(|(k, v)| (k.clone(), *v))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(n);
    entries
}
