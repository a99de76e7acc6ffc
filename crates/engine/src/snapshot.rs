//! Immutable snapshot of the record store and its indices
//!
//! A snapshot is the unit of atomicity for the engine: one load produces one
//! snapshot, and every query runs against exactly one snapshot. Record
//! positions stored in the indices are only meaningful for the record store
//! they were built from, which is why the store and all four indices live
//! and die together.

use casedex_core::{IndexConfig, UseCase};
use casedex_search::IndexSet;

/// One loaded record store plus the four indices derived from it
///
/// Snapshots are immutable after construction. Readers share them through
/// `Arc`; reload builds a fresh snapshot off to the side and swaps the
/// shared pointer, so a reader always sees fully-old or fully-new state.
#[derive(Debug, Default)]
pub struct Snapshot {
    records: Vec<UseCase>,
    indices: IndexSet,
}

impl Snapshot {
    /// Snapshot with no records; the state before the first load
    pub fn empty() -> Self {
        Snapshot::default()
    }

    /// Build a snapshot from loaded records
    ///
    /// Indexing is a single pass; see [`IndexSet::build`].
    pub fn build(records: Vec<UseCase>, config: &IndexConfig) -> Self {
        let indices = IndexSet::build(&records, &config.index_fields);
        Snapshot { records, indices }
    }

    /// The loaded records, in document order
    pub fn records(&self) -> &[UseCase] {
        &self.records
    }

    /// The indices built from this snapshot's records
    pub fn indices(&self) -> &IndexSet {
        &self.indices
    }

    /// Number of loaded records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
