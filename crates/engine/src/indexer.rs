//! The Indexer facade
//!
//! `Indexer` owns the configuration and the current snapshot, and exposes
//! every engine operation: load, search, filters, similarity, statistics.
//!
//! # Concurrency
//!
//! `load_and_index` is the only mutating operation. It builds the new
//! record store and all four indices into a fresh [`Snapshot`] off to the
//! side, then swaps the shared `Arc` under a brief write lock. Readers
//! clone the `Arc` and compute lock-free, so they observe either the
//! fully-old or the fully-new snapshot, never a partial one. A failed load
//! leaves the previous snapshot untouched.

use crate::loader;
use crate::results::{SearchHit, SimilarHit};
use crate::similarity;
use crate::snapshot::Snapshot;
use crate::stats::{self, Statistics};
use casedex_core::{IndexConfig, Result, UseCase};
use casedex_search::{scorer, PostingSet};
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// In-memory search and similarity engine over a use-case catalog
pub struct Indexer {
    config: IndexConfig,
    state: RwLock<Arc<Snapshot>>,
}

impl Default for Indexer {
    fn default() -> Self {
        Indexer {
            config: IndexConfig::default(),
            state: RwLock::new(Arc::new(Snapshot::empty())),
        }
    }
}

impl Indexer {
    /// Create an empty indexer with the given configuration
    ///
    /// # Errors
    ///
    /// Returns [`casedex_core::Error::InvalidConfig`] if the configuration
    /// fails validation.
    pub fn new(config: IndexConfig) -> Result<Self> {
        config.validate()?;
        Ok(Indexer {
            config,
            state: RwLock::new(Arc::new(Snapshot::empty())),
        })
    }

    /// The configuration this indexer was built with
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Current snapshot handle; queries hold this, not the lock
    fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.state.read())
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Load a document and rebuild the record store and all four indices
    ///
    /// All-or-nothing: on any error the previous snapshot stays in place.
    /// Returns the number of loaded records.
    ///
    /// # Errors
    ///
    /// Propagates loader errors; see [`loader::load_document`].
    pub fn load_and_index(&self, path: &Path) -> Result<usize> {
        let started = Instant::now();
        let records = loader::load_document(path)?;
        let snapshot = Arc::new(Snapshot::build(records, &self.config));
        let count = snapshot.len();
        let vocabulary = snapshot.indices().vocabulary_size();

        *self.state.write() = snapshot;

        info!(
            path = %path.display(),
            records = count,
            vocabulary,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "indexed use-case document"
        );
        Ok(count)
    }

    /// Reload from a document, atomically replacing the current snapshot
    ///
    /// Identical to [`Indexer::load_and_index`]; named for callers that
    /// refresh an already-loaded catalog.
    pub fn reload(&self, path: &Path) -> Result<usize> {
        self.load_and_index(path)
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Full-text search with relevance scores, highest first
    ///
    /// At most `limit` hits. Empty and whitespace-only queries return no
    /// hits. Equal scores order by ascending record position. Each hit
    /// carries a clone of the stored record.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        let snapshot = self.snapshot();
        let scores = scorer::score_query(snapshot.indices(), &self.config, query);
        let candidates = scores.len();
        let hits: Vec<SearchHit> = scorer::rank(scores, limit)
            .into_iter()
            .map(|(position, score)| SearchHit {
                case: snapshot.records()[position].clone(),
                relevance_score: score,
            })
            .collect();
        debug!(query, candidates, returned = hits.len(), "search");
        hits
    }

    // ========================================================================
    // Filters
    // ========================================================================

    /// Records whose `application_domain` equals `value` exactly
    ///
    /// Unknown values yield an empty sequence, not an error.
    pub fn filter_by_domain(&self, value: &str) -> Vec<UseCase> {
        let snapshot = self.snapshot();
        collect_positions(&snapshot, snapshot.indices().domain_postings(value))
    }

    /// Records whose `ai_methods` contain `value` exactly
    pub fn filter_by_method(&self, value: &str) -> Vec<UseCase> {
        let snapshot = self.snapshot();
        collect_positions(&snapshot, snapshot.indices().method_postings(value))
    }

    /// Records whose `status` equals `value` exactly
    pub fn filter_by_status(&self, value: &str) -> Vec<UseCase> {
        let snapshot = self.snapshot();
        collect_positions(&snapshot, snapshot.indices().status_postings(value))
    }

    /// All known application domains, sorted
    pub fn domains(&self) -> Vec<String> {
        let snapshot = self.snapshot();
        let mut keys: Vec<String> = snapshot.indices().domains().map(|(k, _)| k.clone()).collect();
        keys.sort();
        keys
    }

    /// All known AI methods, by descending frequency (ties lexicographic)
    pub fn ai_methods(&self) -> Vec<String> {
        let snapshot = self.snapshot();
        let mut entries: Vec<(&String, usize)> = snapshot
            .indices()
            .methods()
            .map(|(k, v)| (k, v.len()))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.into_iter().map(|(k, _)| k.clone()).collect()
    }

    /// All known statuses, sorted
    pub fn statuses(&self) -> Vec<String> {
        let snapshot = self.snapshot();
        let mut keys: Vec<String> = snapshot.indices().statuses().map(|(k, _)| k.clone()).collect();
        keys.sort();
        keys
    }

    // ========================================================================
    // Similarity
    // ========================================================================

    /// Records most similar to the one with `reference_id`, highest first
    ///
    /// At most `limit` hits; zero-similarity records and every record
    /// sharing the reference id are excluded. Unknown ids yield an empty
    /// sequence.
    pub fn find_similar(&self, reference_id: u64, limit: usize) -> Vec<SimilarHit> {
        let snapshot = self.snapshot();
        let hits: Vec<SimilarHit> = similarity::find_similar(snapshot.records(), reference_id, limit)
            .into_iter()
            .map(|(position, score)| SimilarHit {
                case: snapshot.records()[position].clone(),
                similarity_score: score,
            })
            .collect();
        debug!(reference_id, returned = hits.len(), "find_similar");
        hits
    }

    /// Fetch one record by id (linear scan, same discipline as similarity)
    pub fn get_use_case(&self, id: u64) -> Option<UseCase> {
        let snapshot = self.snapshot();
        snapshot.records().iter().find(|c| c.id == id).cloned()
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Distribution summary of the current snapshot
    ///
    /// Recomputed on every call; see [`crate::stats`].
    pub fn statistics(&self) -> Statistics {
        stats::compute(&self.snapshot())
    }

    /// Number of loaded records
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Whether no document has been loaded (or it was empty)
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Number of distinct tokens in the text index
    pub fn vocabulary_size(&self) -> usize {
        self.snapshot().indices().vocabulary_size()
    }
}

/// Clone the records at the indexed positions, in position order
fn collect_positions(snapshot: &Snapshot, positions: Option<&PostingSet>) -> Vec<UseCase> {
    match positions {
        Some(set) => set
            .iter()
            .map(|&position| snapshot.records()[position].clone())
            .collect(),
        None => Vec::new(),
    }
}
