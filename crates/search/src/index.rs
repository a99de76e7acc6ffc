//! Inverted text index and categorical indices
//!
//! This module provides:
//! - PostingSet: ordered set of record positions
//! - IndexSet: the text index plus the domain/method/status indices
//! - Single-pass builder over a loaded record store
//!
//! Positions are 0-based offsets into the record store the indices were
//! built from and are only valid for that snapshot. An `IndexSet` is never
//! mutated after `build` returns; reload replaces all four indices together.

use crate::tokenizer::tokenize_lower;
use casedex_core::UseCase;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Ordered set of record positions containing a term or categorical value
pub type PostingSet = BTreeSet<usize>;

/// All four indices derived from one record store
///
/// The text index maps lowercase tokens to the positions whose configured
/// fields contain them. The domain/method/status indices map exact
/// categorical values (original case) to positions; empty values are not
/// indexed. Postings stay private; readers go through the accessors.
#[derive(Debug, Clone, Default)]
pub struct IndexSet {
    text: FxHashMap<String, PostingSet>,
    domain: FxHashMap<String, PostingSet>,
    method: FxHashMap<String, PostingSet>,
    status: FxHashMap<String, PostingSet>,
}

impl IndexSet {
    /// Build all four indices in one pass over the record store
    ///
    /// For each record: the configured `index_fields` are concatenated into
    /// a text blob (list fields joined by spaces), tokenized, and lowercased
    /// into the text index; non-empty categorical fields go into their
    /// respective indices under their original-case value.
    ///
    /// O(total tokens across all records).
    pub fn build(records: &[UseCase], index_fields: &[String]) -> Self {
        let mut indices = IndexSet::default();

        for (position, case) in records.iter().enumerate() {
            let mut blob = String::new();
            for field in index_fields {
                if let Some(text) = case.field_text(field) {
                    blob.push_str(&text);
                    blob.push(' ');
                }
            }

            for token in tokenize_lower(&blob) {
                indices.text.entry(token).or_default().insert(position);
            }

            if !case.application_domain.is_empty() {
                indices
                    .domain
                    .entry(case.application_domain.clone())
                    .or_default()
                    .insert(position);
            }
            for method in &case.ai_methods {
                indices
                    .method
                    .entry(method.clone())
                    .or_default()
                    .insert(position);
            }
            if !case.status.is_empty() {
                indices
                    .status
                    .entry(case.status.clone())
                    .or_default()
                    .insert(position);
            }
        }

        indices
    }

    /// Positions whose text contains the (lowercase) token
    pub fn lookup(&self, token: &str) -> Option<&PostingSet> {
        self.text.get(token)
    }

    /// Iterate every (token, postings) pair in the text index
    pub fn terms(&self) -> impl Iterator<Item = (&String, &PostingSet)> {
        self.text.iter()
    }

    /// Number of distinct tokens in the text index
    pub fn vocabulary_size(&self) -> usize {
        self.text.len()
    }

    /// Positions whose `application_domain` equals `value` exactly
    pub fn domain_postings(&self, value: &str) -> Option<&PostingSet> {
        self.domain.get(value)
    }

    /// Positions whose `ai_methods` contain `value` exactly
    pub fn method_postings(&self, value: &str) -> Option<&PostingSet> {
        self.method.get(value)
    }

    /// Positions whose `status` equals `value` exactly
    pub fn status_postings(&self, value: &str) -> Option<&PostingSet> {
        self.status.get(value)
    }

    /// Iterate every (domain, postings) pair
    pub fn domains(&self) -> impl Iterator<Item = (&String, &PostingSet)> {
        self.domain.iter()
    }

    /// Iterate every (method, postings) pair
    pub fn methods(&self) -> impl Iterator<Item = (&String, &PostingSet)> {
        self.method.iter()
    }

    /// Iterate every (status, postings) pair
    pub fn statuses(&self) -> impl Iterator<Item = (&String, &PostingSet)> {
        self.status.iter()
    }
}
