//! Indexer configuration
//!
//! Configuration is an explicit value constructed once at process start and
//! passed into the engine; there is no ambient global. It can be built in
//! code, deserialized from JSON, or read from a `casedex.toml` file.
//!
//! # Example
//!
//! ```toml
//! # Fields concatenated into the full-text blob, in order
//! index_fields = ["name", "description", "narrative"]
//!
//! # Expand exact matches with approximate term matches
//! fuzzy_matching = true
//!
//! # Minimum Ratcliff/Obershelp ratio for a fuzzy term match
//! similarity_threshold = 0.7
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fields indexed into the full-text blob when none are configured
pub const DEFAULT_INDEX_FIELDS: [&str; 6] = [
    "name",
    "description",
    "narrative",
    "application_domain",
    "ai_methods",
    "tasks",
];

/// Default minimum similarity ratio for fuzzy term matches
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;

/// Configuration for index building and search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Record fields concatenated into the full-text blob, in order
    #[serde(default = "default_index_fields")]
    pub index_fields: Vec<String>,
    /// Whether search expands exact token matches with fuzzy term matches
    #[serde(default = "default_fuzzy_matching")]
    pub fuzzy_matching: bool,
    /// Minimum similarity ratio in [0, 1] for a fuzzy term match
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
}

fn default_index_fields() -> Vec<String> {
    DEFAULT_INDEX_FIELDS.iter().map(|s| s.to_string()).collect()
}

fn default_fuzzy_matching() -> bool {
    true
}

fn default_similarity_threshold() -> f64 {
    DEFAULT_SIMILARITY_THRESHOLD
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            index_fields: default_index_fields(),
            fuzzy_matching: default_fuzzy_matching(),
            similarity_threshold: default_similarity_threshold(),
        }
    }
}

impl IndexConfig {
    /// Check configuration invariants
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `similarity_threshold` is outside
    /// [0, 1] or not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.similarity_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.similarity_threshold)
        {
            return Err(Error::InvalidConfig(format!(
                "similarity_threshold must be within [0, 1], got {}",
                self.similarity_threshold
            )));
        }
        Ok(())
    }

    /// Read and parse configuration from a TOML file
    ///
    /// Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: IndexConfig = toml::from_str(&content).map_err(|e| {
            Error::InvalidConfig(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }
}
