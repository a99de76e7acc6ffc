//! The use-case record type
//!
//! A `UseCase` is the unit of the catalog: a structured description of one
//! AI application. Records are immutable once loaded; every index refers to
//! them by position in the loaded record store.
//!
//! The schema is open at the source: fields the struct does not recognize
//! land in the `extra` side-map instead of being rejected, so documents with
//! additional columns still load. Index building only ever sees text through
//! [`UseCase::field_text`], which resolves both fixed and extra fields.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One use-case record from the source document
///
/// `id` is the natural key for similarity lookups and is the only required
/// field; everything else defaults to empty. Empty categorical fields
/// (`application_domain`, `status`) are skipped at index time rather than
/// indexed under an empty-string key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseCase {
    /// Unique record identifier (natural key)
    pub id: u64,
    /// Short display name
    #[serde(default)]
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Longer free-text narrative
    #[serde(default)]
    pub narrative: String,
    /// Categorical application domain (e.g. "Healthcare")
    #[serde(default)]
    pub application_domain: String,
    /// AI methods employed; set-like, duplicates tolerated
    #[serde(default)]
    pub ai_methods: Vec<String>,
    /// Tasks addressed; set-like, duplicates tolerated
    #[serde(default)]
    pub tasks: Vec<String>,
    /// Lifecycle status (open enumeration: Research/PoC/Pilot/Production/...)
    #[serde(default)]
    pub status: String,
    /// Unrecognized source fields, preserved verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl UseCase {
    /// Resolve a named field to indexable text
    ///
    /// String fields yield their value; list fields yield their elements
    /// joined by single spaces. Unknown names fall through to the `extra`
    /// side-map, where strings and arrays are stringified the same way.
    /// Returns `None` for absent fields and non-text values.
    pub fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "description" => Some(self.description.clone()),
            "narrative" => Some(self.narrative.clone()),
            "application_domain" => Some(self.application_domain.clone()),
            "status" => Some(self.status.clone()),
            "ai_methods" => Some(self.ai_methods.join(" ")),
            "tasks" => Some(self.tasks.join(" ")),
            other => self.extra.get(other).and_then(json_text),
        }
    }
}

/// Stringify a JSON value for indexing: strings as-is, arrays joined by
/// spaces, scalars via display. Objects and null are not indexable.
fn json_text(value: &serde_json::Value) -> Option<String> {
    use serde_json::Value;
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(json_text).collect();
            Some(parts.join(" "))
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Object(_) => None,
    }
}
