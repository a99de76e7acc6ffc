//! Document loading
//!
//! A source document is a JSON file in one of two accepted shapes:
//!
//! - `{"use_cases": [ {...}, ... ]}`
//! - a bare top-level array `[ {...}, ... ]`
//!
//! Anything else at the top level is a load failure. Loading never touches
//! engine state; the caller builds a fresh snapshot from the returned
//! records and swaps it in only on success, so a failed load leaves the
//! previous snapshot intact.

use casedex_core::{Error, Result, UseCase};
use serde_json::Value;
use std::path::Path;

/// Read and parse a use-case document from disk
///
/// # Errors
///
/// - [`Error::Io`] if the file cannot be read
/// - [`Error::Json`] if the content is not valid JSON or records are
///   ill-typed
/// - [`Error::InvalidShape`] if the top level is neither a `use_cases`
///   object nor an array
pub fn load_document(path: &Path) -> Result<Vec<UseCase>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let value: Value = serde_json::from_str(&content)?;
    parse_document(value)
}

/// Extract the record list from a parsed document
pub fn parse_document(value: Value) -> Result<Vec<UseCase>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("use_cases") {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(Error::InvalidShape(format!(
                    "'use_cases' must be an array, got {}",
                    type_name(&other)
                )))
            }
            None => {
                return Err(Error::InvalidShape(
                    "top-level object has no 'use_cases' key".to_string(),
                ))
            }
        },
        other => {
            return Err(Error::InvalidShape(format!(
                "expected an array or a 'use_cases' object, got {}",
                type_name(&other)
            )))
        }
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(Error::from))
        .collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
