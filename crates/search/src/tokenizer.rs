//! Basic tokenizer shared by indexing and queries
//!
//! Tokenization is deliberately simple: strip punctuation, split on
//! whitespace, drop very short tokens. No stemming or stopword removal.
//! Case is preserved here; the index and the scorer lowercase tokens
//! themselves via [`tokenize_lower`].

/// Tokenize text into word tokens, preserving case
///
/// Every character that is not alphanumeric, `_`, or whitespace is replaced
/// by a space, the result is split on whitespace, and tokens of length <= 2
/// characters are dropped. Order is preserved. Deterministic, no side
/// effects.
///
/// # Example
///
/// ```
/// use casedex_search::tokenizer::tokenize;
///
/// let tokens = tokenize("AI-driven Fraud Detection!");
/// assert_eq!(tokens, vec!["driven", "Fraud", "Detection"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned
        .split_whitespace()
        .filter(|t| t.chars().count() > 2)
        .map(String::from)
        .collect()
}

/// Tokenize and lowercase, for index keys and query terms
///
/// # Example
///
/// ```
/// use casedex_search::tokenizer::tokenize_lower;
///
/// let tokens = tokenize_lower("Machine Learning");
/// assert_eq!(tokens, vec!["machine", "learning"]);
/// ```
pub fn tokenize_lower(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .map(|t| t.to_lowercase())
        .collect()
}
