//! Ratcliff/Obershelp similarity ratio
//!
//! This module provides the normalized string similarity used for fuzzy term
//! matching. The implementation reproduces Python's
//! `difflib.SequenceMatcher.ratio()`: find the longest matching block,
//! recurse on the pieces to the left and right, and return `2*M / T` where
//! `M` is the total matched character count and `T` the combined length of
//! both strings. Which documents cross the configured threshold is
//! observable behavior, so the algorithm is fixed here rather than
//! delegated to a generic edit-distance.
//!
//! The junk heuristic of `SequenceMatcher` only activates on sequences of
//! 200+ elements; word tokens never reach that, so it is omitted.

use rustc_hash::FxHashMap;

/// Normalized similarity ratio between two strings, in [0, 1]
///
/// `1.0` means identical; `0.0` means no characters in common. Two empty
/// strings are identical by convention.
///
/// # Example
///
/// ```
/// use casedex_search::ratio::similarity_ratio;
///
/// let r = similarity_ratio("helth", "health");
/// assert!(r > 0.9);
/// assert!((similarity_ratio("same", "same") - 1.0).abs() < f64::EPSILON);
/// ```
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matches = match_total(&a, &b, 0, a.len(), 0, b.len());
    2.0 * matches as f64 / total as f64
}

/// Total matched characters across all matching blocks in the given windows
fn match_total(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> usize {
    let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
    if k == 0 {
        return 0;
    }
    k + match_total(a, b, alo, i, blo, j) + match_total(a, b, i + k, ahi, j + k, bhi)
}

/// Longest block where `a[i..i+k] == b[j..j+k]` within the windows
///
/// Ties resolve to the lowest `i`, then the lowest `j`, matching
/// `SequenceMatcher.find_longest_match`. Returns `(i, j, k)` with `k == 0`
/// when the windows share no characters.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0);
    // j2len[j] = length of the longest match ending at a[i], b[j]
    let mut j2len: FxHashMap<usize, usize> = FxHashMap::default();
    for i in alo..ahi {
        let mut next: FxHashMap<usize, usize> = FxHashMap::default();
        for j in blo..bhi {
            if b[j] == a[i] {
                let k = if j > blo {
                    j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                next.insert(j, k);
                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
            }
        }
        j2len = next;
    }
    best
}
