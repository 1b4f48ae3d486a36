//! String similarity scoring.
//!
//! Thin wrapper over `strsim`'s Jaro-Winkler metric, scaled to the 0-100
//! integer range the comparator works in. Scores are truncated, not rounded;
//! downstream weighting depends on that for tie-breaking near thresholds.

/// Similarity between two strings as an integer in [0, 100].
///
/// Identical strings score 100 (including two empty strings); strings with
/// no characters in common score 0. Symmetric in its arguments. Case and
/// punctuation handling is whatever the underlying metric does - callers
/// must not pre-normalize.
pub fn similarity(a: &str, b: &str) -> u8 {
    (strsim::jaro_winkler(a, b) * 100.0) as u8
}
