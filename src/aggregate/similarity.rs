// src/aggregate/similarity.rs
//! Title similarity for the deduplicator.
//!
//! Metric: `strsim::normalized_levenshtein` over case-folded text, so
//! "Tesla Hits Record" and "tesla hits record" compare as identical.

use strsim::normalized_levenshtein;

/// Similarity of two titles in [0.0, 1.0]. 1.0 for identical input
/// (including two empty strings), falling toward 0.0 as they diverge.
pub fn title_similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}
