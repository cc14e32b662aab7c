// src/aggregate/dedup.rs
//! Greedy near-duplicate reduction over titles.
//!
//! Walks the list in order and keeps an item only when its title is not
//! similar to any already-kept title. The pipeline sorts by recency first,
//! so the survivor of every duplicate cluster is its most recent member.
//! O(n²) over the survivors; category result sets are tens of items.

use crate::aggregate::similarity::title_similarity;
use crate::ingest::types::NewsItem;

/// Similarity at or above this makes two titles the same story.
pub const DEFAULT_DEDUP_THRESHOLD: f64 = 0.6;

/// Keep one representative per similarity cluster, preserving order.
/// Items with an empty title never count as duplicates of anything.
pub fn dedup_by_title(items: Vec<NewsItem>, threshold: f64) -> Vec<NewsItem> {
    let mut kept: Vec<NewsItem> = Vec::with_capacity(items.len());
    for item in items {
        let dup = !item.title.is_empty()
            && kept.iter().any(|k| {
                !k.title.is_empty() && title_similarity(&item.title, &k.title) >= threshold
            });
        if !dup {
            kept.push(item);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, published_at: &str) -> NewsItem {
        NewsItem {
            source: "Test".into(),
            title: title.into(),
            link: String::new(),
            thumbnail: String::new(),
            description: String::new(),
            published_at: published_at.into(),
        }
    }

    #[test]
    fn near_duplicates_collapse_to_first_seen() {
        let items = vec![
            item("Tesla hits record", "2025-08-20T07:12:00Z"),
            item("Tesla hits record high", "2025-08-19T07:12:00Z"),
        ];
        let out = dedup_by_title(items, DEFAULT_DEDUP_THRESHOLD);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Tesla hits record");
    }

    #[test]
    fn distinct_titles_all_survive() {
        let items = vec![
            item("테슬라 주가 급등", "2025-08-20T07:12:00Z"),
            item("기아 신차 공개", "2025-08-19T07:12:00Z"),
        ];
        let out = dedup_by_title(items, DEFAULT_DEDUP_THRESHOLD);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn dedup_is_idempotent() {
        let items = vec![
            item("Tesla hits record", "2025-08-20T07:12:00Z"),
            item("Tesla hits record high", "2025-08-19T07:12:00Z"),
            item("기아 신차 공개", "2025-08-18T07:12:00Z"),
        ];
        let once = dedup_by_title(items, DEFAULT_DEDUP_THRESHOLD);
        let twice = dedup_by_title(once.clone(), DEFAULT_DEDUP_THRESHOLD);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_titles_are_never_duplicates() {
        let items = vec![
            item("", "2025-08-20T07:12:00Z"),
            item("", "2025-08-19T07:12:00Z"),
            item("Tesla hits record", "2025-08-18T07:12:00Z"),
        ];
        let out = dedup_by_title(items, DEFAULT_DEDUP_THRESHOLD);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn threshold_one_keeps_everything_but_exact_matches() {
        let items = vec![
            item("Tesla hits record", "2025-08-20T07:12:00Z"),
            item("Tesla hits record high", "2025-08-19T07:12:00Z"),
            item("tesla hits record", "2025-08-18T07:12:00Z"),
        ];
        let out = dedup_by_title(items, 1.0);
        // case-folded exact duplicate goes, the longer variant stays
        assert_eq!(out.len(), 2);
    }
}
