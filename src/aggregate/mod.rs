// src/aggregate/mod.rs
//! The per-category aggregation pipeline:
//! fetch-and-merge → exclude → recency sort → dedup → boost rank →
//! truncate → tag → sink.

pub mod dedup;
pub mod patterns;
pub mod scoring;
pub mod similarity;

use anyhow::{Context, Result};
use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge};
use once_cell::sync::OnceCell;
use tracing::{info, warn};
use uuid::Uuid;

use crate::aggregate::dedup::{dedup_by_title, DEFAULT_DEDUP_THRESHOLD};
use crate::aggregate::patterns::PatternSet;
use crate::aggregate::scoring::rank_by_boost;
use crate::config::{CategoryBook, CategoryConfig};
use crate::ingest::types::{NewsItem, SourceFetcher, TaggedItem};
use crate::sink::Sink;

/// One-time metrics registration.
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "aggregate_items_parsed_total",
            "Items parsed out of source feeds."
        );
        describe_counter!(
            "aggregate_items_fetched_total",
            "Items entering the pipeline after the merge."
        );
        describe_counter!(
            "aggregate_items_excluded_total",
            "Items dropped by exclusion rules."
        );
        describe_counter!(
            "aggregate_items_deduped_total",
            "Items removed as near-duplicates."
        );
        describe_counter!(
            "aggregate_items_emitted_total",
            "Items handed to the sink."
        );
        describe_counter!(
            "aggregate_fetch_errors_total",
            "Source fetch/parse failures."
        );
        describe_histogram!("aggregate_feed_parse_ms", "Feed parse time in milliseconds.");
        describe_gauge!(
            "aggregate_last_run_ts",
            "Unix ts when a category last ran."
        );
    });
}

/// Fresh opaque ids for the tagging stage.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Random UUID v4, the default id scheme.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Per-stage reduction counts for one category run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    pub fetched: usize,
    pub excluded: usize,
    pub deduped: usize,
    pub emitted: usize,
}

/// Run the whole pipeline for one category and hand the result to `sink`.
///
/// Malformed patterns abort before any fetch goes out. Individual fetch
/// failures are absorbed as zero items. Sink failures propagate.
pub async fn run_category(
    key: &str,
    book: &CategoryBook,
    fetchers: &[Box<dyn SourceFetcher>],
    ids: &dyn IdGenerator,
    sink: &dyn Sink,
) -> Result<RunStats> {
    ensure_metrics_described();

    let cfg = book.resolve(key);
    let excludes = PatternSet::compile(&cfg.exclude_patterns)
        .with_context(|| format!("category `{key}` exclude_patterns"))?;
    let boosts = PatternSet::compile(&cfg.boost_patterns)
        .with_context(|| format!("category `{key}` boost_patterns"))?;

    let mut items = fetch_and_merge(&cfg, fetchers).await;
    let mut stats = RunStats {
        fetched: items.len(),
        ..RunStats::default()
    };
    info!(category = %key, raw = stats.fetched, "fetched");

    // Exclusion rules check titles only.
    if !excludes.is_empty() {
        items.retain(|it| !excludes.matches_any(&it.title));
        stats.excluded = stats.fetched - items.len();
    }

    // Recency: lexicographic on the normalized timestamp, newest first,
    // empty timestamps last. Stable, so arrival order breaks ties.
    items.sort_by(|a, b| b.published_at.cmp(&a.published_at));

    // Most recent instance of a story survives.
    let before = items.len();
    let mut items = dedup_by_title(items, DEFAULT_DEDUP_THRESHOLD);
    stats.deduped = before - items.len();

    if !boosts.is_empty() {
        rank_by_boost(&mut items, &boosts);
    }

    items.truncate(cfg.result_limit);

    let tagged: Vec<TaggedItem> = items
        .into_iter()
        .map(|item| TaggedItem {
            item,
            id: ids.next_id(),
            category: key.to_string(),
        })
        .collect();
    stats.emitted = tagged.len();

    counter!("aggregate_items_fetched_total").increment(stats.fetched as u64);
    counter!("aggregate_items_excluded_total").increment(stats.excluded as u64);
    counter!("aggregate_items_deduped_total").increment(stats.deduped as u64);
    counter!("aggregate_items_emitted_total").increment(stats.emitted as u64);
    gauge!("aggregate_last_run_ts").set(chrono::Utc::now().timestamp().max(0) as f64);

    if tagged.is_empty() {
        info!(category = %key, "no items survived the pipeline");
    }
    sink.emit(key, &tagged)
        .await
        .with_context(|| format!("sink failed for category `{key}`"))?;

    info!(
        category = %key,
        fetched = stats.fetched,
        excluded = stats.excluded,
        deduped = stats.deduped,
        emitted = stats.emitted,
        "category run complete"
    );
    Ok(stats)
}

/// Every keyword against every fetcher, in order. A failed call is
/// logged and contributes nothing; partial results are the contract.
async fn fetch_and_merge(
    cfg: &CategoryConfig,
    fetchers: &[Box<dyn SourceFetcher>],
) -> Vec<NewsItem> {
    let mut merged = Vec::new();
    for keyword in &cfg.keywords {
        for f in fetchers {
            match f.fetch(keyword, cfg.max_per_source).await {
                Ok(mut v) => merged.append(&mut v),
                Err(e) => {
                    warn!(error = ?e, source = f.name(), keyword = %keyword, "source fetch error");
                    counter!("aggregate_fetch_errors_total").increment(1);
                }
            }
        }
    }
    merged
}
