//! Topic News Aggregator — Binary Entrypoint
//! Loads the category book, wires the news sources and the JSON sink,
//! and runs the aggregation pipeline for each requested category in turn.

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use topic_news_aggregator::cli::Cli;
use topic_news_aggregator::{
    run_category, CategoryBook, GoogleNewsFetcher, JsonFileSink, NaverNewsFetcher, SourceFetcher,
    UuidIds,
};

/// Compact tracing logs; `RUST_LOG` overrides the default `info` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    // This enables CATEGORIES_CONFIG_PATH / NAVER_CLIENT_ID / NAVER_CLIENT_SECRET
    // from .env so config.rs and the Naver fetcher can pick them up.
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    // --- Load the category book ---
    let book = match &cli.config {
        Some(path) => CategoryBook::from_toml_path(path)?,
        None => CategoryBook::from_toml()?,
    };

    // Explicit categories run in the given order; otherwise every configured
    // category runs in sorted order.
    let categories = if cli.categories.is_empty() {
        let mut keys: Vec<String> = book.keys().map(String::from).collect();
        keys.sort();
        keys
    } else {
        cli.categories.clone()
    };

    // --- Wire the sources ---
    let mut fetchers: Vec<Box<dyn SourceFetcher>> = vec![Box::new(GoogleNewsFetcher::new())];
    if cli.no_naver {
        info!("naver source disabled by --no-naver");
    } else {
        match NaverNewsFetcher::from_env() {
            Ok(fetcher) => fetchers.push(Box::new(fetcher)),
            Err(e) => warn!(error = ?e, "naver source disabled"),
        }
    }

    let sink = JsonFileSink::new(&cli.out_dir);
    let ids = UuidIds;

    let mut failed = 0usize;
    for key in &categories {
        match run_category(key, &book, &fetchers, &ids, &sink).await {
            Ok(stats) => {
                info!(
                    category = %key,
                    fetched = stats.fetched,
                    emitted = stats.emitted,
                    "category run finished"
                );
            }
            Err(e) => {
                warn!(error = ?e, category = %key, "category run failed");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} category runs failed", categories.len());
    }
    Ok(())
}
