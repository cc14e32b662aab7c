// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod ingest;
pub mod sink;

// ---- Re-exports for stable public API ----
pub use crate::aggregate::{run_category, IdGenerator, RunStats, UuidIds};
pub use crate::config::{CategoryBook, CategoryConfig};
pub use crate::ingest::providers::{GoogleNewsFetcher, NaverNewsFetcher};
pub use crate::ingest::types::{NewsItem, SourceFetcher, TaggedItem};
pub use crate::sink::{JsonFileSink, Sink};
