// src/sink/mod.rs
pub mod json_file;

pub use json_file::JsonFileSink;

use crate::ingest::types::TaggedItem;
use anyhow::Result;

/// Output seam. Receives a category's complete final sequence in one
/// call; the array order IS the ranking.
#[async_trait::async_trait]
pub trait Sink {
    async fn emit(&self, category: &str, items: &[TaggedItem]) -> Result<()>;
}
