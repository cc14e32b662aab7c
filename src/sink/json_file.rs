// src/sink/json_file.rs
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

use crate::ingest::types::TaggedItem;
use crate::sink::Sink;

/// Writes `<out_dir>/<category>_news.json`: a pretty-printed UTF-8 array,
/// two-space indent, non-ASCII preserved literally. An empty run writes
/// nothing, so consumers keep the previous document.
pub struct JsonFileSink {
    out_dir: PathBuf,
}

impl JsonFileSink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn path_for(&self, category: &str) -> PathBuf {
        self.out_dir.join(format!("{category}_news.json"))
    }
}

#[async_trait]
impl Sink for JsonFileSink {
    async fn emit(&self, category: &str, items: &[TaggedItem]) -> Result<()> {
        if items.is_empty() {
            info!(category = %category, "nothing to write");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(items).context("serializing news items")?;

        tokio::fs::create_dir_all(&self.out_dir)
            .await
            .with_context(|| format!("creating {}", self.out_dir.display()))?;
        let path = self.path_for(category);
        tokio::fs::write(&path, json.as_bytes())
            .await
            .with_context(|| format!("writing {}", path.display()))?;

        info!(category = %category, items = items.len(), path = %path.display(), "wrote news document");
        Ok(())
    }
}
