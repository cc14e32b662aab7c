// src/config.rs
//! Category configuration: keyword sets and exclusion/boost rules per
//! topic, loaded from TOML.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

// --- env defaults & names ---
pub const DEFAULT_CATEGORIES_CONFIG_PATH: &str = "config/categories.toml";
pub const ENV_CATEGORIES_CONFIG_PATH: &str = "CATEGORIES_CONFIG_PATH";

/// Final output cap applied after scoring, unless a category lowers it.
pub const DEFAULT_RESULT_LIMIT: usize = 40;
/// Per-source cap for ad hoc categories that are not in the book.
pub const FALLBACK_MAX_PER_SOURCE: usize = 100;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CategoryConfig {
    /// Search queries, issued in order against every source.
    pub keywords: Vec<String>,
    /// Items requested from each source per keyword.
    pub max_per_source: usize,
    /// Items whose title matches any of these never make it through.
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
    /// Items matching more of these rank higher.
    #[serde(default)]
    pub boost_patterns: Vec<String>,
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
}

fn default_result_limit() -> usize {
    DEFAULT_RESULT_LIMIT
}

/// The immutable category table. Unknown keys resolve to a permissive
/// fallback so ad hoc categories still work.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryBook {
    categories: HashMap<String, CategoryConfig>,
}

impl CategoryBook {
    /// Load from CATEGORIES_CONFIG_PATH, defaulting to
    /// "config/categories.toml".
    pub fn from_toml() -> anyhow::Result<Self> {
        let path = std::env::var(ENV_CATEGORIES_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CATEGORIES_CONFIG_PATH));
        Self::from_toml_path(&path)
    }

    /// Load from an explicit TOML file.
    pub fn from_toml_path(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read categories config at {}: {}", path.display(), e)
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let book: CategoryBook = toml::from_str(toml_str)?;
        for (key, cfg) in &book.categories {
            if cfg.keywords.is_empty() {
                anyhow::bail!("category `{}` has no keywords", key);
            }
            if cfg.max_per_source == 0 {
                anyhow::bail!("category `{}` has max_per_source = 0", key);
            }
        }
        Ok(book)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(|s| s.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&CategoryConfig> {
        self.categories.get(key)
    }

    /// The configured entry for `key`, or the fallback: the bare key as
    /// the sole search keyword, a roomy per-source cap, no rules.
    pub fn resolve(&self, key: &str) -> CategoryConfig {
        self.categories.get(key).cloned().unwrap_or_else(|| CategoryConfig {
            keywords: vec![key.to_string()],
            max_per_source: FALLBACK_MAX_PER_SOURCE,
            exclude_patterns: Vec::new(),
            boost_patterns: Vec::new(),
            result_limit: DEFAULT_RESULT_LIMIT,
        })
    }
}
