// src/ingest/types.rs
use anyhow::Result;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct NewsItem {
    pub source: String, // publisher display name; may be empty
    pub title: String,  // cleaned plain text, never raw HTML
    pub link: String,
    pub thumbnail: String, // "" when the feed carries no image
    pub description: String,
    pub published_at: String, // RFC 3339 UTC seconds, "" when unknown
}

/// Output row produced by the tagging stage. Earlier stages never see
/// `id` and `category`; flattening keeps them last in the wire object.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct TaggedItem {
    #[serde(flatten)]
    pub item: NewsItem,
    pub id: String,
    pub category: String,
}

#[async_trait::async_trait]
pub trait SourceFetcher {
    /// Up to `limit` items for `query`, text fields pre-cleaned and
    /// timestamps normalized to UTC RFC 3339.
    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<NewsItem>>;
    fn name(&self) -> &'static str;
}
