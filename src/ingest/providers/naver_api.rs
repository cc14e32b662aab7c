// src/ingest/providers/naver_api.rs
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use metrics::{counter, histogram};
use serde::Deserialize;

use crate::ingest::clean_text;
use crate::ingest::media::media_name_from_url;
use crate::ingest::providers::{format_utc, parse_rfc2822_utc};
use crate::ingest::types::{NewsItem, SourceFetcher};

const SEARCH_URL: &str = "https://openapi.naver.com/v1/search/news.json";

pub const ENV_NAVER_CLIENT_ID: &str = "NAVER_CLIENT_ID";
pub const ENV_NAVER_CLIENT_SECRET: &str = "NAVER_CLIENT_SECRET";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<ApiItem>,
}

#[derive(Debug, Deserialize)]
struct ApiItem {
    title: Option<String>,
    originallink: Option<String>,
    link: Option<String>,
    description: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
}

/// Naver News search API. Titles and descriptions arrive with `<b>`
/// highlight markup; the publisher is derived from the original link.
#[derive(Debug)]
pub struct NaverNewsFetcher {
    mode: Mode,
}

#[derive(Debug)]
enum Mode {
    Fixture(String),
    Http {
        client: reqwest::Client,
        client_id: String,
        client_secret: String,
    },
}

impl NaverNewsFetcher {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            mode: Mode::Http {
                client: reqwest::Client::new(),
                client_id: client_id.into(),
                client_secret: client_secret.into(),
            },
        }
    }

    /// Credentials from NAVER_CLIENT_ID / NAVER_CLIENT_SECRET.
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var(ENV_NAVER_CLIENT_ID)
            .map_err(|_| anyhow!("{} is not set", ENV_NAVER_CLIENT_ID))?;
        let client_secret = std::env::var(ENV_NAVER_CLIENT_SECRET)
            .map_err(|_| anyhow!("{} is not set", ENV_NAVER_CLIENT_SECRET))?;
        Ok(Self::new(client_id, client_secret))
    }

    /// Parse a canned JSON payload instead of calling the network.
    pub fn from_fixture_str(s: &str) -> Self {
        Self {
            mode: Mode::Fixture(s.to_string()),
        }
    }

    fn parse_response(json: &str, limit: usize) -> Result<Vec<NewsItem>> {
        let t0 = std::time::Instant::now();
        let resp: SearchResponse =
            serde_json::from_str(json).context("parsing naver search json")?;

        let mut out = Vec::with_capacity(resp.items.len());
        for it in resp.items {
            let title = clean_text(&it.title.unwrap_or_default());
            if title.is_empty() {
                continue;
            }
            let link = it.link.unwrap_or_default();
            let origin = it
                .originallink
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| link.clone());
            out.push(NewsItem {
                source: media_name_from_url(&origin),
                title,
                link,
                thumbnail: String::new(),
                description: it.description.as_deref().map(clean_text).unwrap_or_default(),
                // Unparseable dates stay empty and sort last downstream.
                published_at: it
                    .pub_date
                    .as_deref()
                    .and_then(parse_rfc2822_utc)
                    .map(|ts| format_utc(&ts))
                    .unwrap_or_default(),
            });
        }
        out.truncate(limit);

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        histogram!("aggregate_feed_parse_ms").record(ms);
        counter!("aggregate_items_parsed_total").increment(out.len() as u64);
        Ok(out)
    }
}

#[async_trait]
impl SourceFetcher for NaverNewsFetcher {
    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<NewsItem>> {
        match &self.mode {
            Mode::Fixture(s) => Self::parse_response(s, limit),
            Mode::Http {
                client,
                client_id,
                client_secret,
            } => {
                let display = limit.to_string();
                let resp = client
                    .get(SEARCH_URL)
                    .query(&[("query", query), ("display", display.as_str()), ("sort", "date")])
                    .header("X-Naver-Client-Id", client_id)
                    .header("X-Naver-Client-Secret", client_secret)
                    .send()
                    .await
                    .context("naver news api get")?;
                let body = resp
                    .error_for_status()
                    .context("naver news api status")?
                    .text()
                    .await
                    .context("naver news api body")?;
                Self::parse_response(&body, limit)
            }
        }
    }

    fn name(&self) -> &'static str {
        "NaverNews"
    }
}
