// src/ingest/providers/google_rss.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use metrics::{counter, histogram};
use quick_xml::de::from_str;
use serde::Deserialize;

use crate::ingest::clean_text;
use crate::ingest::providers::{format_utc, parse_rfc2822_utc};
use crate::ingest::types::{NewsItem, SourceFetcher};

const SEARCH_URL: &str = "https://news.google.com/rss/search";

/// Feed entries older than this are dropped at parse time.
const MAX_AGE_DAYS: i64 = 5;

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    description: Option<String>,
    source: Option<SourceTag>,
}

#[derive(Debug, Deserialize)]
struct SourceTag {
    #[serde(rename = "$text")]
    name: Option<String>,
}

/// Google News RSS search. Titles arrive as "Headline - Publisher"; the
/// publisher is split off into `source`.
pub struct GoogleNewsFetcher {
    mode: Mode,
}

enum Mode {
    Fixture(String),
    Http { client: reqwest::Client },
}

impl GoogleNewsFetcher {
    pub fn new() -> Self {
        Self {
            mode: Mode::Http {
                client: reqwest::Client::new(),
            },
        }
    }

    /// Parse a canned RSS document instead of calling the network.
    pub fn from_fixture_str(s: &str) -> Self {
        Self {
            mode: Mode::Fixture(s.to_string()),
        }
    }

    fn parse_feed(xml: &str, limit: usize, now: DateTime<Utc>) -> Result<Vec<NewsItem>> {
        let t0 = std::time::Instant::now();
        let rss: Rss = from_str(xml).context("parsing google news rss xml")?;
        let cutoff = now - Duration::days(MAX_AGE_DAYS);

        // The age window needs a date; entries without a parseable one
        // are dropped rather than guessed at.
        let mut dated: Vec<(DateTime<Utc>, Item)> = Vec::new();
        for it in rss.channel.item {
            let Some(ts) = it.pub_date.as_deref().and_then(parse_rfc2822_utc) else {
                continue;
            };
            if ts < cutoff {
                continue;
            }
            dated.push((ts, it));
        }

        // Newest first, before the cap is applied.
        dated.sort_by(|a, b| b.0.cmp(&a.0));
        dated.truncate(limit);

        let mut out = Vec::with_capacity(dated.len());
        for (ts, it) in dated {
            let cleaned = clean_text(&it.title.unwrap_or_default());
            let (title, source) = split_source(&cleaned, it.source);
            if title.is_empty() {
                continue;
            }
            out.push(NewsItem {
                source,
                title,
                link: it.link.unwrap_or_default(),
                thumbnail: String::new(),
                description: it.description.as_deref().map(clean_text).unwrap_or_default(),
                published_at: format_utc(&ts),
            });
        }

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        histogram!("aggregate_feed_parse_ms").record(ms);
        counter!("aggregate_items_parsed_total").increment(out.len() as u64);
        Ok(out)
    }
}

impl Default for GoogleNewsFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SourceFetcher for GoogleNewsFetcher {
    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<NewsItem>> {
        match &self.mode {
            Mode::Fixture(s) => Self::parse_feed(s, limit, Utc::now()),
            Mode::Http { client } => {
                let resp = client
                    .get(SEARCH_URL)
                    .query(&[("q", query), ("hl", "ko"), ("gl", "KR"), ("ceid", "KR:ko")])
                    .send()
                    .await
                    .context("google news rss get")?;
                let body = resp
                    .error_for_status()
                    .context("google news rss status")?
                    .text()
                    .await
                    .context("google news rss body")?;
                Self::parse_feed(&body, limit, Utc::now())
            }
        }
    }

    fn name(&self) -> &'static str {
        "GoogleNews"
    }
}

/// Split "Headline - Publisher" from the right; a title without the
/// separator falls back to the feed's <source> element.
fn split_source(title: &str, source_tag: Option<SourceTag>) -> (String, String) {
    if let Some((head, tail)) = title.rsplit_once(" - ") {
        return (head.trim().to_string(), tail.trim().to_string());
    }
    let source = source_tag.and_then(|s| s.name).unwrap_or_default();
    (title.to_string(), source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const FIXTURE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel>
<title>"테슬라" - Google 뉴스</title>
<item>
  <title>테슬라 주가 신기록 경신 - 연합뉴스</title>
  <link>https://news.google.com/rss/articles/abc</link>
  <pubDate>Wed, 20 Aug 2025 07:12:00 GMT</pubDate>
  <description>&lt;a href="https://news.google.com"&gt;테슬라 주가가 사상 최고치를 기록했다&lt;/a&gt;</description>
  <source url="https://www.yna.co.kr">연합뉴스</source>
</item>
<item>
  <title>일론 머스크 신제품 발표</title>
  <link>https://news.google.com/rss/articles/def</link>
  <pubDate>Tue, 19 Aug 2025 22:30:00 GMT</pubDate>
  <description>발표 내용 요약</description>
  <source url="https://www.mk.co.kr">매일경제</source>
</item>
<item>
  <title>오래된 기사 - 매일경제</title>
  <link>https://news.google.com/rss/articles/ghi</link>
  <pubDate>Fri, 01 Aug 2025 09:00:00 GMT</pubDate>
  <description>구문</description>
</item>
<item>
  <title>날짜 없는 기사 - 뉴시스</title>
  <link>https://news.google.com/rss/articles/jkl</link>
  <description>no date</description>
</item>
</channel></rss>"#;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 21, 0, 0, 0).unwrap()
    }

    #[test]
    fn parses_and_splits_publisher_from_title() {
        let items = GoogleNewsFetcher::parse_feed(FIXTURE, 10, fixed_now()).expect("parse");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "테슬라 주가 신기록 경신");
        assert_eq!(items[0].source, "연합뉴스");
        assert_eq!(items[0].published_at, "2025-08-20T07:12:00Z");
        assert_eq!(items[0].description, "테슬라 주가가 사상 최고치를 기록했다");
    }

    #[test]
    fn source_element_backs_up_missing_separator() {
        let items = GoogleNewsFetcher::parse_feed(FIXTURE, 10, fixed_now()).expect("parse");
        assert_eq!(items[1].title, "일론 머스크 신제품 발표");
        assert_eq!(items[1].source, "매일경제");
    }

    #[test]
    fn stale_and_undated_entries_are_dropped() {
        let items = GoogleNewsFetcher::parse_feed(FIXTURE, 10, fixed_now()).expect("parse");
        assert!(items.iter().all(|i| i.title != "오래된 기사"));
        assert!(items.iter().all(|i| i.title != "날짜 없는 기사"));
    }

    #[test]
    fn limit_caps_the_newest_entries() {
        let items = GoogleNewsFetcher::parse_feed(FIXTURE, 1, fixed_now()).expect("parse");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].published_at, "2025-08-20T07:12:00Z");
    }

    #[test]
    fn broken_xml_is_an_error() {
        assert!(GoogleNewsFetcher::parse_feed("<rss><channel>", 10, fixed_now()).is_err());
    }
}
