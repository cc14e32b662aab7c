// src/ingest/providers/mod.rs
pub mod google_rss;
pub mod naver_api;

pub use google_rss::GoogleNewsFetcher;
pub use naver_api::NaverNewsFetcher;

use chrono::{DateTime, SecondsFormat, Utc};

/// Parse an RFC 2822 feed date ("Wed, 20 Aug 2025 07:12:00 GMT", "+0900")
/// into UTC.
pub(crate) fn parse_rfc2822_utc(ts: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(ts)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// The fixed-width form the recency sort compares: seconds precision,
/// trailing `Z`.
pub(crate) fn format_utc(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmt_zone_parses() {
        let ts = parse_rfc2822_utc("Wed, 20 Aug 2025 07:12:00 GMT").expect("parse GMT");
        assert_eq!(format_utc(&ts), "2025-08-20T07:12:00Z");
    }

    #[test]
    fn kst_offset_converts_to_utc() {
        let ts = parse_rfc2822_utc("Wed, 20 Aug 2025 16:12:00 +0900").expect("parse +0900");
        assert_eq!(format_utc(&ts), "2025-08-20T07:12:00Z");
    }

    #[test]
    fn garbage_dates_parse_to_none() {
        assert!(parse_rfc2822_utc("yesterday-ish").is_none());
        assert!(parse_rfc2822_utc("").is_none());
    }
}
