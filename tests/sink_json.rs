// tests/sink_json.rs
use topic_news_aggregator::{JsonFileSink, NewsItem, Sink, TaggedItem};

fn tagged(title: &str, id: &str, published_at: &str) -> TaggedItem {
    TaggedItem {
        item: NewsItem {
            source: "연합뉴스".to_string(),
            title: title.to_string(),
            link: "https://example.test/x".to_string(),
            thumbnail: String::new(),
            description: "요약 문장".to_string(),
            published_at: published_at.to_string(),
        },
        id: id.to_string(),
        category: "tesla".to_string(),
    }
}

#[tokio::test]
async fn writes_a_pretty_array_with_flat_rows() {
    let dir = tempfile::tempdir().unwrap();
    let sink = JsonFileSink::new(dir.path());
    let items = vec![
        tagged("테슬라 주가 급등", "id-1", "2025-08-20T09:00:00Z"),
        tagged("기아 신차 공개", "id-2", "2025-08-19T12:00:00Z"),
    ];

    sink.emit("tesla", &items).await.unwrap();

    let path = dir.path().join("tesla_news.json");
    let text = std::fs::read_to_string(&path).unwrap();

    // Two-space pretty printing; Korean stays literal, not \u-escaped.
    assert!(text.starts_with("[\n  {\n    \""));
    assert!(text.contains("테슬라 주가 급등"));
    assert!(!text.contains("\\u"));

    // Flattened row: the item fields first, id and category trailing.
    let idx = |key: &str| text.find(&format!("\"{key}\"")).unwrap();
    assert!(idx("source") < idx("title"));
    assert!(idx("title") < idx("link"));
    assert!(idx("link") < idx("thumbnail"));
    assert!(idx("thumbnail") < idx("description"));
    assert!(idx("description") < idx("published_at"));
    assert!(idx("published_at") < idx("id"));
    assert!(idx("id") < idx("category"));

    // Array order is the ranking; the document round-trips.
    let back: Vec<TaggedItem> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, items);
}

#[tokio::test]
async fn creates_the_output_directory_on_demand() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("data").join("news");
    let sink = JsonFileSink::new(&nested);

    sink.emit("ai", &[tagged("제목", "id-1", "2025-08-20T09:00:00Z")])
        .await
        .unwrap();

    assert!(nested.join("ai_news.json").exists());
}

#[tokio::test]
async fn empty_run_leaves_the_previous_document_alone() {
    let dir = tempfile::tempdir().unwrap();
    let sink = JsonFileSink::new(dir.path());
    let path = dir.path().join("tesla_news.json");

    std::fs::write(&path, "[]").unwrap();
    sink.emit("tesla", &[]).await.unwrap();

    // Nothing was written over the existing file.
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");

    sink.emit("desk", &[]).await.unwrap();
    assert!(!dir.path().join("desk_news.json").exists());
}
