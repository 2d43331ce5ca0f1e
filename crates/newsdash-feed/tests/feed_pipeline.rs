//! Integration tests for the fetch → enrich → aggregate pipeline.
//!
//! Uses `wiremock` to stand up a local feed-search server for each test
//! so no real network traffic is made. Covers the happy path, the fetch
//! cache, per-keyword failure containment, cross-keyword deduplication,
//! and date filtering.

use chrono::NaiveDate;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use newsdash_core::{AppConfig, Language, Sentiment};
use newsdash_feed::{Aggregator, DateRange, FeedError, NewsClient};

fn test_config(base_url: &str) -> AppConfig {
    AppConfig {
        request_timeout_secs: 5,
        user_agent: "newsdash-test/0.1".to_string(),
        cache_ttl_secs: 3600,
        feed_base_url: base_url.to_string(),
    }
}

/// Builds an RSS body from `(title, link, pub_date, description)` rows.
fn rss_feed(items: &[(&str, &str, &str, &str)]) -> String {
    let mut body = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rss version=\"2.0\"><channel><title>뉴스 검색</title>",
    );
    for (title, link, pub_date, description) in items {
        body.push_str(&format!(
            "<item><title>{title}</title><link>{link}</link>\
             <pubDate>{pub_date}</pubDate><description>{description}</description></item>"
        ));
    }
    body.push_str("</channel></rss>");
    body
}

// ---------------------------------------------------------------------------
// Fetch: cap, failure modes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_caps_results_at_requested_limit() {
    let server = MockServer::start().await;
    let body = rss_feed(&[
        ("기사 1", "https://example.com/1", "Mon, 02 Jun 2025 09:00:00 GMT", "본문 하나"),
        ("기사 2", "https://example.com/2", "Mon, 02 Jun 2025 10:00:00 GMT", "본문 둘"),
        ("기사 3", "https://example.com/3", "Mon, 02 Jun 2025 11:00:00 GMT", "본문 셋"),
        ("기사 4", "https://example.com/4", "Mon, 02 Jun 2025 12:00:00 GMT", "본문 넷"),
    ]);

    Mock::given(method("GET"))
        .and(path("/rss/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let client = NewsClient::new(&test_config(&server.uri())).expect("client should build");
    let entries = client
        .fetch("AI", Language::Korean, 2)
        .await
        .expect("fetch should succeed");

    assert_eq!(entries.len(), 2, "expected the cap to apply");
    assert_eq!(entries[0].title, "기사 1", "feed order must be preserved");
}

#[tokio::test]
async fn fetch_returns_typed_error_on_server_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rss/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = NewsClient::new(&test_config(&server.uri())).expect("client should build");
    let result = client.fetch("AI", Language::Korean, 3).await;

    assert!(
        matches!(result, Err(FeedError::UnexpectedStatus { status: 500, .. })),
        "expected UnexpectedStatus(500), got: {result:?}"
    );
}

// ---------------------------------------------------------------------------
// Fetch cache
// ---------------------------------------------------------------------------

#[tokio::test]
async fn repeated_fetch_within_ttl_hits_cache_not_network() {
    let server = MockServer::start().await;
    let body = rss_feed(&[(
        "기사",
        "https://example.com/1",
        "Mon, 02 Jun 2025 09:00:00 GMT",
        "본문",
    )]);

    Mock::given(method("GET"))
        .and(path("/rss/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let client = NewsClient::new(&test_config(&server.uri())).expect("client should build");
    let first = client
        .fetch("AI", Language::Korean, 3)
        .await
        .expect("first fetch should succeed");
    let second = client
        .fetch("AI", Language::Korean, 3)
        .await
        .expect("second fetch should come from cache");

    assert_eq!(first.len(), second.len());
    // MockServer verifies expect(1) on drop.
}

#[tokio::test]
async fn different_request_parameters_bypass_the_cache() {
    let server = MockServer::start().await;
    let body = rss_feed(&[(
        "기사",
        "https://example.com/1",
        "Mon, 02 Jun 2025 09:00:00 GMT",
        "본문",
    )]);

    Mock::given(method("GET"))
        .and(path("/rss/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(2)
        .mount(&server)
        .await;

    let client = NewsClient::new(&test_config(&server.uri())).expect("client should build");
    client
        .fetch("AI", Language::Korean, 3)
        .await
        .expect("fetch should succeed");
    client
        .fetch("로봇", Language::Korean, 3)
        .await
        .expect("fetch for a different keyword should hit the network");
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failed_keyword_is_contained_and_others_still_collected() {
    let server = MockServer::start().await;
    let ok_body = rss_feed(&[(
        "정상 기사",
        "https://example.com/ok",
        "Mon, 02 Jun 2025 09:00:00 GMT",
        "정상 본문",
    )]);

    Mock::given(method("GET"))
        .and(path("/rss/search"))
        .and(query_param("q", "정상"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ok_body))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rss/search"))
        .and(query_param("q", "실패"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = NewsClient::new(&test_config(&server.uri())).expect("client should build");
    let keywords = vec!["실패".to_string(), "정상".to_string()];
    let report = Aggregator::new(&client)
        .collect(&keywords, Language::Korean, 3, &DateRange::default())
        .await;

    assert_eq!(report.articles.len(), 1, "surviving keyword still collected");
    assert_eq!(report.keywords.len(), 2);
    assert!(report.keywords[0].result.is_err(), "failure recorded, not raised");
    assert!(matches!(report.keywords[1].result, Ok(1)));
}

#[tokio::test]
async fn shared_link_across_keywords_is_deduplicated_to_first_keyword() {
    let server = MockServer::start().await;
    let shared = "https://example.com/shared-story";
    let ai_body = rss_feed(&[
        ("공유 기사", shared, "Mon, 02 Jun 2025 09:00:00 GMT", "공유 본문"),
        ("AI 기사", "https://example.com/ai-only", "Mon, 02 Jun 2025 10:00:00 GMT", "AI 본문"),
    ]);
    let robot_body = rss_feed(&[
        ("공유 기사", shared, "Mon, 02 Jun 2025 09:00:00 GMT", "공유 본문"),
        ("로봇 기사", "https://example.com/robot-only", "Mon, 02 Jun 2025 11:00:00 GMT", "로봇 본문"),
    ]);

    Mock::given(method("GET"))
        .and(path("/rss/search"))
        .and(query_param("q", "AI"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ai_body))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rss/search"))
        .and(query_param("q", "로봇"))
        .respond_with(ResponseTemplate::new(200).set_body_string(robot_body))
        .mount(&server)
        .await;

    let client = NewsClient::new(&test_config(&server.uri())).expect("client should build");
    let keywords = vec!["AI".to_string(), "로봇".to_string()];
    let report = Aggregator::new(&client)
        .collect(&keywords, Language::Korean, 3, &DateRange::default())
        .await;

    assert_eq!(report.articles.len(), 3, "shared link appears exactly once");
    let shared_article = report
        .articles
        .find_by_link(shared)
        .expect("shared link should survive dedup");
    assert_eq!(
        shared_article.keyword, "AI",
        "attribution goes to the first-processed keyword"
    );
}

#[tokio::test]
async fn date_range_filters_aggregated_articles_inclusively() {
    let server = MockServer::start().await;
    let body = rss_feed(&[
        ("이전 기사", "https://example.com/before", "Sat, 31 May 2025 09:00:00 GMT", "본문"),
        ("경계 기사", "https://example.com/edge", "Sun, 01 Jun 2025 09:00:00 GMT", "본문"),
        ("이후 기사", "https://example.com/after", "Tue, 01 Jul 2025 09:00:00 GMT", "본문"),
    ]);

    Mock::given(method("GET"))
        .and(path("/rss/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let client = NewsClient::new(&test_config(&server.uri())).expect("client should build");
    let keywords = vec!["AI".to_string()];
    let range = DateRange {
        from: Some(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()),
        to: Some(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()),
    };
    let report = Aggregator::new(&client)
        .collect(&keywords, Language::Korean, 5, &range)
        .await;

    assert_eq!(report.articles.len(), 1);
    assert!(report.articles.find_by_link("https://example.com/edge").is_some());
}

// ---------------------------------------------------------------------------
// End-to-end enrichment
// ---------------------------------------------------------------------------

#[tokio::test]
async fn collected_articles_carry_complete_enrichment() {
    let server = MockServer::start().await;
    let body = rss_feed(&[
        (
            "AI 혁신 발표",
            "https://example.com/1",
            "Mon, 02 Jun 2025 09:00:00 GMT",
            "국내 연구진이 AI 기술 혁신을 발표했다. 업계는 발전 가능성에 주목하고 있다.",
        ),
        (
            "시장 논란",
            "https://example.com/2",
            "Mon, 02 Jun 2025 10:00:00 GMT",
            "데이터 시장을 둘러싼 논란과 문제가 제기되었다.",
        ),
        (
            "짧은 항목",
            "https://example.com/3",
            "Mon, 02 Jun 2025 11:00:00 GMT",
            "짧은 본문",
        ),
    ]);

    Mock::given(method("GET"))
        .and(path("/rss/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let client = NewsClient::new(&test_config(&server.uri())).expect("client should build");
    let keywords = vec!["AI".to_string()];
    let report = Aggregator::new(&client)
        .collect(&keywords, Language::Korean, 3, &DateRange::default())
        .await;

    assert_eq!(report.articles.len(), 3);
    for article in &report.articles {
        assert!(!article.summary.is_empty(), "summary is never empty");
        assert!(
            Sentiment::ALL.contains(&article.sentiment),
            "sentiment must be one of the three labels"
        );
        assert!(!article.tags.is_empty());
        assert!(article.opinion.ends_with("의 뉴스입니다."));
        assert_eq!(article.keyword, "AI");
    }
}
