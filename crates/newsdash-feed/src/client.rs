//! HTTP client for the news feed-search endpoint.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use newsdash_core::{AppConfig, Language};

use crate::error::FeedError;
use crate::parse::parse_feed;
use crate::types::FeedEntry;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    keyword: String,
    lang: &'static str,
    limit: usize,
}

/// Time-bounded cache of fetch results, keyed by request parameters.
///
/// Expiry is checked on read; there is no background eviction and no
/// invalidation beyond the TTL.
struct FetchCache {
    ttl: Duration,
    entries: HashMap<CacheKey, (Instant, Vec<FeedEntry>)>,
}

impl FetchCache {
    fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    fn get(&mut self, key: &CacheKey) -> Option<Vec<FeedEntry>> {
        match self.entries.get(key) {
            Some((stored_at, entries)) if stored_at.elapsed() < self.ttl => Some(entries.clone()),
            Some(_) => {
                self.entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn insert(&mut self, key: CacheKey, entries: Vec<FeedEntry>) {
        self.entries.insert(key, (Instant::now(), entries));
    }
}

/// HTTP client for the feed-search endpoint.
///
/// Carries the configured timeout and `User-Agent`, plus the TTL cache,
/// so a repeated `(keyword, language, limit)` request inside the window
/// never touches the network. Requests are sequential; there is no
/// retry and no backoff — a failed fetch is simply empty for that run.
pub struct NewsClient {
    client: reqwest::Client,
    base_url: String,
    cache: Mutex<FetchCache>,
}

impl NewsClient {
    /// Creates a `NewsClient` from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(config: &AppConfig) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: config.feed_base_url.trim_end_matches('/').to_string(),
            cache: Mutex::new(FetchCache::new(Duration::from_secs(config.cache_ttl_secs))),
        })
    }

    /// Fetch up to `limit` feed entries for `keyword`, in feed order.
    ///
    /// # Errors
    ///
    /// - [`FeedError::UnexpectedStatus`] — non-2xx response.
    /// - [`FeedError::Http`] — network failure or timeout.
    /// - [`FeedError::Xml`] — unrecoverably malformed response body.
    ///
    /// Callers are expected to contain these per keyword: the aggregator
    /// logs a warning and treats the keyword as empty.
    pub async fn fetch(
        &self,
        keyword: &str,
        language: Language,
        limit: usize,
    ) -> Result<Vec<FeedEntry>, FeedError> {
        let key = CacheKey {
            keyword: keyword.to_string(),
            lang: language.code(),
            limit,
        };

        if let Ok(mut cache) = self.cache.lock() {
            if let Some(entries) = cache.get(&key) {
                tracing::debug!(keyword = %keyword, count = entries.len(), "feed cache hit");
                return Ok(entries);
            }
        }

        let url = self.search_url(keyword, language);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let entries = parse_feed(&body, limit)?;
        tracing::debug!(keyword = %keyword, count = entries.len(), "fetched feed entries");

        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(key, entries.clone());
        }
        Ok(entries)
    }

    /// Builds the feed-search URL for the given keyword and language.
    fn search_url(&self, keyword: &str, language: Language) -> String {
        let encoded = utf8_percent_encode(keyword, NON_ALPHANUMERIC).to_string();
        let code = language.code();
        format!(
            "{base}/rss/search?q={encoded}&hl={code}&gl=KR&ceid=KR:{code}",
            base = self.base_url
        )
    }
}
