/// Runtime configuration for the feed pipeline and CLI.
///
/// Every field has a default, so an empty environment yields a working
/// configuration pointed at the public feed endpoint.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Per-request timeout for feed fetches, in seconds.
    pub request_timeout_secs: u64,
    /// `User-Agent` header sent with every feed request.
    pub user_agent: String,
    /// How long a cached fetch result stays valid, in seconds.
    pub cache_ttl_secs: u64,
    /// Base URL of the feed-search endpoint (no trailing slash).
    pub feed_base_url: String,
}
