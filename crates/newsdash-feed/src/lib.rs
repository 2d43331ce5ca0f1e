//! Keyword news collection and enrichment pipeline.
//!
//! Fetches feed-search results per keyword, strips markup from entry
//! summaries, derives summary/keywords/sentiment/tone/tags/opinion with
//! deterministic substring heuristics, and aggregates a deduplicated,
//! optionally date-filtered article set. Fetch results are cached per
//! request for a bounded window; per-keyword and per-entry failures are
//! contained and logged, never fatal to a run.

pub mod aggregate;
pub mod clean;
pub mod client;
pub mod enrich;
pub mod error;
pub mod parse;
pub mod types;

pub use aggregate::{Aggregator, ArticleSet, CollectReport, KeywordOutcome};
pub use client::NewsClient;
pub use error::FeedError;
pub use types::{DateRange, EnrichedArticle, FeedEntry};
