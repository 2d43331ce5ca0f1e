//! Keyword aggregation: fetch → enrich → dedup → date filter.

use std::collections::HashSet;

use serde::Serialize;

use newsdash_core::Language;

use crate::client::NewsClient;
use crate::enrich::enrich_entry;
use crate::error::FeedError;
use crate::types::{DateRange, EnrichedArticle};

/// Deduplicated, optionally date-filtered collection of enriched
/// articles produced by one collection run.
///
/// Rebuilt wholesale on every run; never incrementally updated.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ArticleSet {
    articles: Vec<EnrichedArticle>,
}

impl ArticleSet {
    #[must_use]
    pub fn new(articles: Vec<EnrichedArticle>) -> Self {
        Self { articles }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnrichedArticle> {
        self.articles.iter()
    }

    /// Look an article up by its link.
    #[must_use]
    pub fn find_by_link(&self, link: &str) -> Option<&EnrichedArticle> {
        self.articles.iter().find(|a| a.link == link)
    }

    /// Drop later occurrences of an already-seen link, keeping the first.
    ///
    /// Order of the surviving articles is unchanged, so attribution is
    /// stable across keyword iteration order.
    pub fn dedup_by_link(&mut self) {
        let mut seen: HashSet<String> = HashSet::new();
        self.articles.retain(|article| seen.insert(article.link.clone()));
    }

    /// Keep only articles whose parsed date passes `range`.
    ///
    /// With no bounds set this is a no-op; with either bound set,
    /// articles carrying the invalid-date sentinel are dropped.
    pub fn filter_by_date(&mut self, range: &DateRange) {
        if range.is_unbounded() {
            return;
        }
        self.articles.retain(|article| range.contains(article.published_at));
    }
}

impl<'a> IntoIterator for &'a ArticleSet {
    type Item = &'a EnrichedArticle;
    type IntoIter = std::slice::Iter<'a, EnrichedArticle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Per-keyword fetch outcome. Failures are contained here instead of
/// crossing the aggregator boundary.
#[derive(Debug)]
pub struct KeywordOutcome {
    pub keyword: String,
    /// Entries fetched for the keyword (before cross-keyword dedup), or
    /// the contained fetch error.
    pub result: Result<usize, FeedError>,
}

/// Everything one collection run produced.
#[derive(Debug)]
pub struct CollectReport {
    pub articles: ArticleSet,
    pub keywords: Vec<KeywordOutcome>,
}

/// Runs the fetch → enrich pipeline over a keyword list.
pub struct Aggregator<'a> {
    client: &'a NewsClient,
}

impl<'a> Aggregator<'a> {
    #[must_use]
    pub fn new(client: &'a NewsClient) -> Self {
        Self { client }
    }

    /// Collect and enrich articles for every keyword, in the order given.
    ///
    /// Fetches are sequential. A keyword whose fetch fails is logged and
    /// recorded in the report; it never aborts the remaining keywords,
    /// so an all-failed run simply yields an empty set. After
    /// concatenation the set is deduplicated by link (first occurrence
    /// wins) and date-filtered.
    pub async fn collect(
        &self,
        keywords: &[String],
        language: Language,
        per_keyword_limit: usize,
        range: &DateRange,
    ) -> CollectReport {
        let total = keywords.len();
        let mut articles = Vec::new();
        let mut outcomes = Vec::with_capacity(total);

        for (done, keyword) in keywords.iter().enumerate() {
            match self.client.fetch(keyword, language, per_keyword_limit).await {
                Ok(entries) => {
                    let count = entries.len();
                    if count == 0 {
                        tracing::warn!(keyword = %keyword, "keyword yielded no entries");
                    }
                    articles.extend(
                        entries
                            .into_iter()
                            .map(|entry| enrich_entry(keyword, entry)),
                    );
                    outcomes.push(KeywordOutcome {
                        keyword: keyword.clone(),
                        result: Ok(count),
                    });
                }
                Err(e) => {
                    tracing::warn!(keyword = %keyword, error = %e, "feed fetch failed; skipping keyword");
                    outcomes.push(KeywordOutcome {
                        keyword: keyword.clone(),
                        result: Err(e),
                    });
                }
            }
            tracing::debug!(completed = done + 1, total, "keyword progress");
        }

        let mut set = ArticleSet::new(articles);
        set.dedup_by_link();
        set.filter_by_date(range);

        CollectReport {
            articles: set,
            keywords: outcomes,
        }
    }
}
