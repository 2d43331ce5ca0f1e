use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use newsdash_core::{Sentiment, Tone};

/// One news item as retrieved from the feed, before enrichment.
#[derive(Debug, Clone)]
pub struct FeedEntry {
    pub title: String,
    /// Article link, already unwrapped from any redirect parameter.
    pub link: String,
    /// Loosely formatted publication timestamp as the feed provided it,
    /// or the fetch-time date when the feed omitted one.
    pub published: String,
    /// Raw summary markup, when present.
    pub summary_html: Option<String>,
}

/// A feed entry plus every derived enrichment field.
///
/// All derived fields are deterministic functions of the cleaned body
/// text; an article never changes after construction.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedArticle {
    /// The search keyword that produced this article.
    pub keyword: String,
    pub title: String,
    pub link: String,
    /// Raw publication timestamp as fetched.
    pub published: String,
    /// Best-effort parsed timestamp; `None` marks an unparseable date.
    pub published_at: Option<DateTime<Utc>>,
    /// Cleaned plain-text body (summary text, falling back to the title).
    pub body: String,
    pub summary: String,
    /// Comma-joined top terms extracted from the body.
    pub keywords: String,
    pub sentiment: Sentiment,
    pub tone: Tone,
    /// Space-joined hashtag-like tags.
    pub tags: String,
    /// Generated one-line opinion.
    pub opinion: String,
}

/// Inclusive publication-date bounds applied after aggregation.
///
/// With both bounds unset no filtering occurs at all; once either bound
/// is set, articles whose date could not be parsed are excluded.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Whether an article with the given parsed date passes the filter.
    #[must_use]
    pub fn contains(&self, published_at: Option<DateTime<Utc>>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(date) = published_at.map(|dt| dt.date_naive()) else {
            return false;
        };
        if self.from.is_some_and(|from| date < from) {
            return false;
        }
        if self.to.is_some_and(|to| date > to) {
            return false;
        }
        true
    }
}
