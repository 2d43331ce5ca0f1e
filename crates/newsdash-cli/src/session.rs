//! In-session application state: the collected set plus bookmarks.

use std::collections::HashSet;

use newsdash_feed::{ArticleSet, EnrichedArticle};

/// Explicit session state handed to presentation calls.
///
/// The bookmark set holds weak references by link; it never owns the
/// articles, and a link that is not in the collected set cannot be
/// bookmarked.
#[derive(Debug, Default)]
pub struct Session {
    articles: ArticleSet,
    bookmarks: HashSet<String>,
}

impl Session {
    #[must_use]
    pub fn new(articles: ArticleSet) -> Self {
        Self {
            articles,
            bookmarks: HashSet::new(),
        }
    }

    #[must_use]
    pub fn articles(&self) -> &ArticleSet {
        &self.articles
    }

    /// Bookmark a link from the collected set.
    ///
    /// Returns `false` when the link is not in the set. Re-bookmarking
    /// an already-bookmarked link is a no-op.
    pub fn bookmark(&mut self, link: &str) -> bool {
        if self.articles.find_by_link(link).is_none() {
            return false;
        }
        self.bookmarks.insert(link.to_string());
        true
    }

    /// Bookmarked articles, in collection order.
    #[must_use]
    pub fn bookmarked(&self) -> Vec<&EnrichedArticle> {
        self.articles
            .iter()
            .filter(|article| self.bookmarks.contains(&article.link))
            .collect()
    }

    #[must_use]
    pub fn bookmark_count(&self) -> usize {
        self.bookmarks.len()
    }
}
