//! Aggregate count tables for a collected article set.
//!
//! The data behind the dashboard's distribution views; rendering stays
//! plain text here.

use newsdash_core::{Sentiment, Tone};
use newsdash_feed::ArticleSet;

/// Count articles per keyword, in first-encountered order.
#[must_use]
pub fn keyword_counts(articles: &ArticleSet) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for article in articles {
        match counts.iter_mut().find(|(k, _)| *k == article.keyword) {
            Some((_, n)) => *n += 1,
            None => counts.push((article.keyword.clone(), 1)),
        }
    }
    counts
}

/// Sentiment distribution over all three labels, zeros included.
#[must_use]
pub fn sentiment_counts(articles: &ArticleSet) -> Vec<(Sentiment, usize)> {
    Sentiment::ALL
        .iter()
        .map(|s| (*s, articles.iter().filter(|a| a.sentiment == *s).count()))
        .collect()
}

/// Tone distribution over all three labels, zeros included.
#[must_use]
pub fn tone_counts(articles: &ArticleSet) -> Vec<(Tone, usize)> {
    Tone::ALL
        .iter()
        .map(|t| (*t, articles.iter().filter(|a| a.tone == *t).count()))
        .collect()
}

/// Print the keyword/sentiment/tone count tables.
pub fn render(articles: &ArticleSet) {
    if articles.is_empty() {
        return;
    }

    println!("{:<16}COUNT", "KEYWORD");
    for (keyword, count) in keyword_counts(articles) {
        println!("{keyword:<16}{count}");
    }
    println!();

    println!("{:<16}COUNT", "SENTIMENT");
    for (sentiment, count) in sentiment_counts(articles) {
        println!("{:<16}{count}", sentiment.label());
    }
    println!();

    println!("{:<16}COUNT", "TONE");
    for (tone, count) in tone_counts(articles) {
        println!("{:<16}{count}", tone.label());
    }
}
