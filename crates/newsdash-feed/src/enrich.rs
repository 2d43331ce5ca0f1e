//! Deterministic text enrichment heuristics.
//!
//! Everything here is single-pass substring matching over cleaned text —
//! no statistical model, no external call. Short or non-matching input
//! degrades to fixed sentinel outputs rather than errors, and identical
//! input always yields identical output.
//!
//! Classification deliberately uses substring containment rather than
//! word-boundary tokenization; a marker inside a longer word counts.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

use newsdash_core::{Sentiment, Tone};

use crate::clean::clean_html;
use crate::types::{EnrichedArticle, FeedEntry};

/// Returned by [`summarize`] when the input is too short to summarize.
pub const NO_SUMMARY: &str = "요약 불가 (본문 부족)";
/// Returned by [`extract_keywords`] when no candidate terms survive.
pub const NO_KEYWORDS: &str = "키워드 없음";
/// Tag applied when no tag trigger matches.
pub const DEFAULT_TAG: &str = "#일반";

/// Runs of two or more Hangul syllables are keyword candidates.
static HANGUL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[가-힣]{2,}").expect("valid regex"));

const STOPWORDS: &[&str] = &[
    "있다", "하다", "수", "등", "및", "에서", "으로", "이번", "관한", "하여", "대한", "관련",
    "한", "더", "있으며", "따라", "등의",
];

const POSITIVE_WORDS: &[&str] = &[
    "좋다", "훌륭", "성공", "발전", "혁신", "개선", "증가", "상승", "긍정",
];
const NEGATIVE_WORDS: &[&str] = &[
    "나쁘다", "문제", "실패", "우려", "논란", "감소", "하락", "부정", "위험",
];

const ANALYTICAL_MARKERS: &[&str] = &["분석", "연구", "조사", "데이터", "통계"];
const EMOTIONAL_MARKERS: &[&str] = &["놀라", "충격", "감동", "기쁘", "슬프"];

/// Pick up to `target_sentences` sentences from `text`.
///
/// Inputs shorter than 30 characters yield the [`NO_SUMMARY`] sentinel.
/// Sentences are fragments longer than 15 characters after splitting on
/// sentence-ending punctuation (`!` is normalized to `.`). When there
/// are not enough candidates the original text is returned, truncated
/// to 300 characters with an ellipsis marker. Otherwise the first and
/// the middle candidate are joined with `". "`.
#[must_use]
pub fn summarize(text: &str, target_sentences: usize) -> String {
    if text.trim().chars().count() < 30 {
        return NO_SUMMARY.to_string();
    }

    let normalized = text.replace('!', ".");
    let sentences: Vec<&str> = normalized
        .split(". ")
        .map(str::trim)
        .filter(|s| s.chars().count() > 15)
        .collect();

    if sentences.len() <= target_sentences {
        return truncate_chars(text, 300);
    }

    let mut selected = vec![sentences[0]];
    if sentences.len() > 2 {
        selected.push(sentences[sentences.len() / 2]);
    }
    selected.join(". ")
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

/// Extract the `top_n` most frequent Hangul terms as a comma-joined string.
///
/// Tokens are runs of two or more Hangul syllables, minus a fixed
/// stop-word set. Ties rank in first-encountered order. When nothing
/// survives, the [`NO_KEYWORDS`] sentinel is returned.
#[must_use]
pub fn extract_keywords(text: &str, top_n: usize) -> String {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for token in HANGUL_RUN.find_iter(text) {
        let word = token.as_str();
        if STOPWORDS.contains(&word) {
            continue;
        }
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    if order.is_empty() {
        return NO_KEYWORDS.to_string();
    }

    let mut ranked: Vec<(&str, usize)> = order.into_iter().map(|w| (w, counts[w])).collect();
    // Stable sort keeps first-encountered order for equal counts.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(top_n)
        .map(|(word, _)| word)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Classify sentiment by counting which marker words appear in `text`.
///
/// Each list word counts once if contained anywhere in the text.
/// Majority wins; an exact tie (including no matches at all) is neutral.
#[must_use]
pub fn sentiment(text: &str) -> Sentiment {
    let positive = POSITIVE_WORDS.iter().filter(|w| text.contains(*w)).count();
    let negative = NEGATIVE_WORDS.iter().filter(|w| text.contains(*w)).count();
    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

/// Classify content tone, analytical markers taking priority over
/// emotional ones; informational is the default.
#[must_use]
pub fn tone(text: &str) -> Tone {
    if ANALYTICAL_MARKERS.iter().any(|m| text.contains(m)) {
        Tone::Analytical
    } else if EMOTIONAL_MARKERS.iter().any(|m| text.contains(m)) {
        Tone::Emotional
    } else {
        Tone::Informational
    }
}

/// Derive space-joined hashtag-like tags from trigger substrings.
///
/// No trigger at all yields the single [`DEFAULT_TAG`].
#[must_use]
pub fn tags(text: &str) -> String {
    let mut tags = Vec::new();
    if text.contains("기술") || text.contains("AI") {
        tags.push("#기술동향");
    }
    if text.contains("시장") || text.contains("수요") {
        tags.push("#시장분석");
    }
    if text.contains("논란") || text.contains("문제") {
        tags.push("#이슈");
    }
    if tags.is_empty() {
        DEFAULT_TAG.to_string()
    } else {
        tags.join(" ")
    }
}

/// Generate the fixed-template one-line opinion for a sentiment/tone pair.
#[must_use]
pub fn opinion(sentiment: Sentiment, tone: Tone) -> String {
    format!(
        "{} + {}의 뉴스입니다.",
        sentiment.perspective_phrase(),
        tone.delivery_phrase()
    )
}

/// Best-effort parse of a loosely formatted publication timestamp.
///
/// Tries RFC 2822 (the feed's native `pubDate` form), then RFC 3339,
/// then a bare `%Y-%m-%d` date. `None` is the invalid-date sentinel
/// that date filtering treats as out of range.
#[must_use]
pub fn parse_published(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|ndt| ndt.and_utc());
    }
    None
}

/// Derive every enrichment field for one fetched entry.
///
/// The body is the cleaned summary markup, falling back to the title
/// when the feed provided no summary.
#[must_use]
pub fn enrich_entry(keyword: &str, entry: FeedEntry) -> EnrichedArticle {
    let preview = entry
        .summary_html
        .as_deref()
        .map(clean_html)
        .unwrap_or_default();
    let body = if preview.is_empty() {
        entry.title.clone()
    } else {
        preview
    };

    let summary = summarize(&body, 2);
    let keywords = extract_keywords(&body, 5);
    let sentiment = sentiment(&body);
    let tone = tone(&body);
    let tags = tags(&body);
    let opinion = opinion(sentiment, tone);
    let published_at = parse_published(&entry.published);

    EnrichedArticle {
        keyword: keyword.to_string(),
        title: entry.title,
        link: entry.link,
        published: entry.published,
        published_at,
        body,
        summary,
        keywords,
        sentiment,
        tone,
        tags,
        opinion,
    }
}

#[cfg(test)]
#[path = "enrich_test.rs"]
mod tests;
