//! Feed-search response parsing.
//!
//! Pulls `<item>` elements out of an RSS body with a streaming reader.
//! Entries are kept in document order and capped at the caller's limit;
//! items without a link are skipped with a warning rather than failing
//! the whole document.

use chrono::Utc;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::FeedError;
use crate::types::FeedEntry;

/// Parse an RSS XML body into at most `limit` [`FeedEntry`] values.
///
/// A missing or empty `<pubDate>` defaults to the current date at parse
/// time, which makes repeated fetches of undated entries
/// non-reproducible — intentional, documented behavior.
///
/// # Errors
///
/// Returns [`FeedError::Xml`] if the XML is malformed beyond recovery.
pub fn parse_feed(xml: &str, limit: usize) -> Result<Vec<FeedEntry>, FeedError> {
    if limit == 0 {
        return Ok(Vec::new());
    }

    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut in_item = false;
    let mut in_description = false;
    let mut current_tag = String::new();
    let mut title = String::new();
    let mut link = String::new();
    let mut description = String::new();
    let mut pub_date = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name_buf = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_buf).unwrap_or("").to_string();
                if name == "item" {
                    in_item = true;
                    in_description = false;
                    title.clear();
                    link.clear();
                    description.clear();
                    pub_date.clear();
                } else if name == "description" && in_item {
                    in_description = true;
                }
                current_tag = name;
            }
            Ok(Event::End(e)) => {
                let name_buf = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_buf).unwrap_or("");
                if name == "description" {
                    in_description = false;
                }
                if name == "item" && in_item {
                    in_item = false;
                    if link.is_empty() {
                        tracing::warn!(title = %title, "skipping feed entry without link");
                        continue;
                    }
                    let published = if pub_date.is_empty() {
                        Utc::now().format("%Y-%m-%d").to_string()
                    } else {
                        pub_date.clone()
                    };
                    entries.push(FeedEntry {
                        title: title.clone(),
                        link: resolve_link(&link),
                        published,
                        summary_html: if description.is_empty() {
                            None
                        } else {
                            Some(description.clone())
                        },
                    });
                    if entries.len() >= limit {
                        break;
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if in_item {
                    let text = e.unescape().unwrap_or_default().into_owned();
                    if in_description {
                        // Accumulate all text nodes inside <description>,
                        // including those emitted after nested tags.
                        if !description.is_empty() {
                            description.push(' ');
                        }
                        description.push_str(&text);
                    } else {
                        match current_tag.as_str() {
                            "title" => title = text,
                            "link" => link = text,
                            "pubDate" => pub_date = text,
                            _ => {}
                        }
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if in_item {
                    let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                    if in_description {
                        description = text;
                    } else {
                        match current_tag.as_str() {
                            "title" => title = text,
                            "link" => link = text,
                            "pubDate" => pub_date = text,
                            _ => {}
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(FeedError::Xml(e)),
            _ => {}
        }
    }

    Ok(entries)
}

/// Unwrap a redirect link when the feed wrapped the article URL in a
/// `url=` query parameter.
///
/// Anything that is not a wrapped redirect — including links that fail
/// to parse — is returned verbatim.
#[must_use]
pub fn resolve_link(link: &str) -> String {
    if !(link.contains("news.google.com") && link.contains("url=")) {
        return link.to_string();
    }
    match reqwest::Url::parse(link) {
        Ok(url) => url
            .query_pairs()
            .find(|(key, _)| key == "url")
            .map_or_else(|| link.to_string(), |(_, value)| value.into_owned()),
        Err(_) => link.to_string(),
    }
}
