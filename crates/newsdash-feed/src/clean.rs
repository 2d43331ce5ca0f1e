//! Markup stripping for raw entry summaries.

/// Strip markup tags from `html`, decode the common named entities, and
/// collapse whitespace runs to single spaces.
///
/// Tolerates malformed markup: an unclosed tag swallows the rest of the
/// input rather than failing, so the result is always best-effort plain
/// text. Empty input yields an empty string.
#[must_use]
pub fn clean_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
