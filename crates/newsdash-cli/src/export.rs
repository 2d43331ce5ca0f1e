//! CSV and plain-text exports.
//!
//! Formats mirror the dashboard's download files: a delimited record
//! export of the full set and a fixed multi-line block per bookmarked
//! article. Export failures surface to the caller; they never touch
//! the in-memory session.

use std::path::Path;

use newsdash_feed::ArticleSet;

use crate::session::Session;

/// UTF-8 BOM so spreadsheet apps pick up the Korean text encoding.
const BOM: &str = "\u{feff}";

const CSV_HEADER: &str = "키워드,제목,요약,감성,콘텐츠톤,키워드추출,태그,한줄평,링크";

const RULE: &str =
    "============================================================";

/// Render the article set as CSV: BOM, Korean header row, one record
/// per article.
#[must_use]
pub fn csv_string(articles: &ArticleSet) -> String {
    let mut out = String::new();
    out.push_str(BOM);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for article in articles {
        let fields = [
            article.keyword.as_str(),
            article.title.as_str(),
            article.summary.as_str(),
            article.sentiment.label(),
            article.tone.label(),
            article.keywords.as_str(),
            article.tags.as_str(),
            article.opinion.as_str(),
            article.link.as_str(),
        ];
        let row: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Quote a field when it contains a delimiter, quote, or newline.
fn csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Write the CSV export to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_csv(path: &Path, articles: &ArticleSet) -> anyhow::Result<()> {
    std::fs::write(path, csv_string(articles))?;
    Ok(())
}

/// Render the bookmarked articles as fixed multi-line text blocks
/// separated by a rule line.
#[must_use]
pub fn bookmark_text(session: &Session) -> String {
    let mut out = String::from("=== 북마크된 뉴스 요약 ===\n\n");
    for article in session.bookmarked() {
        out.push_str(&format!(
            "\n📰 제목: {}\n\
             🔗 링크: {}\n\
             📅 날짜: {}\n\
             🧾 요약: {}\n\
             💭 한줄평: {}\n\
             😶 감성: {} | 🧐 톤: {}\n\
             🏷️ 키워드: {}\n\
             🏷️ 태그: {}\n\
             \n{RULE}\n\n",
            article.title,
            article.link,
            article.published,
            article.summary,
            article.opinion,
            article.sentiment,
            article.tone,
            article.keywords,
            article.tags,
        ));
    }
    out
}

/// Write the bookmark text export to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_bookmark_text(path: &Path, session: &Session) -> anyhow::Result<()> {
    std::fs::write(path, bookmark_text(session))?;
    Ok(())
}
