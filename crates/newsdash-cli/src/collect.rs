//! `collect` command handler.
//!
//! Runs the fetch → enrich → aggregate pipeline over the resolved
//! keyword list, renders the article list and count tables, and writes
//! the requested exports. Per-keyword failures are reported as notices
//! after the list; nothing aborts the run.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use newsdash_core::Language;
use newsdash_feed::{Aggregator, DateRange, KeywordOutcome, NewsClient};

use crate::export;
use crate::session::Session;
use crate::stats;

/// Preset keywords offered when none are passed on the command line.
const PRESET_KEYWORDS: &[&str] = &[
    "AI",
    "로봇",
    "로봇감정",
    "로봇성격",
    "IT",
    "산업데이터",
    "데이터시스템",
];

/// How many presets are selected by default.
const DEFAULT_PRESET_COUNT: usize = 3;

#[derive(Debug, Args)]
pub struct CollectArgs {
    /// Keywords to collect (defaults to the first three presets)
    pub keywords: Vec<String>,

    /// Extra comma-separated keywords appended to the list
    #[arg(long)]
    pub extra: Option<String>,

    /// News language: ko/한국어 or en/영어
    #[arg(long, default_value = "ko")]
    pub lang: Language,

    /// Per-keyword item cap
    #[arg(long, default_value_t = 3)]
    pub limit: usize,

    /// Inclusive start date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Inclusive end date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Bookmark these links after collection (repeatable)
    #[arg(long = "bookmark")]
    pub bookmarks: Vec<String>,

    /// Write the full article set to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write bookmarked articles to a plain-text file
    #[arg(long)]
    pub text: Option<PathBuf>,

    /// Print the article set as JSON instead of the rendered list
    #[arg(long)]
    pub json: bool,

    /// Preview the resolved keywords without fetching
    #[arg(long)]
    pub dry_run: bool,
}

/// Run the collect command end to end.
///
/// # Errors
///
/// Returns an error when configuration is invalid, the HTTP client
/// cannot be built, or an export file cannot be written. Per-keyword
/// fetch failures are contained and reported as notices instead.
pub async fn run_collect(args: CollectArgs) -> anyhow::Result<()> {
    let keywords = resolve_keywords(&args.keywords, args.extra.as_deref());

    if args.dry_run {
        println!(
            "dry-run: would collect {} keywords: [{}]",
            keywords.len(),
            keywords.join(", ")
        );
        return Ok(());
    }

    let config = newsdash_core::load_app_config()?;
    let client = NewsClient::new(&config)?;
    let range = DateRange {
        from: args.from,
        to: args.to,
    };

    let report = Aggregator::new(&client)
        .collect(&keywords, args.lang, args.limit, &range)
        .await;
    let outcomes = report.keywords;

    tracing::info!(
        articles = report.articles.len(),
        keywords = outcomes.len(),
        "collection complete"
    );

    let mut session = Session::new(report.articles);
    for link in &args.bookmarks {
        if !session.bookmark(link) {
            tracing::warn!(link = %link, "bookmark link not in the collected set");
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(session.articles())?);
    } else {
        render_articles(&session);
        render_notices(&outcomes);
        if !session.articles().is_empty() {
            println!();
            stats::render(session.articles());
        }
    }

    if let Some(path) = &args.csv {
        export::write_csv(path, session.articles())?;
        println!("saved CSV export to {}", path.display());
    }
    if let Some(path) = &args.text {
        if session.bookmark_count() == 0 {
            println!("no bookmarks to export; skipping {}", path.display());
        } else {
            export::write_bookmark_text(path, &session)?;
            println!("saved bookmark export to {}", path.display());
        }
    }

    Ok(())
}

/// Resolve the keyword list: explicit keywords, falling back to the
/// preset selection, plus any comma-separated extras.
fn resolve_keywords(keywords: &[String], extra: Option<&str>) -> Vec<String> {
    let mut resolved: Vec<String> = if keywords.is_empty() {
        PRESET_KEYWORDS
            .iter()
            .take(DEFAULT_PRESET_COUNT)
            .map(ToString::to_string)
            .collect()
    } else {
        keywords.to_vec()
    };
    if let Some(extra) = extra {
        for keyword in extra.split(',') {
            let keyword = keyword.trim();
            if !keyword.is_empty() {
                resolved.push(keyword.to_string());
            }
        }
    }
    resolved
}

fn render_articles(session: &Session) {
    let articles = session.articles();
    if articles.is_empty() {
        println!("no articles collected");
        return;
    }
    println!("collected {} articles", articles.len());
    println!();
    for article in articles {
        println!(
            "{}{} {}",
            article.sentiment.emoji(),
            article.tone.emoji(),
            article.title
        );
        println!("  🔗 {}", article.link);
        println!(
            "  📅 {} | 감성: {} | 톤: {} | {}",
            article.published, article.sentiment, article.tone, article.tags
        );
        println!("  🧾 {}", article.summary);
        println!("  💡 {}", article.opinion);
        println!("  🏷️ {}", article.keywords);
        println!();
    }
}

fn render_notices(outcomes: &[KeywordOutcome]) {
    for outcome in outcomes {
        match &outcome.result {
            Ok(0) => println!("note: keyword '{}' yielded no articles", outcome.keyword),
            Ok(_) => {}
            Err(e) => println!("warning: keyword '{}' failed: {e}", outcome.keyword),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
