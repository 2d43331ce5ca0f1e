//! newsdash command line interface.

mod collect;
mod export;
mod session;
mod stats;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "newsdash")]
#[command(about = "Keyword news collection and enrichment")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Collect, enrich, and render news for the given keywords
    Collect(collect::CollectArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Collect(args) => collect::run_collect(args).await,
    }
}
