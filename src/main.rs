//! Newsbrief CLI - keyword news digests
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use chrono::Utc;
use clap::{Parser, Subcommand};
use newsbrief::news::{self, NewsClient};
use newsbrief::render::render_summary;
use newsbrief::{generate_summary, Config, Summary};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "newsbrief")]
#[command(author, version, about = "Keyword news digests with extractive summaries", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print the summary as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch recent news for a keyword and summarise it
    Fetch {
        /// Search keyword
        keyword: String,
        /// Path to a config file (defaults to newsbrief.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Summarise articles from a JSON file
    File {
        /// Article list or saved NewsAPI response
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (label, articles) = match cli.command {
        Commands::Fetch { keyword, config } => {
            let config = match config {
                Some(path) => Config::load_from(&path)?,
                None => Config::load()?,
            };
            let client = NewsClient::new(&config)?;
            let articles = client.search(&keyword).await?;
            (keyword, articles)
        }
        Commands::File { path } => {
            let articles = news::load_articles(&path)?;
            (path.display().to_string(), articles)
        }
    };

    let summary = generate_summary(&articles);
    print_summary(&label, &summary, cli.json)?;

    Ok(())
}

fn print_summary(label: &str, summary: &Summary, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        print!("{}", render_summary(label, summary, Utc::now()));
    }
    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over the verbosity flag
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
