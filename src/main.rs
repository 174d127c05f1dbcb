mod catalog;
mod cli;
mod config;
mod feed;
mod prefs;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "floatchat", version, about = "Personalized feed for ARGO float data")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the personalized feed
    Feed {
        /// Free-text search over titles, descriptions, and tags
        #[arg(long)]
        search: Option<String>,
        /// Filter by domain (substring match)
        #[arg(long)]
        domain: Option<String>,
        /// Filter by region slug (e.g. arabian-sea)
        #[arg(long)]
        region: Option<String>,
        /// Filter by parameter (e.g. salinity)
        #[arg(long)]
        parameter: Option<String>,
        /// Maximum number of cards to show
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Register an interest signal for a catalog card
    Swipe {
        /// Card id (e.g. argo_002)
        id: String,
        /// Mark the card as interesting
        #[arg(long, conflicts_with = "pass")]
        like: bool,
        /// Mark the card as not interesting
        #[arg(long)]
        pass: bool,
    },
    /// Show the current preference record
    Inspect,
    /// Delete all learned preferences
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level and storage paths)
    let config = config::FloatchatConfig::load()?;

    let filter = EnvFilter::try_new(&config.app.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Feed {
            search,
            domain,
            region,
            parameter,
            limit,
        } => {
            let filter = feed::FeedFilter {
                search,
                domain,
                region,
                parameter,
            };
            cli::feed::feed(&config, &filter, limit)?;
        }
        Command::Swipe { id, like, pass } => {
            if !like && !pass {
                anyhow::bail!("specify --like or --pass");
            }
            cli::swipe::swipe(&config, &id, like)?;
        }
        Command::Inspect => {
            cli::inspect::inspect(&config)?;
        }
        Command::Reset => {
            cli::reset::reset(&config)?;
        }
    }

    Ok(())
}
