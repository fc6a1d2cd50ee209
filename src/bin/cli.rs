//! Disclosure feed CLI
//!
//! One invocation performs one crawl-filter-dedup-publish cycle and exits.
//! Schedule it externally (cron, systemd timer) so runs never overlap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use disclosure_feed::{
    error::Result,
    models::Config,
    pipeline::{self, RunOutcome},
    services::HttpPageFetcher,
    storage::{JsonLinkStore, SeenLinkStore},
};

/// Timely-disclosure RSS generator
#[derive(Parser, Debug)]
#[command(name = "disclosure-feed", version, about = "Timely-disclosure RSS generator")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl the listing and rewrite the feed
    Run {
        /// Override crawler.max_pages
        #[arg(long)]
        max_pages: Option<u32>,

        /// Override feed.max_items
        #[arg(long)]
        max_items: Option<usize>,

        /// Override paths.output_feed
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override paths.state_file
        #[arg(long)]
        state: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,

    /// Show configured paths and seen-set size
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config)?;

    match cli.command {
        Command::Run {
            max_pages,
            max_items,
            output,
            state,
        } => {
            if let Some(pages) = max_pages {
                config.crawler.max_pages = pages;
            }
            if let Some(items) = max_items {
                config.feed.max_items = items;
            }
            if let Some(path) = output {
                config.paths.output_feed = path;
            }
            if let Some(path) = state {
                config.paths.state_file = path;
            }

            log::info!("Disclosure feed run starting...");
            let fetcher = HttpPageFetcher::new(&config.crawler)?;
            let store = JsonLinkStore::new(&config.paths.state_file);

            let report = match pipeline::run_pipeline(&config, &fetcher, &store).await {
                Ok(report) => report,
                Err(e) => {
                    log::error!("Run failed: {}", e);
                    return Err(e);
                }
            };

            match report.outcome {
                RunOutcome::Published(publish) => log::info!(
                    "Published {} entries to {} ({} new)",
                    publish.entries,
                    publish.output.display(),
                    publish.new_links.len()
                ),
                RunOutcome::NothingToPublish => log::info!("Nothing to publish"),
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!(
                "✓ Config OK ({} pages max, {} items max, {} exclusion keywords, {} codes)",
                config.crawler.max_pages,
                config.feed.max_items,
                config.filter.keywords.len(),
                config.filter.codes.len()
            );
        }

        Command::Info => {
            let store = JsonLinkStore::new(&config.paths.state_file);
            log::info!("Listing: {}", config.crawler.base_url);
            log::info!(
                "Feed: {} ({})",
                config.paths.output_feed.display(),
                if config.paths.output_feed.exists() {
                    "exists"
                } else {
                    "not written yet"
                }
            );
            log::info!(
                "Seen links: {} in {}",
                store.load().await.len(),
                store.path().display()
            );
        }
    }

    log::info!("Done!");

    Ok(())
}
