// src/pipeline/run.rs

//! One full crawl-filter-dedup-publish cycle.

use std::path::Path;

use crate::error::Result;
use crate::models::{Config, CrawlStats};
use crate::services::PageFetcher;
use crate::storage::SeenLinkStore;

use super::crawl::CrawlOrchestrator;
use super::publish::{FeedPublisher, PublishReport};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Feed and seen set were written
    Published(PublishReport),
    /// No record survived filtering; nothing was written
    NothingToPublish,
}

/// Summary of a run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub stats: CrawlStats,
    pub records: usize,
    pub outcome: RunOutcome,
}

/// Run the pipeline once.
///
/// The seen set is loaded before crawling and saved only after the feed has
/// been written. Callers must not run two pipelines against the same files
/// at the same time.
pub async fn run_pipeline(
    config: &Config,
    fetcher: &dyn PageFetcher,
    store: &dyn SeenLinkStore,
) -> Result<RunReport> {
    config.validate()?;
    let publisher = FeedPublisher::new(&config.feed)?;
    let crawler = CrawlOrchestrator::new(config, fetcher)?;

    let seen = store.load().await;
    log::info!("Loaded {} seen links", seen.len());

    let crawl = crawler.run().await;
    let stats = crawl.stats;
    log::info!(
        "Crawled {} pages ({} fetched, {} failed, {} without table): {} rows, {} excluded, {} kept",
        stats.pages_attempted,
        stats.pages_fetched,
        stats.fetch_failures,
        stats.tables_missing,
        stats.rows_extracted,
        stats.rows_excluded,
        crawl.records.len()
    );

    if crawl.records.is_empty() {
        log::info!("No disclosures to publish; feed and seen set left unchanged");
        return Ok(RunReport {
            stats,
            records: 0,
            outcome: RunOutcome::NothingToPublish,
        });
    }

    let output: &Path = &config.paths.output_feed;
    let report = publisher
        .publish(&crawl.records, &seen, store, output)
        .await?;

    log::info!(
        "{} new disclosures; seen set now holds {} links",
        report.new_links.len(),
        report.seen_total
    );

    Ok(RunReport {
        stats,
        records: crawl.records.len(),
        outcome: RunOutcome::Published(report),
    })
}
