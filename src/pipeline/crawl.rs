// src/pipeline/crawl.rs

//! Listing crawl: fetch, extract and filter each page in order.

use std::time::Duration;

use chrono::FixedOffset;
use url::Url;

use crate::error::{Result, TableNotFound};
use crate::models::{Config, CrawlOutcome, DisclosureRecord, MissingTablePolicy};
use crate::services::{ExclusionSet, PageFetcher, RecordExtractor};

/// Drives pagination over the listing.
///
/// Pages are visited strictly in increasing order, one request at a time,
/// with the politeness delay before every request after the first. A failed
/// fetch costs only that page.
pub struct CrawlOrchestrator<'a> {
    fetcher: &'a dyn PageFetcher,
    extractor: RecordExtractor,
    filter: ExclusionSet,
    origin: Url,
    timezone: FixedOffset,
    max_pages: u32,
    delay: Duration,
    on_missing_table: MissingTablePolicy,
}

impl<'a> CrawlOrchestrator<'a> {
    /// Create an orchestrator from configuration.
    pub fn new(config: &Config, fetcher: &'a dyn PageFetcher) -> Result<Self> {
        Ok(Self {
            fetcher,
            extractor: RecordExtractor::new(config.extract.clone())?,
            filter: ExclusionSet::new(&config.filter),
            origin: config.crawler.base_url()?,
            timezone: config.feed.timezone()?,
            max_pages: config.crawler.max_pages,
            delay: Duration::from_millis(config.crawler.request_delay_ms),
            on_missing_table: config.crawler.on_missing_table,
        })
    }

    /// Crawl pages `1..=max_pages` and collect surviving records in discovery order.
    pub async fn run(&self) -> CrawlOutcome {
        let mut outcome = CrawlOutcome::default();

        for page in 1..=self.max_pages {
            if page > 1 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            outcome.stats.pages_attempted += 1;
            log::info!("Crawling page {}/{}", page, self.max_pages);

            let markup = match self.fetcher.fetch(page).await {
                Ok(markup) => markup,
                Err(error) => {
                    outcome.stats.fetch_failures += 1;
                    log::warn!("Skipping page {}: {}", page, error);
                    continue;
                }
            };
            outcome.stats.pages_fetched += 1;

            let rows = match self.extractor.extract(&markup) {
                Ok(rows) => rows,
                Err(TableNotFound) => {
                    outcome.stats.tables_missing += 1;
                    match self.on_missing_table {
                        MissingTablePolicy::Skip => {
                            log::warn!("No disclosure table on page {}; skipping", page);
                            continue;
                        }
                        MissingTablePolicy::Stop => {
                            log::warn!("No disclosure table on page {}; stopping crawl", page);
                            outcome.stats.stopped_at = Some(page);
                            break;
                        }
                    }
                }
            };

            let row_count = rows.len();
            let before = outcome.records.len();
            outcome.stats.rows_extracted += row_count;

            for row in rows {
                let record = DisclosureRecord::from_row(row, &self.origin, self.timezone);
                if self.filter.is_excluded(&record) {
                    log::debug!("Excluded [{}] {}", record.code, record.title);
                    outcome.stats.rows_excluded += 1;
                    continue;
                }
                outcome.records.push(record);
            }

            log::debug!(
                "Page {}: {} rows, {} kept",
                page,
                row_count,
                outcome.records.len() - before
            );
        }

        outcome
    }
}
