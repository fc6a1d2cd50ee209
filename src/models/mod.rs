// src/models/mod.rs

//! Domain models for the feed generator.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod disclosure;
pub mod exclusions;
mod feed;

// Re-export all public types
pub use config::{
    CleaningConfig, Config, CrawlerConfig, FeedConfig, FilterConfig, MissingTablePolicy,
    PathsConfig, SeenPolicy,
};
pub use disclosure::{DisclosureRecord, RawRow};
pub use feed::{FeedDocument, FeedEntry};

/// Counters collected while crawling the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStats {
    pub pages_attempted: u32,
    pub pages_fetched: u32,
    pub fetch_failures: u32,
    pub tables_missing: u32,
    pub rows_extracted: usize,
    pub rows_excluded: usize,
    /// Page at which a missing table ended the crawl, if any
    pub stopped_at: Option<u32>,
}

/// Records that survived filtering, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct CrawlOutcome {
    pub records: Vec<DisclosureRecord>,
    pub stats: CrawlStats,
}
