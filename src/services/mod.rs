//! Service layer for the feed generator.
//!
//! This module contains the building blocks of one run:
//! - Listing page fetching (`PageFetcher`, `HttpPageFetcher`)
//! - Disclosure table extraction (`RecordExtractor`)
//! - Noise filtering (`ExclusionSet`)
//! - RSS serialization (`rss::render`)

mod extractor;
mod fetcher;
mod filter;
pub mod rss;

pub use extractor::RecordExtractor;
pub use fetcher::{HttpPageFetcher, PageFetcher};
pub use filter::ExclusionSet;
