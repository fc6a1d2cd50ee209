//! Pipeline entry points.
//!
//! - `CrawlOrchestrator`: walk the listing pages and filter their rows
//! - `FeedPublisher`: write the feed and commit the seen set
//! - `run_pipeline`: one complete run

pub mod crawl;
pub mod publish;
pub mod run;

pub use crawl::CrawlOrchestrator;
pub use publish::{FeedPublisher, PublishReport};
pub use run::{RunOutcome, RunReport, run_pipeline};
