//! Storage abstractions for the seen-link set.
//!
//! The seen set records every disclosure link already surfaced by a previous
//! run. It is loaded once at the start of a run and replaced once at the end.
//! Runs are assumed not to overlap; nothing here takes a lock.
//!
//! ## File Format
//!
//! ```text
//! [
//!   "https://kabutan.jp/disclosures/pdf/20250801/140120250801512345/",
//!   "https://kabutan.jp/disclosures/pdf/20250801/140120250801512399/"
//! ]
//! ```

pub mod local;

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::error::Result;

// Re-export for convenience
pub use local::JsonLinkStore;

/// Links already surfaced, kept sorted so the persisted form is stable.
pub type SeenLinks = BTreeSet<String>;

/// Trait for seen-link storage backends.
#[async_trait]
pub trait SeenLinkStore: Send + Sync {
    /// Load the persisted set.
    ///
    /// A missing, unreadable or malformed backing resource yields an empty set;
    /// this never fails the caller.
    async fn load(&self) -> SeenLinks;

    /// Replace the persisted set with `links`.
    ///
    /// A failed write leaves the previous content in place.
    async fn save(&self, links: &SeenLinks) -> Result<()>;
}
