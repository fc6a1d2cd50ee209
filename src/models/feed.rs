//! Feed document structures.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One syndicated item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    pub description: String,
    pub published_at: DateTime<FixedOffset>,
    /// Permalink GUID; always equal to `link`
    pub guid: String,
}

/// Channel metadata plus entries in discovery order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedDocument {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: String,
    pub built_at: DateTime<FixedOffset>,
    pub entries: Vec<FeedEntry>,
}

impl FeedDocument {
    /// Links of all entries, in order.
    pub fn links(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.link.as_str())
    }
}
