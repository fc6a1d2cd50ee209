// src/pipeline/publish.rs

//! Feed publishing and seen-set update.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::FixedOffset;

use crate::error::Result;
use crate::models::{DisclosureRecord, FeedConfig, FeedDocument, FeedEntry, SeenPolicy};
use crate::services::rss;
use crate::storage::{SeenLinkStore, SeenLinks};
use crate::utils::{date, fs::write_atomic};

/// Result of a successful publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    /// Entries written to the feed
    pub entries: usize,
    /// Feed links not present in the seen set before this run, in feed order
    pub new_links: Vec<String>,
    /// Size of the seen set after the update
    pub seen_total: usize,
    /// Where the feed was written
    pub output: PathBuf,
}

/// Turns filtered records into a feed and commits the seen set.
pub struct FeedPublisher<'a> {
    config: &'a FeedConfig,
    timezone: FixedOffset,
}

impl<'a> FeedPublisher<'a> {
    pub fn new(config: &'a FeedConfig) -> Result<Self> {
        Ok(Self {
            config,
            timezone: config.timezone()?,
        })
    }

    /// Records that become feed entries.
    ///
    /// The first occurrence of each link wins; the result is capped at
    /// `max_items` in discovery order.
    pub fn select<'r>(&self, records: &'r [DisclosureRecord]) -> Vec<&'r DisclosureRecord> {
        let mut links = HashSet::new();
        let mut selected = Vec::new();
        for record in records {
            if selected.len() == self.config.max_items {
                break;
            }
            if links.insert(record.link.as_str()) {
                selected.push(record);
            }
        }
        selected
    }

    /// Build the feed document for the given records.
    pub fn build(&self, records: &[DisclosureRecord]) -> FeedDocument {
        let entries = self
            .select(records)
            .into_iter()
            .map(|record| self.entry(record))
            .collect();

        FeedDocument {
            title: self.config.title.clone(),
            link: self.config.link.clone(),
            description: self.config.description.clone(),
            language: self.config.language.clone(),
            built_at: date::now_in(self.timezone),
            entries,
        }
    }

    fn entry(&self, record: &DisclosureRecord) -> FeedEntry {
        FeedEntry {
            title: record.headline(),
            link: record.link.clone(),
            description: record.format(&self.config.item_description),
            published_at: record.published_at,
            guid: record.link.clone(),
        }
    }

    /// Write the feed to `output`, then commit the updated seen set to `store`.
    ///
    /// The seen set is only saved after the feed was written. Either write
    /// failing fails the publish.
    pub async fn publish(
        &self,
        records: &[DisclosureRecord],
        seen: &SeenLinks,
        store: &dyn SeenLinkStore,
        output: &Path,
    ) -> Result<PublishReport> {
        let document = self.build(records);
        let bytes = rss::render(&document)?;
        write_atomic(output, &bytes).await?;
        log::info!(
            "Feed written to {} ({} entries)",
            output.display(),
            document.entries.len()
        );

        let new_links: Vec<String> = document
            .links()
            .filter(|link| !seen.contains(*link))
            .map(str::to_string)
            .collect();

        let updated = self.updated_seen(seen, records, &document);
        store.save(&updated).await?;

        Ok(PublishReport {
            entries: document.entries.len(),
            new_links,
            seen_total: updated.len(),
            output: output.to_path_buf(),
        })
    }

    /// Previously seen links plus the links this run marks as seen.
    pub fn updated_seen(
        &self,
        seen: &SeenLinks,
        records: &[DisclosureRecord],
        document: &FeedDocument,
    ) -> SeenLinks {
        let mut updated = seen.clone();
        match self.config.mark_seen {
            SeenPolicy::All => updated.extend(records.iter().map(|r| r.link.clone())),
            SeenPolicy::Retained => updated.extend(document.links().map(str::to_string)),
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    use crate::storage::JsonLinkStore;

    fn record(n: u32) -> DisclosureRecord {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        DisclosureRecord {
            code: "7203".to_string(),
            company_name: "トヨタ自動車".to_string(),
            title: format!("開示{n}"),
            link: format!("https://kabutan.jp/disclosures/{n}"),
            published_at: tz.with_ymd_and_hms(2025, 8, 1, 13, 41, 0).unwrap(),
        }
    }

    fn feed_config(max_items: usize) -> FeedConfig {
        FeedConfig {
            max_items,
            ..FeedConfig::default()
        }
    }

    #[test]
    fn test_entries_capped_at_max_items() {
        let config = feed_config(3);
        let publisher = FeedPublisher::new(&config).unwrap();
        let records: Vec<_> = (1..=10).map(record).collect();

        let doc = publisher.build(&records);
        assert_eq!(doc.entries.len(), 3);
        assert_eq!(doc.entries[0].link, "https://kabutan.jp/disclosures/1");
        assert_eq!(doc.entries[2].link, "https://kabutan.jp/disclosures/3");
    }

    #[test]
    fn test_entry_fields() {
        let config = FeedConfig::default();
        let publisher = FeedPublisher::new(&config).unwrap();

        let doc = publisher.build(&[record(123)]);
        let entry = &doc.entries[0];
        assert_eq!(entry.title, "【トヨタ自動車 (7203)】開示123");
        assert_eq!(entry.description, "適時開示：開示123");
        assert_eq!(entry.guid, entry.link);
        assert_eq!(doc.language, "ja");
    }

    #[test]
    fn test_repeated_link_appears_once() {
        let config = FeedConfig::default();
        let publisher = FeedPublisher::new(&config).unwrap();
        let mut duplicate = record(1);
        duplicate.title = "later copy".to_string();

        let doc = publisher.build(&[record(1), record(2), duplicate]);
        assert_eq!(doc.entries.len(), 2);
        assert_eq!(doc.entries[0].title, "【トヨタ自動車 (7203)】開示1");
    }

    #[test]
    fn test_all_policy_marks_truncated_records_seen() {
        let config = feed_config(2);
        let publisher = FeedPublisher::new(&config).unwrap();
        let records: Vec<_> = (1..=4).map(record).collect();
        let doc = publisher.build(&records);

        let updated = publisher.updated_seen(&SeenLinks::new(), &records, &doc);
        assert_eq!(updated.len(), 4);
    }

    #[test]
    fn test_retained_policy_marks_only_feed_links() {
        let config = FeedConfig {
            mark_seen: SeenPolicy::Retained,
            ..feed_config(2)
        };
        let publisher = FeedPublisher::new(&config).unwrap();
        let records: Vec<_> = (1..=4).map(record).collect();
        let doc = publisher.build(&records);

        let updated = publisher.updated_seen(&SeenLinks::new(), &records, &doc);
        assert_eq!(updated.len(), 2);
        assert!(updated.contains("https://kabutan.jp/disclosures/2"));
        assert!(!updated.contains("https://kabutan.jp/disclosures/3"));
    }

    #[tokio::test]
    async fn test_publish_reports_new_links_and_commits_seen() {
        let tmp = TempDir::new().unwrap();
        let store = JsonLinkStore::new(tmp.path().join("seen.json"));
        let output = tmp.path().join("feed.xml");
        let config = FeedConfig::default();
        let publisher = FeedPublisher::new(&config).unwrap();

        let seen: SeenLinks = [record(1).link].into_iter().collect();
        let records = vec![record(1), record(2)];

        let report = publisher
            .publish(&records, &seen, &store, &output)
            .await
            .unwrap();

        assert_eq!(report.entries, 2);
        assert_eq!(report.new_links, vec![record(2).link]);
        assert_eq!(report.seen_total, 2);
        assert!(output.exists());
        assert_eq!(store.load().await.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_feed_write_leaves_seen_untouched() {
        let tmp = TempDir::new().unwrap();
        let store = JsonLinkStore::new(tmp.path().join("seen.json"));
        let output = tmp.path().join("feed.xml");
        std::fs::create_dir_all(output.join("blocker")).unwrap();
        let config = FeedConfig::default();
        let publisher = FeedPublisher::new(&config).unwrap();

        let result = publisher
            .publish(&[record(1)], &SeenLinks::new(), &store, &output)
            .await;

        assert!(result.is_err());
        assert!(!tmp.path().join("seen.json").exists());
    }
}
