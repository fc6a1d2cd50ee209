//! Local filesystem storage implementation.
//!
//! Persists the seen set as a pretty-printed JSON array of strings, written
//! to a temp file and renamed into place.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::Result;
use crate::storage::{SeenLinkStore, SeenLinks};
use crate::utils::fs::write_atomic;

/// Seen-link store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonLinkStore {
    path: PathBuf,
}

impl JsonLinkStore {
    /// Create a store for the given file. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read bytes, returning None if file doesn't exist.
    async fn read_bytes(&self) -> std::io::Result<Option<Vec<u8>>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl SeenLinkStore for JsonLinkStore {
    async fn load(&self) -> SeenLinks {
        let bytes = match self.read_bytes().await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                log::info!("No seen-link file at {}; starting empty", self.path.display());
                return SeenLinks::new();
            }
            Err(e) => {
                log::warn!(
                    "Cannot read seen-link file {}: {}. Starting empty.",
                    self.path.display(),
                    e
                );
                return SeenLinks::new();
            }
        };

        match serde_json::from_slice::<Vec<String>>(&bytes) {
            Ok(links) => links.into_iter().collect(),
            Err(e) => {
                log::warn!(
                    "Seen-link file {} is malformed: {}. Starting empty.",
                    self.path.display(),
                    e
                );
                SeenLinks::new()
            }
        }
    }

    async fn save(&self, links: &SeenLinks) -> Result<()> {
        let mut bytes = serde_json::to_vec_pretty(links)?;
        bytes.push(b'\n');
        write_atomic(&self.path, &bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn links(items: &[&str]) -> SeenLinks {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let tmp = TempDir::new().unwrap();
        let store = JsonLinkStore::new(tmp.path().join("processed_links.json"));

        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let tmp = TempDir::new().unwrap();
        let store = JsonLinkStore::new(tmp.path().join("processed_links.json"));
        let seen = links(&["https://kabutan.jp/disclosures/2", "https://kabutan.jp/disclosures/1"]);

        store.save(&seen).await.unwrap();
        assert_eq!(store.load().await, seen);
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("processed_links.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(JsonLinkStore::new(&path).load().await.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_shape_loads_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("processed_links.json");
        std::fs::write(&path, r#"{"links": ["a"]}"#).unwrap();

        assert!(JsonLinkStore::new(&path).load().await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_file_loads_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("processed_links.json");
        std::fs::write(&path, "").unwrap();

        assert!(JsonLinkStore::new(&path).load().await.is_empty());
    }

    #[tokio::test]
    async fn test_saved_form_is_stable() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("processed_links.json");
        let store = JsonLinkStore::new(&path);
        let seen = links(&["b", "a", "c"]);

        store.save(&seen).await.unwrap();
        let first = std::fs::read(&path).unwrap();
        store.save(&store.load().await).await.unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
        let parsed: Vec<String> = serde_json::from_slice(&first).unwrap();
        assert_eq!(parsed, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_previous_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("processed_links.json");
        let store = JsonLinkStore::new(&path);
        store.save(&links(&["kept"])).await.unwrap();

        // Occupy the temp-file name with a directory so the write fails.
        std::fs::create_dir_all(tmp.path().join("processed_links.json.tmp/x")).unwrap();

        assert!(store.save(&links(&["kept", "new"])).await.is_err());
        assert_eq!(store.load().await, links(&["kept"]));
    }
}
