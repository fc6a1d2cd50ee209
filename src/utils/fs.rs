// src/utils/fs.rs

//! File writing helpers.

use std::path::Path;

use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};

/// Write bytes atomically (write to temp, then rename).
///
/// On failure the previous file at `path` is left intact.
pub async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::persist(path, e))?;
    }

    let tmp = tmp_path(path);
    let written = async {
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.sync_all().await?;
        drop(file);
        tokio::fs::rename(&tmp, path).await
    }
    .await;

    if let Err(e) = written {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(AppError::persist(path, e));
    }
    Ok(())
}

fn tmp_path(path: &Path) -> std::path::PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_replaces_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("feed.xml");

        write_atomic(&path, b"first").await.unwrap();
        write_atomic(&path, b"second").await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
        assert!(!tmp.path().join("feed.xml.tmp").exists());
    }

    #[tokio::test]
    async fn test_write_creates_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out/nested/state.json");

        write_atomic(&path, b"[]").await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"[]");
    }

    #[tokio::test]
    async fn test_failed_write_reports_path() {
        let tmp = TempDir::new().unwrap();
        // A directory in the way of the target makes the rename fail.
        let path = tmp.path().join("occupied");
        std::fs::create_dir_all(path.join("child")).unwrap();

        let err = write_atomic(&path, b"data").await.unwrap_err();
        assert!(matches!(err, AppError::Persist { .. }));
    }
}
