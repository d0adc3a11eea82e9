//! Local filesystem storage implementation.
//!
//! Mirrors the object-store contract on disk for development and testing.
//! Production deployments should use `S3Store`.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::storage::{FragmentStore, StoreReceipt};

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root_dir: PathBuf,
}

impl LocalStore {
    /// Create a new LocalStore rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Get the full path for a relative key.
    fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, key: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.path(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(path)
    }
}

#[async_trait]
impl FragmentStore for LocalStore {
    async fn put_fragment(&self, key: &str, html: &str) -> Result<StoreReceipt> {
        let path = self.write_bytes(key, html.as_bytes()).await?;
        log::info!("Wrote fragment to {}", path.display());
        Ok(StoreReceipt {
            location: path.display().to_string(),
            timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_fragment_writes_file_under_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());

        let receipt = store
            .put_fragment("reviews/product-a.html", "<section></section>")
            .await
            .unwrap();

        let path = dir.path().join("reviews/product-a.html");
        assert!(path.exists());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "<section></section>"
        );
        assert_eq!(receipt.location, path.display().to_string());
    }

    #[tokio::test]
    async fn put_fragment_overwrites_existing_object() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());

        store.put_fragment("reviews/p.html", "old").await.unwrap();
        store.put_fragment("reviews/p.html", "new").await.unwrap();

        let content = std::fs::read_to_string(dir.path().join("reviews/p.html")).unwrap();
        assert_eq!(content, "new");
    }

    #[tokio::test]
    async fn put_fragment_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());

        store.put_fragment("reviews/p.html", "body").await.unwrap();

        assert!(!dir.path().join("reviews/p.tmp").exists());
    }
}
