//! JSON-file backed store
//!
//! Keeps the whole key space in memory and rewrites one JSON document on
//! every set. Fine for the handful of small values the engine persists;
//! not a general-purpose database.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::KeyValueStore;

/// Durable key-value store persisted as a single JSON file
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, creating an empty one if the file does
    /// not exist yet
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("corrupt store file {}", path.display()))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                return Err(err).with_context(|| format!("reading store file {}", path.display()))
            }
        };
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    async fn flush(&self, entries: &HashMap<String, String>) -> Result<()> {
        let raw = serde_json::to_string_pretty(entries)?;
        tokio::fs::write(&self.path, raw)
            .await
            .with_context(|| format!("writing store file {}", self.path.display()))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_across_reopen() {
        let dir = std::env::temp_dir().join("stride-filestore-test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("store.json");
        let _ = tokio::fs::remove_file(&path).await;

        {
            let store = FileStore::open(&path).await.unwrap();
            assert_eq!(store.get("streak").await.unwrap(), None);
            store.set("streak", r#"{"current":3}"#).await.unwrap();
        }

        let reopened = FileStore::open(&path).await.unwrap();
        assert_eq!(
            reopened.get("streak").await.unwrap(),
            Some(r#"{"current":3}"#.to_string())
        );

        let _ = tokio::fs::remove_file(&path).await;
    }
}
