//! Directory-backed key-value store
//!
//! Each key is kept in its own `<key>.json` file under the data directory.
//! Blocking file I/O runs on tokio's blocking pool.

use std::path::PathBuf;

use async_trait::async_trait;

use super::file_io::{read_text, write_text_atomic};
use super::KeyValueStore;
use crate::error::{LedgerError, LedgerResult};

/// Key-value store that maps keys to JSON files in one directory
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `data_dir` (created on first write)
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the file backing `key`
    pub fn key_path(&self, key: &str) -> LedgerResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(LedgerError::Storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.data_dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        let path = self.key_path(key)?;
        tokio::task::spawn_blocking(move || read_text(path))
            .await
            .map_err(|e| LedgerError::Storage(format!("Read task failed: {}", e)))?
    }

    async fn set(&self, key: &str, value: &str) -> LedgerResult<()> {
        let path = self.key_path(key)?;
        let value = value.to_string();
        tokio::task::spawn_blocking(move || write_text_atomic(path, &value))
            .await
            .map_err(|e| LedgerError::Storage(format!("Write task failed: {}", e)))?
    }
}
