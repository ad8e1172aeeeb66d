//! In-memory key-value store
//!
//! Nothing survives the process. Useful for tests and throwaway sessions.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::KeyValueStore;
use crate::error::LedgerResult;

/// Key-value store backed by a map
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with some keys already written
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> LedgerResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("groups").await.unwrap(), None);

        store.set("groups", "[]").await.unwrap();
        assert_eq!(store.get("groups").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_with_entries() {
        let store = MemoryStore::with_entries([("expenses", "[]")]);
        assert_eq!(store.get("expenses").await.unwrap().as_deref(), Some("[]"));
    }
}
