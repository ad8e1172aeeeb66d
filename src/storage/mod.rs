//! Storage layer for splitledger
//!
//! A small asynchronous key-value contract ([`KeyValueStore`]) with a
//! directory-backed and an in-memory implementation, and the
//! [`ExpenseStore`] that keeps groups and expenses in memory and writes each
//! collection back under its own key.

pub mod expense_store;
pub mod file_io;
pub mod file_store;
pub mod memory;

pub use expense_store::{ExpenseStore, StoreState, EXPENSES_KEY, GROUPS_KEY};
pub use file_io::{read_json, read_text, write_json_atomic, write_text_atomic};
pub use file_store::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::LedgerResult;

/// Durable string-keyed storage
///
/// Both calls may fail with [`crate::LedgerError::Storage`]. There is no
/// transaction across keys: two `set` calls succeed or fail independently.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if nothing was written
    async fn get(&self, key: &str) -> LedgerResult<Option<String>>;

    /// Replace the value stored under `key`
    async fn set(&self, key: &str, value: &str) -> LedgerResult<()>;
}

#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    async fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> LedgerResult<()> {
        (**self).set(key, value).await
    }
}
