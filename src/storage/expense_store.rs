//! In-memory ledger state backed by a key-value store
//!
//! Groups and expenses live in memory and are written back as whole JSON
//! arrays under the `"groups"` and `"expenses"` keys. Mutations are visible
//! to readers immediately and complete once the durable write has finished.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex as AsyncMutex;

use super::KeyValueStore;
use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, Group, GroupId, NewExpense, NewGroup};

/// Storage key for the serialized group list
pub const GROUPS_KEY: &str = "groups";

/// Storage key for the serialized expense list
pub const EXPENSES_KEY: &str = "expenses";

/// Snapshot of everything the ledger holds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    pub groups: Vec<Group>,
    pub expenses: Vec<Expense>,
}

/// Authoritative in-memory state of groups and expenses
///
/// Performs no validation; see [`crate::validation`] and the services for
/// checked creation.
pub struct ExpenseStore<S> {
    backend: S,
    state: RwLock<StoreState>,
    // Held across snapshot + write so durable order matches memory order
    groups_write: AsyncMutex<()>,
    expenses_write: AsyncMutex<()>,
    audit: Option<AuditLogger>,
}

impl<S: KeyValueStore> ExpenseStore<S> {
    /// Create an empty store over `backend`; call [`Self::load_data`] to populate it
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            state: RwLock::new(StoreState::default()),
            groups_write: AsyncMutex::new(()),
            expenses_write: AsyncMutex::new(()),
            audit: None,
        }
    }

    /// Record every creation in `logger`
    pub fn with_audit_log(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Load persisted groups and expenses, replacing in-memory state
    ///
    /// Failures are logged and leave the current state untouched, so a broken
    /// or missing store degrades to an empty ledger instead of an error.
    pub async fn load_data(&self) {
        if let Err(err) = self.try_load_data().await {
            tracing::error!("Error loading data: {}", err);
        }
    }

    /// Same as [`Self::load_data`] but hands the failure back to the caller
    pub async fn try_load_data(&self) -> LedgerResult<()> {
        let _groups_guard = self.groups_write.lock().await;
        let _expenses_guard = self.expenses_write.lock().await;

        let (groups, expenses) = tokio::join!(
            self.backend.get(GROUPS_KEY),
            self.backend.get(EXPENSES_KEY)
        );
        let groups: Vec<Group> = decode_collection(GROUPS_KEY, groups?)?;
        let expenses: Vec<Expense> = decode_collection(EXPENSES_KEY, expenses?)?;

        tracing::debug!(
            groups = groups.len(),
            expenses = expenses.len(),
            "loaded ledger"
        );

        let mut state = self.write_state()?;
        *state = StoreState { groups, expenses };
        Ok(())
    }

    /// Append a new group and persist the group list
    ///
    /// If the write fails the group is removed from memory again and the
    /// storage error is returned.
    pub async fn add_group(&self, data: NewGroup) -> LedgerResult<Group> {
        let group = Group::new(data);
        let id = group.id.clone();

        self.append_and_persist(
            GROUPS_KEY,
            &self.groups_write,
            group.clone(),
            |state| &mut state.groups,
            |g| g.id == id,
        )
        .await?;

        self.log_create(
            EntityType::Group,
            group.id.to_string(),
            Some(group.name.clone()),
            &group,
        );
        Ok(group)
    }

    /// Append a new expense and persist the expense list
    ///
    /// The group id is not checked. If the write fails the expense is removed
    /// from memory again and the storage error is returned.
    pub async fn add_expense(&self, data: NewExpense) -> LedgerResult<Expense> {
        let expense = Expense::new(data);
        let id = expense.id.clone();

        self.append_and_persist(
            EXPENSES_KEY,
            &self.expenses_write,
            expense.clone(),
            |state| &mut state.expenses,
            |e| e.id == id,
        )
        .await?;

        self.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.title.clone()),
            &expense,
        );
        Ok(expense)
    }

    async fn append_and_persist<T, C, M>(
        &self,
        key: &str,
        write_lock: &AsyncMutex<()>,
        record: T,
        collection: C,
        is_record: M,
    ) -> LedgerResult<()>
    where
        T: Serialize,
        C: Fn(&mut StoreState) -> &mut Vec<T>,
        M: Fn(&T) -> bool,
    {
        let _persist = write_lock.lock().await;

        let snapshot = {
            let mut state = self.write_state()?;
            let items = collection(&mut *state);
            items.push(record);
            match serde_json::to_string(&*items) {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    items.pop();
                    return Err(err.into());
                }
            }
        };

        if let Err(err) = self.backend.set(key, &snapshot).await {
            tracing::error!(key, "failed to persist: {}", err);
            let mut state = self.write_state()?;
            let items = collection(&mut *state);
            if let Some(pos) = items.iter().rposition(|item| is_record(item)) {
                items.remove(pos);
            }
            return Err(err);
        }

        tracing::debug!(key, bytes = snapshot.len(), "persisted");
        Ok(())
    }

    fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) {
        if let Some(audit) = &self.audit {
            let entry = AuditEntry::create(entity_type, entity_id, entity_name, entity);
            // The record is already durable; a missing audit line is not worth failing for
            if let Err(err) = audit.log(&entry) {
                tracing::warn!("failed to write audit entry: {}", err);
            }
        }
    }
}

impl<S> ExpenseStore<S> {
    fn read_state(&self) -> LedgerResult<RwLockReadGuard<'_, StoreState>> {
        self.state
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_state(&self) -> LedgerResult<RwLockWriteGuard<'_, StoreState>> {
        self.state
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Copy of the full current state
    pub fn snapshot(&self) -> LedgerResult<StoreState> {
        Ok(self.read_state()?.clone())
    }

    /// All groups, in creation order
    pub fn groups(&self) -> LedgerResult<Vec<Group>> {
        Ok(self.read_state()?.groups.clone())
    }

    /// All expenses, in creation order
    pub fn expenses(&self) -> LedgerResult<Vec<Expense>> {
        Ok(self.read_state()?.expenses.clone())
    }

    /// Look up a group by id
    pub fn group(&self, id: &GroupId) -> LedgerResult<Option<Group>> {
        Ok(self
            .read_state()?
            .groups
            .iter()
            .find(|g| &g.id == id)
            .cloned())
    }

    /// Look up a group by name (case-insensitive, first match)
    pub fn group_by_name(&self, name: &str) -> LedgerResult<Option<Group>> {
        let wanted = name.trim().to_lowercase();
        Ok(self
            .read_state()?
            .groups
            .iter()
            .find(|g| g.name.trim().to_lowercase() == wanted)
            .cloned())
    }

    /// Expenses logged against `group_id`, in creation order
    pub fn expenses_for_group(&self, group_id: &GroupId) -> LedgerResult<Vec<Expense>> {
        Ok(self
            .read_state()?
            .expenses
            .iter()
            .filter(|e| e.belongs_to(group_id))
            .cloned()
            .collect())
    }

    pub fn group_count(&self) -> LedgerResult<usize> {
        Ok(self.read_state()?.groups.len())
    }

    pub fn expense_count(&self) -> LedgerResult<usize> {
        Ok(self.read_state()?.expenses.len())
    }
}

/// Decode a stored JSON array; absent or `null` means empty
fn decode_collection<T: DeserializeOwned>(key: &str, raw: Option<String>) -> LedgerResult<Vec<T>> {
    match raw {
        None => Ok(Vec::new()),
        Some(text) => {
            let items: Option<Vec<T>> = serde_json::from_str(&text)
                .map_err(|e| LedgerError::Json(format!("Failed to decode '{}': {}", key, e)))?;
            Ok(items.unwrap_or_default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Split};
    use crate::storage::{FileStore, MemoryStore};
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Arc;
    use tempfile::TempDir;

    /// Backend whose writes always fail
    struct ReadOnlyStore(MemoryStore);

    #[async_trait]
    impl KeyValueStore for ReadOnlyStore {
        async fn get(&self, key: &str) -> LedgerResult<Option<String>> {
            self.0.get(key).await
        }

        async fn set(&self, _key: &str, _value: &str) -> LedgerResult<()> {
            Err(LedgerError::Storage("disk full".into()))
        }
    }

    fn trip() -> NewGroup {
        NewGroup::new("Trip", vec!["Alice".to_string(), "Bob".to_string()])
    }

    fn dinner(group_id: &GroupId) -> NewExpense {
        NewExpense {
            group_id: group_id.clone(),
            title: "Dinner".into(),
            description: None,
            amount: Money::new(40.0),
            paid_by: "Alice".into(),
            split_between: Split::equal(Money::new(40.0), &["Alice", "Bob"]),
            category: "Food & Drinks".into(),
        }
    }

    #[tokio::test]
    async fn test_load_empty_backend() {
        let store = ExpenseStore::new(MemoryStore::new());
        store.try_load_data().await.unwrap();

        assert!(store.groups().unwrap().is_empty());
        assert!(store.expenses().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_group_grows_by_one_with_fresh_id() {
        let store = ExpenseStore::new(MemoryStore::new());
        let mut seen = HashSet::new();

        for i in 0..20 {
            let group = store
                .add_group(NewGroup::new(format!("G{}", i), vec!["A".into(), "B".into()]))
                .await
                .unwrap();
            assert_eq!(store.group_count().unwrap(), i + 1);
            assert!(seen.insert(group.id));
        }
    }

    #[tokio::test]
    async fn test_add_is_visible_and_persisted() {
        let backend = Arc::new(MemoryStore::new());
        let store = ExpenseStore::new(Arc::clone(&backend));
        let group = store.add_group(trip()).await.unwrap();

        assert_eq!(store.group(&group.id).unwrap(), Some(group.clone()));

        let raw = backend.get(GROUPS_KEY).await.unwrap().unwrap();
        let stored: Vec<Group> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, vec![group]);
    }

    #[tokio::test]
    async fn test_reload_round_trip() {
        let backend = Arc::new(MemoryStore::new());
        let store = ExpenseStore::new(Arc::clone(&backend));
        let group = store.add_group(trip()).await.unwrap();
        store.add_expense(dinner(&group.id)).await.unwrap();
        let written = store.snapshot().unwrap();

        let reloaded = ExpenseStore::new(backend);
        reloaded.load_data().await;
        assert_eq!(reloaded.snapshot().unwrap(), written);
    }

    #[tokio::test]
    async fn test_reload_from_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(FileStore::new(temp_dir.path()));
        let group = store.add_group(trip()).await.unwrap();
        store.add_expense(dinner(&group.id)).await.unwrap();

        let reloaded = ExpenseStore::new(FileStore::new(temp_dir.path()));
        reloaded.load_data().await;
        assert_eq!(reloaded.groups().unwrap(), vec![group.clone()]);
        assert_eq!(reloaded.expenses_for_group(&group.id).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_load_reads_original_format() {
        let backend = MemoryStore::with_entries([
            (
                GROUPS_KEY,
                r#"[{"id":"ab12c","name":"Trip","members":["Alice","Bob"],"createdAt":1700000000000}]"#,
            ),
            (
                EXPENSES_KEY,
                r#"[{"id":"zz9","groupId":"ab12c","title":"Dinner","description":"","amount":40,"paidBy":"Alice","splitBetween":{"Alice":20,"Bob":20},"category":"Food & Drinks","createdAt":1700000001000}]"#,
            ),
        ]);
        let store = ExpenseStore::new(backend);
        store.try_load_data().await.unwrap();

        let group = store.group_by_name("trip").unwrap().unwrap();
        assert_eq!(group.id.as_str(), "ab12c");
        let expenses = store.expenses_for_group(&group.id).unwrap();
        assert_eq!(expenses[0].amount, Money::new(40.0));
    }

    #[tokio::test]
    async fn test_null_collection_is_empty() {
        let store = ExpenseStore::new(MemoryStore::with_entries([(GROUPS_KEY, "null")]));
        store.try_load_data().await.unwrap();
        assert_eq!(store.group_count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_corrupt_load_keeps_state() {
        let backend = Arc::new(MemoryStore::new());
        let store = ExpenseStore::new(Arc::clone(&backend));
        store.add_group(trip()).await.unwrap();

        backend.set(EXPENSES_KEY, "{not json").await.unwrap();

        assert!(store.try_load_data().await.is_err());
        store.load_data().await;
        assert_eq!(store.group_count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_failed_write_rolls_back() {
        let store = ExpenseStore::new(ReadOnlyStore(MemoryStore::new()));

        let err = store.add_group(trip()).await.unwrap_err();
        assert!(err.is_storage());
        assert_eq!(store.group_count().unwrap(), 0);

        let err = store
            .add_expense(dinner(&GroupId::from_raw("g")))
            .await
            .unwrap_err();
        assert!(err.is_storage());
        assert_eq!(store.expense_count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_non_finite_amount_is_never_stored() {
        let backend = Arc::new(MemoryStore::new());
        let store = ExpenseStore::new(Arc::clone(&backend));
        let group = store.add_group(trip()).await.unwrap();
        store.add_expense(dinner(&group.id)).await.unwrap();

        let mut broken = dinner(&group.id);
        broken.amount = Money::new(f64::NAN);
        let err = store.add_expense(broken).await.unwrap_err();
        assert!(matches!(err, LedgerError::Json(_)));
        assert_eq!(store.expense_count().unwrap(), 1);

        let reloaded = ExpenseStore::new(Arc::clone(&backend));
        reloaded.try_load_data().await.unwrap();
        assert_eq!(reloaded.expenses().unwrap(), store.expenses().unwrap());
    }

    #[tokio::test]
    async fn test_orphaned_expense_is_accepted() {
        let store = ExpenseStore::new(MemoryStore::new());
        let expense = store
            .add_expense(dinner(&GroupId::from_raw("missing")))
            .await
            .unwrap();

        assert_eq!(store.expenses().unwrap(), vec![expense]);
        assert!(store.group(&GroupId::from_raw("missing")).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_adds_all_persist() {
        let backend = Arc::new(MemoryStore::new());
        let store = Arc::new(ExpenseStore::new(Arc::clone(&backend)));

        let mut handles = Vec::new();
        for i in 0..10 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .add_group(NewGroup::new(format!("G{}", i), vec!["A".into(), "B".into()]))
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let reloaded = ExpenseStore::new(backend);
        reloaded.try_load_data().await.unwrap();
        assert_eq!(reloaded.group_count().unwrap(), 10);
    }

    #[tokio::test]
    async fn test_audit_entries_written() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let store = ExpenseStore::new(MemoryStore::new()).with_audit_log(logger.clone());

        let group = store.add_group(trip()).await.unwrap();
        store.add_expense(dinner(&group.id)).await.unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].entity_type, EntityType::Group);
        assert_eq!(entries[1].entity_name.as_deref(), Some("Dinner"));
    }
}
