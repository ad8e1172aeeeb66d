//! Group service
//!
//! Validated group creation and lookup.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Group, GroupId, NewGroup};
use crate::storage::{ExpenseStore, KeyValueStore};
use crate::validation::validate_new_group;

/// Service for group management
pub struct GroupService<'a, S> {
    store: &'a ExpenseStore<S>,
}

impl<'a, S: KeyValueStore> GroupService<'a, S> {
    /// Create a new group service
    pub fn new(store: &'a ExpenseStore<S>) -> Self {
        Self { store }
    }

    /// Create a group after trimming and validating its fields
    pub async fn create(&self, name: &str, members: &[String]) -> LedgerResult<Group> {
        validate_new_group(name, members)?;

        let members: Vec<String> = members.iter().map(|m| m.trim().to_string()).collect();
        self.store
            .add_group(NewGroup::new(name.trim(), members))
            .await
    }

    /// Find a group by ID or name
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<Group>> {
        let identifier = identifier.trim();
        if let Some(group) = self.store.group(&GroupId::from_raw(identifier))? {
            return Ok(Some(group));
        }
        self.store.group_by_name(identifier)
    }

    /// Find a group by ID or name, failing if there is none
    pub fn resolve(&self, identifier: &str) -> LedgerResult<Group> {
        self.find(identifier)?
            .ok_or_else(|| LedgerError::group_not_found(identifier))
    }

    /// List all groups in creation order
    pub fn list(&self) -> LedgerResult<Vec<Group>> {
        self.store.groups()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::validation::ValidationError;

    fn members(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_create_trims_fields() {
        let store = ExpenseStore::new(MemoryStore::new());
        let service = GroupService::new(&store);

        let group = service
            .create("  Trip ", &members(&[" Alice", "Bob "]))
            .await
            .unwrap();

        assert_eq!(group.name, "Trip");
        assert_eq!(group.members, members(&["Alice", "Bob"]));
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input() {
        let store = ExpenseStore::new(MemoryStore::new());
        let service = GroupService::new(&store);

        let err = service.create("Trip", &members(&["Alice"])).await.unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(ValidationError::TooFewMembers(1))
        ));

        let err = service
            .create("Trip", &members(&["Alice", " Alice "]))
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.group_count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_find_by_id_or_name() {
        let store = ExpenseStore::new(MemoryStore::new());
        let service = GroupService::new(&store);
        let group = service
            .create("Trip", &members(&["Alice", "Bob"]))
            .await
            .unwrap();

        assert_eq!(service.find(group.id.as_str()).unwrap(), Some(group.clone()));
        assert_eq!(service.find("TRIP").unwrap(), Some(group.clone()));
        assert!(service.find("Flat").unwrap().is_none());
        assert!(service.resolve("Flat").unwrap_err().is_not_found());
    }
}
