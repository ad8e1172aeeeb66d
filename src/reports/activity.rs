//! Activity feed
//!
//! Every expense, newest first, with the name of the group it belongs to.

use std::collections::HashMap;

use crate::models::{Expense, GroupId};
use crate::storage::StoreState;

/// Shown for expenses whose group no longer exists
pub const UNKNOWN_GROUP: &str = "Unknown Group";

/// One line of the activity feed
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub expense: Expense,
    pub group_name: String,
}

impl ActivityEntry {
    /// Whether the payer also carries a positive share of the expense
    pub fn payer_has_share(&self) -> bool {
        self.expense.payer_has_share()
    }
}

/// Expenses across all groups, newest first
#[derive(Debug, Clone, Default)]
pub struct ActivityFeed {
    pub entries: Vec<ActivityEntry>,
}

impl ActivityFeed {
    /// Build the feed; `limit` keeps only the newest entries
    pub fn generate(state: &StoreState, limit: Option<usize>) -> Self {
        let names: HashMap<&GroupId, &str> = state
            .groups
            .iter()
            .map(|g| (&g.id, g.name.as_str()))
            .collect();

        // Reverse first so expenses logged in the same millisecond stay newest-first
        let mut expenses: Vec<&Expense> = state.expenses.iter().rev().collect();
        expenses.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let entries = expenses
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|expense| ActivityEntry {
                group_name: names
                    .get(&expense.group_id)
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| UNKNOWN_GROUP.to_string()),
                expense: expense.clone(),
            })
            .collect();

        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
