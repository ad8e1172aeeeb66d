//! Expense service
//!
//! Validated expense creation. Every new expense is split equally across all
//! members of its group, whoever paid.

use crate::error::LedgerResult;
use crate::models::{Expense, GroupId, Money, NewExpense, Split};
use crate::storage::{ExpenseStore, KeyValueStore};
use crate::validation::validate_new_expense;

use super::group::GroupService;

/// User input for a new expense
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    /// Group ID or name
    pub group: String,
    pub title: String,
    pub amount: Money,
    pub paid_by: String,
    pub category: String,
    pub description: Option<String>,
}

/// Service for expense management
pub struct ExpenseService<'a, S> {
    store: &'a ExpenseStore<S>,
}

impl<'a, S: KeyValueStore> ExpenseService<'a, S> {
    /// Create a new expense service
    pub fn new(store: &'a ExpenseStore<S>) -> Self {
        Self { store }
    }

    /// Validate a draft, split it equally and record it
    pub async fn create(&self, draft: ExpenseDraft) -> LedgerResult<Expense> {
        let group = GroupService::new(self.store).resolve(&draft.group)?;

        let category = validate_new_expense(
            &group,
            &draft.title,
            draft.amount,
            &draft.paid_by,
            &draft.category,
        )?;

        let description = draft
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        let expense = NewExpense {
            group_id: group.id.clone(),
            title: draft.title.trim().to_string(),
            description,
            amount: draft.amount,
            paid_by: draft.paid_by.trim().to_string(),
            split_between: Split::equal(draft.amount, &group.members),
            category: category.as_str().to_string(),
        };

        self.store.add_expense(expense).await
    }

    /// All expenses, newest first
    pub fn list(&self) -> LedgerResult<Vec<Expense>> {
        Ok(newest_first(self.store.expenses()?))
    }

    /// Expenses of one group, newest first
    pub fn list_for_group(&self, group_id: &GroupId) -> LedgerResult<Vec<Expense>> {
        Ok(newest_first(self.store.expenses_for_group(group_id)?))
    }
}

/// Reverse first so expenses logged in the same millisecond stay newest-first
fn newest_first(mut expenses: Vec<Expense>) -> Vec<Expense> {
    expenses.reverse();
    expenses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    expenses
}
