//! Spending summary
//!
//! Totals by category and by group, each with its share of overall spend.
//! Buckets are ordered by total, largest first; buckets with equal totals
//! keep the order in which they were first seen.

use std::collections::HashMap;
use std::hash::Hash;

use crate::models::{Expense, GroupId, Money};
use crate::storage::StoreState;

/// Spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    pub expense_count: usize,
    /// Percentage of total spending
    pub percentage: f64,
}

/// Spending in one group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    pub group_id: GroupId,
    pub group_name: String,
    pub total: Money,
    pub expense_count: usize,
    /// Percentage of total spending
    pub percentage: f64,
}

/// Summary of all expenses in the ledger
#[derive(Debug, Clone)]
pub struct SummaryReport {
    /// Sum of every expense amount
    pub total_spend: Money,
    pub expense_count: usize,
    pub categories: Vec<CategoryTotal>,
    /// Only groups that still exist
    pub groups: Vec<GroupTotal>,
    /// Spending logged against groups that no longer exist
    pub unassigned_total: Money,
    pub unassigned_count: usize,
}

/// Sum `amount` per key, remembering first-seen order
fn bucket_by<K, F>(expenses: &[Expense], key: F) -> Vec<(K, Money, usize)>
where
    K: Eq + Hash + Clone,
    F: Fn(&Expense) -> K,
{
    let mut buckets: Vec<(K, Money, usize)> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();

    for expense in expenses {
        let k = key(expense);
        match index.get(&k) {
            Some(&i) => {
                buckets[i].1 += expense.amount;
                buckets[i].2 += 1;
            }
            None => {
                index.insert(k.clone(), buckets.len());
                buckets.push((k, expense.amount, 1));
            }
        }
    }

    buckets
}

/// Largest first; `sort_by` is stable so ties keep first-seen order
fn sort_descending<T>(items: &mut [T], total: impl Fn(&T) -> Money) {
    items.sort_by(|a, b| {
        total(b)
            .value()
            .partial_cmp(&total(a).value())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

impl SummaryReport {
    /// Generate the summary from a store snapshot
    pub fn generate(state: &StoreState) -> Self {
        let expenses = &state.expenses;
        let total_spend: Money = expenses.iter().map(|e| e.amount).sum();

        let mut categories: Vec<CategoryTotal> = bucket_by(expenses, |e| e.category.clone())
            .into_iter()
            .map(|(category, total, expense_count)| CategoryTotal {
                category,
                total,
                expense_count,
                percentage: total.percentage_of(total_spend),
            })
            .collect();
        sort_descending(&mut categories, |c| c.total);

        let group_names: HashMap<&GroupId, &str> = state
            .groups
            .iter()
            .map(|g| (&g.id, g.name.as_str()))
            .collect();

        let mut groups = Vec::new();
        let mut unassigned_total = Money::zero();
        let mut unassigned_count = 0;

        for (group_id, total, expense_count) in bucket_by(expenses, |e| e.group_id.clone()) {
            match group_names.get(&group_id) {
                Some(name) => groups.push(GroupTotal {
                    group_name: name.to_string(),
                    group_id,
                    total,
                    expense_count,
                    percentage: total.percentage_of(total_spend),
                }),
                None => {
                    unassigned_total += total;
                    unassigned_count += expense_count;
                }
            }
        }
        sort_descending(&mut groups, |g| g.total);

        Self {
            total_spend,
            expense_count: expenses.len(),
            categories,
            groups,
            unassigned_total,
            unassigned_count,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Expense Summary\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total Expenses: {}\n",
            self.total_spend.format_with_symbol(currency)
        ));
        output.push_str(&format!("Expense Count: {}\n\n", self.expense_count));

        if self.expense_count == 0 {
            output.push_str("No expenses recorded yet.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<30} {:>12} {:>6} {:>7}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for category in &self.categories {
            output.push_str(&format!(
                "{:<30} {:>12} {:>6} {:>6.1}%\n",
                category.category,
                category.total.format_with_symbol(currency),
                category.expense_count,
                category.percentage
            ));
        }

        output.push_str(&format!(
            "\n{:<30} {:>12} {:>6} {:>7}\n",
            "Group", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for group in &self.groups {
            output.push_str(&format!(
                "{:<30} {:>12} {:>6} {:>6.1}%\n",
                group.group_name,
                group.total.format_with_symbol(currency),
                group.expense_count,
                group.percentage
            ));
        }

        if self.unassigned_count > 0 {
            output.push_str(&format!(
                "{:<30} {:>12} {:>6}\n",
                "(deleted groups)",
                self.unassigned_total.format_with_symbol(currency),
                self.unassigned_count
            ));
        }

        output
    }
}
