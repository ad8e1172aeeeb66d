//! Expense display formatting

use crate::models::Expense;
use crate::reports::ActivityFeed;

use super::truncate;

/// Format expenses as a table
pub fn format_expense_list(expenses: &[Expense], currency: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<26} {:<16} {:>12}  {:<12}\n",
        "Date", "Title", "Category", "Amount", "Paid By"
    ));
    output.push_str(&"-".repeat(82));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format!(
            "{:<12} {:<26} {:<16} {:>12}  {:<12}\n",
            expense.created_at.format(date_format).to_string(),
            truncate(&expense.title, 26),
            truncate(&expense.category, 16),
            expense.amount.format_with_symbol(currency),
            truncate(&expense.paid_by, 12)
        ));
    }

    output.push_str(&format!("\nTotal: {} expenses\n", expenses.len()));
    output
}

/// Format the activity feed, newest first
pub fn format_activity(feed: &ActivityFeed, currency: &str, date_format: &str) -> String {
    if feed.is_empty() {
        return "No activity yet.\n\nStart adding expenses to see your activity.".to_string();
    }

    let mut output = String::new();
    for entry in &feed.entries {
        let expense = &entry.expense;
        let arrow = if entry.payer_has_share() { "↑" } else { "↓" };
        output.push_str(&format!(
            "{} {:<26} {:>12}  {} · paid by {} · {}\n",
            arrow,
            truncate(&expense.title, 26),
            expense.amount.abs().format_with_symbol(currency),
            entry.group_name,
            expense.paid_by,
            expense.created_at.format(date_format)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GroupId, Money, NewExpense, Split};
    use crate::storage::StoreState;

    #[test]
    fn test_empty() {
        assert_eq!(format_expense_list(&[], "$", "%Y-%m-%d"), "No expenses found.");
        assert!(format_activity(&ActivityFeed::default(), "$", "%Y-%m-%d")
            .starts_with("No activity yet."));
    }

    #[test]
    fn test_activity_line() {
        let expense = Expense::new(NewExpense {
            group_id: GroupId::from_raw("gone"),
            title: "Refund".into(),
            description: None,
            amount: Money::new(-15.0),
            paid_by: "Bob".into(),
            split_between: Split::equal(Money::new(-15.0), &["Alice", "Bob"]),
            category: "Others".into(),
        });
        let state = StoreState {
            groups: vec![],
            expenses: vec![expense],
        };

        let text = format_activity(&ActivityFeed::generate(&state, None), "$", "%Y-%m-%d");
        assert!(text.starts_with("↓ Refund"));
        assert!(text.contains("$15.00  Unknown Group · paid by Bob"));
    }
}
