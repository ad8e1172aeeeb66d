//! Group display formatting

use crate::models::{Expense, Group};
use crate::reports::group_total;

use super::truncate;

/// Format groups as a table with each group's total spend
pub fn format_group_list(
    groups: &[Group],
    expenses: &[Expense],
    currency: &str,
    date_format: &str,
) -> String {
    if groups.is_empty() {
        return "No groups yet.\n\nCreate one with 'splitledger group add <name> -m <member> -m <member>'."
            .to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10} {:<24} {:>8} {:>12}  {}\n",
        "ID", "Name", "Members", "Total", "Created"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for group in groups {
        output.push_str(&format!(
            "{:<10} {:<24} {:>8} {:>12}  {}\n",
            group.id.short(),
            truncate(&group.name, 24),
            group.member_count(),
            group_total(expenses, &group.id).format_with_symbol(currency),
            group.created_at.format(date_format)
        ));
    }

    output
}

/// Format one group with its members and expenses
pub fn format_group_details(
    group: &Group,
    expenses: &[Expense],
    currency: &str,
    date_format: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Group:   {}\n", group.name));
    output.push_str(&format!("ID:      {}\n", group.id));
    output.push_str(&format!("Created: {}\n", group.created_at.format(date_format)));
    output.push_str(&format!("\n{} members\n", group.member_count()));
    for member in &group.members {
        output.push_str(&format!("  {}\n", member));
    }

    let own: Vec<&Expense> = expenses.iter().filter(|e| e.belongs_to(&group.id)).collect();
    output.push_str(&format!("\nExpenses ({})\n", own.len()));
    if own.is_empty() {
        output.push_str("  (none)\n");
    }
    for expense in own {
        output.push_str(&format!(
            "  {:<28} {:>12}  paid by {:<12} {}\n",
            truncate(&expense.title, 28),
            expense.amount.format_with_symbol(currency),
            expense.paid_by,
            expense.created_at.format(date_format)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewExpense, NewGroup, Split};

    fn trip() -> Group {
        Group::new(NewGroup::new("Trip", vec!["Alice".into(), "Bob".into()]))
    }

    #[test]
    fn test_empty_list() {
        assert!(format_group_list(&[], &[], "$", "%Y-%m-%d").starts_with("No groups yet."));
    }

    #[test]
    fn test_list_shows_totals() {
        let group = trip();
        let expense = Expense::new(NewExpense {
            group_id: group.id.clone(),
            title: "Dinner".into(),
            description: None,
            amount: Money::new(40.0),
            paid_by: "Alice".into(),
            split_between: Split::equal(Money::new(40.0), &group.members),
            category: "Food & Drinks".into(),
        });

        let text = format_group_list(&[group.clone()], &[expense.clone()], "$", "%Y-%m-%d");
        assert!(text.contains("Trip"));
        assert!(text.contains("$40.00"));

        let details = format_group_details(&group, &[expense], "$", "%Y-%m-%d");
        assert!(details.contains("2 members"));
        assert!(details.contains("paid by Alice"));
    }
}
