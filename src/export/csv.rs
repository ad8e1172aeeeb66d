//! CSV Export functionality
//!
//! Exports expenses, or the category and group summary, to CSV format.

use std::collections::HashMap;
use std::io::Write;

use crate::error::LedgerResult;
use crate::models::Money;
use crate::reports::activity::UNKNOWN_GROUP;
use crate::reports::SummaryReport;
use crate::storage::StoreState;

/// Export every expense, in the order it was logged
///
/// Shares are written as `member=amount` pairs separated by `;`.
pub fn export_expenses_csv<W: Write>(state: &StoreState, writer: W) -> LedgerResult<()> {
    let group_names: HashMap<_, _> = state
        .groups
        .iter()
        .map(|g| (&g.id, g.name.as_str()))
        .collect();

    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record([
        "ID",
        "Created",
        "Group",
        "Title",
        "Description",
        "Category",
        "Amount",
        "Paid By",
        "Split",
    ])?;

    for expense in &state.expenses {
        let group = group_names
            .get(&expense.group_id)
            .copied()
            .unwrap_or(UNKNOWN_GROUP);
        let split = expense
            .split_between
            .iter()
            .map(|(member, share)| format!("{}={:.2}", member, share.value()))
            .collect::<Vec<_>>()
            .join(";");

        let created = expense.created_at.format("%Y-%m-%d %H:%M:%S").to_string();
        let amount = format!("{:.2}", expense.amount.value());
        let record: [&str; 9] = [
            expense.id.as_str(),
            &created,
            group,
            &expense.title,
            expense.description.as_deref().unwrap_or(""),
            &expense.category,
            &amount,
            &expense.paid_by,
            &split,
        ];
        csv.write_record(record)?;
    }

    csv.flush()?;
    Ok(())
}

/// Export a summary: one row per category, one per group, then the total
///
/// Spending against deleted groups is written as a single group row named
/// after [`UNKNOWN_GROUP`].
pub fn export_summary_csv<W: Write>(report: &SummaryReport, writer: W) -> LedgerResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(["Section", "Name", "Amount", "Expense Count", "Percentage"])?;

    let row = |section: &str, name: &str, total: Money, count: usize| {
        [
            section.to_string(),
            name.to_string(),
            format!("{:.2}", total.value()),
            count.to_string(),
            format!("{:.2}", total.percentage_of(report.total_spend)),
        ]
    };

    for category in &report.categories {
        csv.write_record(row(
            "Category",
            &category.category,
            category.total,
            category.expense_count,
        ))?;
    }

    for group in &report.groups {
        csv.write_record(row(
            "Group",
            &group.group_name,
            group.total,
            group.expense_count,
        ))?;
    }
    if report.unassigned_count > 0 {
        csv.write_record(row(
            "Group",
            UNKNOWN_GROUP,
            report.unassigned_total,
            report.unassigned_count,
        ))?;
    }

    csv.write_record(row(
        "Total",
        "All expenses",
        report.total_spend,
        report.expense_count,
    ))?;

    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Group, GroupId, NewExpense, NewGroup, Split};

    fn sample_state() -> StoreState {
        let trip = Group::new(NewGroup::new("Trip", vec!["Alice".into(), "Bob".into()]));
        let dinner = Expense::new(NewExpense {
            group_id: trip.id.clone(),
            title: "Dinner, late".into(),
            description: Some("with \"friends\"".into()),
            amount: Money::new(40.0),
            paid_by: "Alice".into(),
            split_between: Split::equal(Money::new(40.0), &trip.members),
            category: "Food & Drinks".into(),
        });
        let orphan = Expense::new(NewExpense {
            group_id: GroupId::from_raw("gone"),
            title: "Taxi".into(),
            description: None,
            amount: Money::new(12.5),
            paid_by: "Zed".into(),
            split_between: Split::default(),
            category: "Transportation".into(),
        });
        StoreState {
            groups: vec![trip],
            expenses: vec![dinner, orphan],
        }
    }

    #[test]
    fn test_export_expenses_csv() {
        let mut output = Vec::new();
        export_expenses_csv(&sample_state(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID,Created,Group,Title"));
        assert!(lines[1].contains("\"Dinner, late\""));
        assert!(lines[1].contains("\"with \"\"friends\"\"\""));
        assert!(lines[1].contains("40.00,Alice,Alice=20.00;Bob=20.00"));
        assert!(lines[2].contains(UNKNOWN_GROUP));
    }

    #[test]
    fn test_export_summary_csv() {
        let report = SummaryReport::generate(&sample_state());
        let mut output = Vec::new();
        export_summary_csv(&report, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Section,Name,Amount,Expense Count,Percentage",
                "Category,Food & Drinks,40.00,1,76.19",
                "Category,Transportation,12.50,1,23.81",
                "Group,Trip,40.00,1,76.19",
                "Group,Unknown Group,12.50,1,23.81",
                "Total,All expenses,52.50,2,100.00",
            ]
        );
    }

    #[test]
    fn test_export_summary_csv_when_empty() {
        let report = SummaryReport::generate(&StoreState::default());
        let mut output = Vec::new();
        export_summary_csv(&report, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert_eq!(
            text.lines().last(),
            Some("Total,All expenses,0.00,0,0.00")
        );
    }
}
