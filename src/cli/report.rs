//! Report CLI commands: activity, summary, balance and the audit trail

use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::display::format_activity;
use crate::error::LedgerResult;
use crate::reports::{ActivityFeed, GroupBalanceReport, SummaryReport};
use crate::services::GroupService;
use crate::storage::{ExpenseStore, KeyValueStore};

/// Print the activity feed
pub fn handle_activity_command<S: KeyValueStore>(
    store: &ExpenseStore<S>,
    settings: &Settings,
    limit: Option<usize>,
) -> LedgerResult<()> {
    let feed = ActivityFeed::generate(&store.snapshot()?, limit);
    print!(
        "{}",
        format_activity(&feed, &settings.currency_symbol, &settings.date_format)
    );
    println!();
    Ok(())
}

/// Print spending totals by category and group
pub fn handle_summary_command<S: KeyValueStore>(
    store: &ExpenseStore<S>,
    settings: &Settings,
) -> LedgerResult<()> {
    let report = SummaryReport::generate(&store.snapshot()?);
    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Print the total spend and net position of every member of a group
pub fn handle_balance_command<S: KeyValueStore>(
    store: &ExpenseStore<S>,
    settings: &Settings,
    group: &str,
) -> LedgerResult<()> {
    let group = GroupService::new(store).resolve(group)?;
    let report = GroupBalanceReport::generate(&store.snapshot()?, &group.id)?;
    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Print the newest audit log entries
pub fn handle_audit_command(
    logger: &AuditLogger,
    settings: &Settings,
    limit: usize,
) -> LedgerResult<()> {
    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No audit entries yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.describe(&settings.date_format));
    }
    Ok(())
}
