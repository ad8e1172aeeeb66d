//! Expense CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_expense_list;
use crate::error::LedgerResult;
use crate::services::{ExpenseDraft, ExpenseService, GroupService};
use crate::storage::{ExpenseStore, KeyValueStore};
use crate::validation::parse_amount;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Log an expense, split equally across the group
    Add {
        /// Group name or ID
        group: String,
        /// What the money was spent on
        title: String,
        /// Amount (e.g. 40 or 12.50)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Member who paid
        #[arg(short, long)]
        paid_by: String,
        /// Category label
        #[arg(short, long, default_value = "Food & Drinks")]
        category: String,
        /// Optional note
        #[arg(short, long)]
        description: Option<String>,
    },
    /// List expenses, newest first
    List {
        /// Only show expenses of this group (name or ID)
        #[arg(short, long)]
        group: Option<String>,
    },
}

/// Handle an expense command
pub async fn handle_expense_command<S: KeyValueStore>(
    store: &ExpenseStore<S>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> LedgerResult<()> {
    let service = ExpenseService::new(store);

    match cmd {
        ExpenseCommands::Add {
            group,
            title,
            amount,
            paid_by,
            category,
            description,
        } => {
            let amount = parse_amount(&amount)?;
            let expense = service
                .create(ExpenseDraft {
                    group,
                    title,
                    amount,
                    paid_by,
                    category,
                    description,
                })
                .await?;

            println!(
                "Added expense: {} {}",
                expense.title,
                expense.amount.format_with_symbol(&settings.currency_symbol)
            );
            for (member, share) in expense.split_between.iter() {
                println!(
                    "  {:<16} {}",
                    member,
                    share.format_with_symbol(&settings.currency_symbol)
                );
            }
        }
        ExpenseCommands::List { group } => {
            let expenses = match group {
                Some(identifier) => {
                    let group = GroupService::new(store).resolve(&identifier)?;
                    service.list_for_group(&group.id)?
                }
                None => service.list()?,
            };

            println!(
                "{}",
                format_expense_list(&expenses, &settings.currency_symbol, &settings.date_format)
            );
        }
    }

    Ok(())
}
