//! Group CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_group_details, format_group_list};
use crate::error::LedgerResult;
use crate::services::GroupService;
use crate::storage::{ExpenseStore, KeyValueStore};

/// Group subcommands
#[derive(Subcommand, Debug)]
pub enum GroupCommands {
    /// Create a new group
    Add {
        /// Group name
        name: String,
        /// Member name (repeat for each member, at least two)
        #[arg(short, long = "member", required = true)]
        members: Vec<String>,
    },
    /// List all groups
    List,
    /// Show group details
    Show {
        /// Group name or ID
        group: String,
    },
}

/// Handle a group command
pub async fn handle_group_command<S: KeyValueStore>(
    store: &ExpenseStore<S>,
    settings: &Settings,
    cmd: GroupCommands,
) -> LedgerResult<()> {
    let service = GroupService::new(store);

    match cmd {
        GroupCommands::Add { name, members } => {
            let group = service.create(&name, &members).await?;
            println!("Created group: {} ({})", group.name, group.id);
            println!("  Members: {}", group.members.join(", "));
        }
        GroupCommands::List => {
            let groups = service.list()?;
            let expenses = store.expenses()?;
            print!(
                "{}",
                format_group_list(
                    &groups,
                    &expenses,
                    &settings.currency_symbol,
                    &settings.date_format
                )
            );
            println!();
        }
        GroupCommands::Show { group } => {
            let group = service.resolve(&group)?;
            let expenses = store.expenses_for_group(&group.id)?;
            print!(
                "{}",
                format_group_details(
                    &group,
                    &expenses,
                    &settings.currency_symbol,
                    &settings.date_format
                )
            );
        }
    }

    Ok(())
}
