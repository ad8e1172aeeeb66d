use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use splitledger::audit::AuditLogger;
use splitledger::cli::{
    handle_activity_command, handle_audit_command, handle_balance_command,
    handle_expense_command, handle_export_command, handle_group_command, handle_summary_command,
    ExpenseCommands, ExportFormat, GroupCommands,
};
use splitledger::config::{LedgerPaths, Settings};
use splitledger::storage::{ExpenseStore, FileStore};

#[derive(Parser)]
#[command(
    name = "splitledger",
    version,
    about = "Split shared expenses equally within groups",
    long_about = "splitledger keeps track of what a group of people spend together. \
                  Every expense is split equally across the group, and balances show \
                  who is owed and who owes."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Group management commands
    #[command(subcommand)]
    Group(GroupCommands),

    /// Expense management commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Show recent expenses across all groups
    Activity {
        /// Number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show spending by category and group
    Summary,

    /// Show who is owed and who owes within a group
    Balance {
        /// Group name or ID
        group: String,
    },

    /// Export data as CSV or JSON
    Export {
        /// Export format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Export category and group totals instead of expenses (CSV only)
        #[arg(long)]
        summary: bool,
    },

    /// Show the newest entries of the audit log
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

impl Commands {
    /// Whether the command appends to the stored ledger
    fn writes(&self) -> bool {
        matches!(
            self,
            Commands::Group(GroupCommands::Add { .. })
                | Commands::Expense(ExpenseCommands::Add { .. })
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    paths.ensure_directories()?;

    let mut store = ExpenseStore::new(FileStore::new(paths.data_dir()));
    if settings.audit_enabled {
        store = store.with_audit_log(AuditLogger::new(paths.audit_log()));
    }
    // Adds rewrite whole collections; never write over a ledger that failed to load
    if let Err(err) = store.try_load_data().await {
        if cli.command.as_ref().is_some_and(Commands::writes) {
            return Err(err).context("Stored data could not be loaded; nothing was changed");
        }
        tracing::error!("Error loading data: {}", err);
    }

    match cli.command {
        Some(Commands::Group(cmd)) => {
            handle_group_command(&store, &settings, cmd).await?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&store, &settings, cmd).await?;
        }
        Some(Commands::Activity { limit }) => {
            handle_activity_command(&store, &settings, limit)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&store, &settings)?;
        }
        Some(Commands::Balance { group }) => {
            handle_balance_command(&store, &settings, &group)?;
        }
        Some(Commands::Export {
            format,
            output,
            summary,
        }) => {
            handle_export_command(&store, format, output, summary)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&AuditLogger::new(paths.audit_log()), &settings, limit)?;
        }
        Some(Commands::Config) => {
            println!("splitledger Configuration");
            println!("=========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Log level:       {}", settings.log_level);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!();
            println!("Ledger:");
            println!("  Groups:   {}", store.group_count()?);
            println!("  Expenses: {}", store.expense_count()?);
        }
        None => {
            println!("splitledger - shared expenses, split equally");
            println!();
            println!("Run 'splitledger --help' for usage information.");
        }
    }

    Ok(())
}
