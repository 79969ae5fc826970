use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use tally::audit::AuditLogger;
use tally::cli::{
    handle_add, handle_delete, handle_edit, handle_list, handle_summary, AddArgs, DeleteArgs,
    EditArgs, ListArgs,
};
use tally::config::paths::TallyPaths;
use tally::services::Ledger;
use tally::storage::ExpenseRepository;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Command-line personal expense tracker",
    long_about = "tally is a command-line personal expense tracker. It records \
                  what you spend into a plain JSON file and answers how much \
                  went where with per-category and per-month summaries."
)]
struct Cli {
    /// Path to the expense file (overrides the default location)
    #[arg(long, global = true, env = "TALLY_FILE", value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List recorded expenses
    #[command(alias = "ls")]
    List(ListArgs),

    /// Edit an expense by its index
    Edit(EditArgs),

    /// Delete an expense by its index
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Show total spending by category and by month
    Summary,

    /// Show recent changes to the expense file
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store_path = resolve_store_path(cli.file)?;

    match cli.command {
        Some(Commands::Add(args)) => {
            let mut ledger = open_ledger(&store_path)?;
            handle_add(&mut ledger, args)?;
        }
        Some(Commands::List(args)) => {
            let ledger = open_ledger(&store_path)?;
            handle_list(&ledger, args)?;
        }
        Some(Commands::Edit(args)) => {
            let mut ledger = open_ledger(&store_path)?;
            handle_edit(&mut ledger, args)?;
        }
        Some(Commands::Delete(args)) => {
            let mut ledger = open_ledger(&store_path)?;
            handle_delete(&mut ledger, args)?;
        }
        Some(Commands::Summary) => {
            let ledger = open_ledger(&store_path)?;
            handle_summary(&ledger)?;
        }
        Some(Commands::Log { limit }) => {
            let audit = AuditLogger::for_store(&store_path);
            let entries = audit.read_recent(limit)?;

            if entries.is_empty() {
                println!("No audit entries found.");
            } else {
                for entry in &entries {
                    println!("{}", entry.format_human_readable());
                }
            }
        }
        Some(Commands::Config) => {
            let audit = AuditLogger::for_store(&store_path);

            println!("tally configuration");
            println!("===================");
            println!("Expense file: {}", store_path.display());
            println!("Audit log:    {}", audit.path().display());
            println!();
            println!(
                "Expense file exists: {}",
                if store_path.exists() { "yes" } else { "no" }
            );
        }
        None => {
            println!("tally - command-line personal expense tracker");
            println!();
            println!("Run 'tally --help' for usage information.");
            println!("Run 'tally add 12.50 lunch' to record your first expense.");
        }
    }

    Ok(())
}

/// Resolve the expense file location
///
/// An explicit `--file` (or `TALLY_FILE`) wins; otherwise the file lives
/// in the per-user config directory.
fn resolve_store_path(file: Option<PathBuf>) -> Result<PathBuf> {
    match file {
        Some(path) => Ok(path),
        None => {
            let paths = TallyPaths::new()?;
            Ok(paths.expenses_file())
        }
    }
}

fn open_ledger(store_path: &Path) -> Result<Ledger> {
    let repository = ExpenseRepository::new(store_path.to_path_buf());
    let audit = AuditLogger::for_store(store_path);
    Ok(Ledger::open(repository, Some(audit))?)
}
