use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::cli::{
    handle_add, handle_categories, handle_delete, handle_export, handle_history, handle_list,
    handle_summary, AddArgs, ExportArgs, SummaryArgs,
};
use expense_ledger::config::{LedgerPaths, Settings};
use expense_ledger::models::RecordId;
use expense_ledger::services::LedgerStore;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal daily-expense ledger",
    long_about = "Record what you spend each day, browse and delete entries, \
                  and see totals per day and per category."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List all expenses
    #[command(alias = "ls")]
    List,

    /// Delete an expense by ID
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: RecordId,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Show total and per-category spending
    Summary(SummaryArgs),

    /// List the configured categories
    Categories,

    /// Show recent additions and deletions
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Export all expenses
    Export(ExportArgs),

    /// Write the default configuration file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("expense_ledger=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = LedgerStore::open(&paths, &settings)?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&store, &settings, args)?,
        Some(Commands::List) => handle_list(&store, &settings)?,
        Some(Commands::Delete { id, force }) => handle_delete(&store, &settings, id, force)?,
        Some(Commands::Summary(args)) => handle_summary(&store, &settings, args)?,
        Some(Commands::Categories) => handle_categories(&store),
        Some(Commands::History { count }) => handle_history(&store, count)?,
        Some(Commands::Export(args)) => handle_export(&store, args)?,
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!(
                    "Already initialized: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                println!("Configuration written to: {}", paths.settings_file().display());
                println!("Edit the \"categories\" list there to change expense categories.");
            }
        }
        Some(Commands::Config) => {
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Config file:  {}", paths.settings_file().display());
            println!("Records file: {}", paths.records_file().display());
            println!("Audit log:    {}", paths.audit_log().display());
            println!();
            println!("Categories:   {}", settings.categories.join(", "));
            println!("Currency:     {}", settings.currency_symbol);
            println!("Date format:  {}", settings.date_format);
        }
        None => {
            println!("Expense Ledger - personal daily-expense tracking");
            println!();
            println!("Run 'expense --help' for usage information.");
        }
    }

    Ok(())
}
