use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use spendlog::cli::{handle_expense_command, handle_income_command, handle_report_command};
use spendlog::config::{paths::TrackerPaths, settings::Settings};
use spendlog::services::ExpenseService;
use spendlog::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Personal expense and income tracker",
    long_about = "spendlog tracks day-to-day expenses and income from the \
                  command line, with filtering, per-day totals, and monthly \
                  cash-flow reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(spendlog::cli::ExpenseCommands),

    /// Income management commands
    #[command(subcommand, alias = "inc")]
    Income(spendlog::cli::IncomeCommands),

    /// Monthly report commands
    #[command(subcommand)]
    Report(spendlog::cli::ReportCommands),

    /// Total spent on a single date
    Total {
        /// Date to total (YYYY-MM-DD)
        date: NaiveDate,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, cmd)?;
        }
        Some(Commands::Income(cmd)) => {
            handle_income_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, cmd)?;
        }
        Some(Commands::Total { date }) => {
            let service = ExpenseService::new(&storage);
            let total = service.daily_total(date)?;
            println!("Total spent on {}: {}", date, total);
        }
        Some(Commands::Config) => {
            println!("spendlog Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("spendlog - Personal expense and income tracker");
            println!();
            println!("Run 'spendlog --help' for usage information.");
            println!("Run 'spendlog expense add --help' to record your first expense.");
        }
    }

    Ok(())
}
