//! Income CLI commands
//!
//! Implements CLI commands for recording income entries.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::format_income_table;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{IncomeDraft, IncomeId, IncomeSource};
use crate::services::IncomeService;
use crate::storage::Storage;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record a new income entry
    Add {
        /// Amount received (e.g., "5000" or "5000.00")
        amount: String,

        /// Where the money came from
        #[arg(short, long)]
        source: IncomeSource,

        /// Income date (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,

        /// Notes about this entry
        #[arg(short, long, default_value = "")]
        note: String,
    },

    /// List income entries, newest first
    List,

    /// Delete an income entry
    Delete {
        /// Income ID (as shown by 'income list')
        id: String,
    },

    /// Delete all income entries
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

/// Handle an income command
pub fn handle_income_command(storage: &Storage, cmd: IncomeCommands) -> TrackerResult<()> {
    let service = IncomeService::new(storage);

    match cmd {
        IncomeCommands::Add {
            amount,
            source,
            date,
            note,
        } => {
            let entry = service.add(IncomeDraft {
                amount,
                source: Some(source),
                date: Some(date),
                note,
            })?;

            println!(
                "Added income {}: {} on {} ({})",
                entry.id, entry.amount, entry.date, entry.source
            );
        }

        IncomeCommands::List => {
            let entries = service.list()?;
            print!("{}", format_income_table(&entries));
        }

        IncomeCommands::Delete { id } => {
            let id = resolve_income_id(&service, &id)?;
            if service.delete(id)? {
                println!("Deleted income {}", id);
            } else {
                println!("No income entry found with ID {}", id);
            }
        }

        IncomeCommands::Clear { yes } => {
            if !yes {
                println!("This deletes every income entry. Re-run with --yes to confirm.");
                return Ok(());
            }
            let count = storage.income.count()?;
            service.clear()?;
            println!("Deleted {} income entr(ies)", count);
        }
    }

    Ok(())
}

/// Resolve a user-supplied ID string to a stored income ID.
///
/// Accepts a full UUID or the short prefixed form shown in listings.
fn resolve_income_id(service: &IncomeService, input: &str) -> TrackerResult<IncomeId> {
    if let Ok(id) = input.parse::<IncomeId>() {
        return Ok(id);
    }

    let matches: Vec<IncomeId> = service
        .list()?
        .iter()
        .map(|e| e.id)
        .filter(|id| id.to_string().starts_with(input))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(TrackerError::income_not_found(input.to_string())),
        _ => Err(TrackerError::Input(format!(
            "ID prefix '{}' matches more than one income entry",
            input
        ))),
    }
}
