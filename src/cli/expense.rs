//! Expense CLI commands
//!
//! Implements CLI commands for recording and browsing expenses.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::{format_day_groups, format_expense_table};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, ExpenseDraft, ExpenseFilter, ExpenseId, PaymentMode, SortKey};
use crate::reports::group_by_day;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g., "45" or "45.99")
        amount: String,

        /// Spending category
        #[arg(short, long)]
        category: Category,

        /// Payment mode used
        #[arg(short = 'm', long = "mode")]
        payment_mode: PaymentMode,

        /// Expense date (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,

        /// What the money went to
        #[arg(long, default_value = "")]
        description: String,
    },

    /// List expenses, optionally filtered and sorted
    List {
        /// Search text matched against description, category, and
        /// payment mode
        #[arg(short, long)]
        search: Option<String>,

        /// Only this category
        #[arg(short, long)]
        category: Option<Category>,

        /// Only this payment mode
        #[arg(short = 'm', long = "mode")]
        payment_mode: Option<PaymentMode>,

        /// Only dates on or after (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Only dates on or before (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Sort order
        #[arg(long, value_enum, default_value_t = SortKey::DateDesc)]
        sort: SortKey,

        /// Group the listing by date with per-day subtotals
        #[arg(short, long)]
        grouped: bool,
    },

    /// Edit an existing expense
    Edit {
        /// Expense ID (as shown by 'expense list')
        id: String,

        /// New amount
        #[arg(short, long)]
        amount: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<Category>,

        /// New payment mode
        #[arg(short = 'm', long = "mode")]
        payment_mode: Option<PaymentMode>,

        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID (as shown by 'expense list')
        id: String,
    },

    /// Delete all expenses
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command(storage: &Storage, cmd: ExpenseCommands) -> TrackerResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            payment_mode,
            date,
            description,
        } => {
            let entry = service.add(ExpenseDraft {
                amount,
                category: Some(category),
                payment_mode: Some(payment_mode),
                date: Some(date),
                description,
            })?;

            println!(
                "Added expense {}: {} on {} ({}, {})",
                entry.id, entry.amount, entry.date, entry.category, entry.payment_mode
            );
        }

        ExpenseCommands::List {
            search,
            category,
            payment_mode,
            from,
            to,
            sort,
            grouped,
        } => {
            let mut filter = ExpenseFilter::new().sort_by(sort);
            if let Some(search) = search {
                filter = filter.query(search);
            }
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(payment_mode) = payment_mode {
                filter = filter.payment_mode(payment_mode);
            }
            if let Some(from) = from {
                filter = filter.from_date(from);
            }
            if let Some(to) = to {
                filter = filter.to_date(to);
            }

            let entries = service.list(&filter)?;
            if grouped {
                print!("{}", format_day_groups(&group_by_day(&entries)));
            } else {
                print!("{}", format_expense_table(&entries));
            }
        }

        ExpenseCommands::Edit {
            id,
            amount,
            category,
            payment_mode,
            date,
            description,
        } => {
            let id = resolve_expense_id(&service, &id)?;
            let existing = service
                .get(id)?
                .ok_or_else(|| TrackerError::expense_not_found(id.to_string()))?;

            // Unspecified fields keep their current value
            let cents = existing.amount.cents();
            let draft = ExpenseDraft {
                amount: amount.unwrap_or_else(|| format!("{}.{:02}", cents / 100, cents % 100)),
                category: Some(category.unwrap_or(existing.category)),
                payment_mode: Some(payment_mode.unwrap_or(existing.payment_mode)),
                date: Some(date.unwrap_or(existing.date)),
                description: description.unwrap_or(existing.description),
            };

            let updated = service.update(id, draft)?;
            println!(
                "Updated expense {}: {} on {} ({}, {})",
                updated.id, updated.amount, updated.date, updated.category, updated.payment_mode
            );
        }

        ExpenseCommands::Delete { id } => {
            let id = resolve_expense_id(&service, &id)?;
            if service.delete(id)? {
                println!("Deleted expense {}", id);
            } else {
                println!("No expense found with ID {}", id);
            }
        }

        ExpenseCommands::Clear { yes } => {
            if !yes {
                println!("This deletes every expense. Re-run with --yes to confirm.");
                return Ok(());
            }
            let count = storage.expenses.count()?;
            service.clear()?;
            println!("Deleted {} expense(s)", count);
        }
    }

    Ok(())
}

/// Resolve a user-supplied ID string to a stored expense ID.
///
/// Accepts a full UUID or the short prefixed form shown in listings.
fn resolve_expense_id(service: &ExpenseService, input: &str) -> TrackerResult<ExpenseId> {
    if let Ok(id) = input.parse::<ExpenseId>() {
        return Ok(id);
    }

    // Short form: match against the display prefix of stored entries
    let matches: Vec<ExpenseId> = service
        .list(&ExpenseFilter::new())?
        .iter()
        .map(|e| e.id)
        .filter(|id| id.to_string().starts_with(input))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(TrackerError::expense_not_found(input.to_string())),
        _ => Err(TrackerError::Input(format!(
            "ID prefix '{}' matches more than one expense",
            input
        ))),
    }
}
