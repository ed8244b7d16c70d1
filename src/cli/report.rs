//! Report CLI commands
//!
//! Implements CLI commands for monthly reports and export.

use std::fs::File;
use std::io;

use clap::Subcommand;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{ExpenseEntry, IncomeEntry};
use crate::reports::aggregate::month_key;
use crate::reports::{build_monthly_reports, export_month_csv, render_monthly_report, MonthlyReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Summary line for every month with activity
    List,

    /// Full report for one month
    Show {
        /// Month to report on (YYYY-MM, defaults to the most recent
        /// month with activity)
        month: Option<String>,
    },

    /// Export one month's entries as CSV
    Export {
        /// Month to export (YYYY-MM, defaults to the most recent month
        /// with activity)
        month: Option<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Handle a report command
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> TrackerResult<()> {
    let expenses = storage.expenses.all()?;
    let income = storage.income.all()?;
    let reports = build_monthly_reports(&expenses, &income);

    match cmd {
        ReportCommands::List => {
            if reports.is_empty() {
                println!("No entries recorded yet.");
                return Ok(());
            }

            println!(
                "{:<9} {:>12} {:>12} {:>12}",
                "Month", "Expense", "Income", "Savings"
            );
            println!("{}", "-".repeat(48));
            for report in &reports {
                println!(
                    "{:<9} {:>12} {:>12} {:>12}",
                    report.month,
                    report.total_expense.to_string(),
                    report.total_income.to_string(),
                    report.savings.to_string()
                );
            }
        }

        ReportCommands::Show { month } => {
            let report = pick_report(&reports, month.as_deref())?;
            let (month_expenses, month_income) =
                entries_for_month(&expenses, &income, &report.month);
            print!(
                "{}",
                render_monthly_report(report, &month_expenses, &month_income)
            );
        }

        ReportCommands::Export { month, output } => {
            let report = pick_report(&reports, month.as_deref())?;
            let (month_expenses, month_income) =
                entries_for_month(&expenses, &income, &report.month);

            match output {
                Some(path) => {
                    let mut file = File::create(&path)
                        .map_err(|e| TrackerError::Export(format!("{}: {}", path, e)))?;
                    export_month_csv(&mut file, report, &month_expenses, &month_income)?;
                    println!("Exported {} to {}", report.month, path);
                }
                None => {
                    let stdout = io::stdout();
                    let mut handle = stdout.lock();
                    export_month_csv(&mut handle, report, &month_expenses, &month_income)?;
                }
            }
        }
    }

    Ok(())
}

/// Find the requested month's report, or the most recent one
fn pick_report<'a>(
    reports: &'a [MonthlyReport],
    month: Option<&str>,
) -> TrackerResult<&'a MonthlyReport> {
    match month {
        Some(month) => reports
            .iter()
            .find(|r| r.month == month)
            .ok_or_else(|| TrackerError::NotFound {
                entity_type: "Report",
                identifier: month.to_string(),
            }),
        None => reports.first().ok_or_else(|| TrackerError::NotFound {
            entity_type: "Report",
            identifier: "no entries recorded yet".to_string(),
        }),
    }
}

/// Split out the entries belonging to one month
fn entries_for_month(
    expenses: &[ExpenseEntry],
    income: &[IncomeEntry],
    month: &str,
) -> (Vec<ExpenseEntry>, Vec<IncomeEntry>) {
    let month_expenses = expenses
        .iter()
        .filter(|e| month_key(e.date) == month)
        .cloned()
        .collect();
    let month_income = income
        .iter()
        .filter(|i| month_key(i.date) == month)
        .cloned()
        .collect();
    (month_expenses, month_income)
}
