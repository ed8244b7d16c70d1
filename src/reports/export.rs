//! Report export
//!
//! Renders one monthly report, together with that month's expense and
//! income entries, into a plain-text document or CSV rows. Consumers
//! pass collections already filtered to the report's month.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{ExpenseEntry, IncomeEntry};

use super::monthly::MonthlyReport;

/// Render a month's report as a human-readable text document
pub fn render_monthly_report(
    report: &MonthlyReport,
    expenses: &[ExpenseEntry],
    income: &[IncomeEntry],
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Monthly Report: {}\n", report.month));
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!("Total Expense: {}\n", report.total_expense));
    output.push_str(&format!("Total Income:  {}\n", report.total_income));
    output.push_str(&format!("Savings:       {}\n", report.savings));

    match &report.top_category {
        Some((category, amount)) => {
            output.push_str(&format!("Top Category:  {} ({})\n", category, amount));
        }
        None => output.push_str("Top Category:  none\n"),
    }
    match &report.top_source {
        Some((source, amount)) => {
            output.push_str(&format!("Top Source:    {} ({})\n", source, amount));
        }
        None => output.push_str("Top Source:    none\n"),
    }

    if !expenses.is_empty() {
        output.push_str("\nExpenses\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for entry in expenses {
            output.push_str(&format!(
                "{}  {:<13} {:<13} {:>10}  {}\n",
                entry.date,
                entry.category.to_string(),
                entry.payment_mode.to_string(),
                entry.amount.to_string(),
                entry.description
            ));
        }
    }

    if !income.is_empty() {
        output.push_str("\nIncome\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for entry in income {
            output.push_str(&format!(
                "{}  {:<13} {:>10}  {}\n",
                entry.date,
                entry.source.to_string(),
                entry.amount.to_string(),
                entry.note
            ));
        }
    }

    output
}

/// Write a month's entries as CSV rows
pub fn export_month_csv<W: Write>(
    writer: &mut W,
    report: &MonthlyReport,
    expenses: &[ExpenseEntry],
    income: &[IncomeEntry],
) -> TrackerResult<()> {
    writeln!(writer, "Month,Kind,Date,Label,Payment Mode,Amount,Note")
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    for entry in expenses {
        writeln!(
            writer,
            "{},Expense,{},{},{},{:.2},{}",
            report.month,
            entry.date,
            entry.category,
            entry.payment_mode,
            entry.amount.cents() as f64 / 100.0,
            escape_csv(&entry.description)
        )
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    for entry in income {
        writeln!(
            writer,
            "{},Income,{},{},,{:.2},{}",
            report.month,
            entry.date,
            entry.source,
            entry.amount.cents() as f64 / 100.0,
            escape_csv(&entry.note)
        )
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Quote a CSV field if it contains a comma, quote, or newline
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
