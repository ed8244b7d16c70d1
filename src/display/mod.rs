//! Terminal display formatting
//!
//! String formatting for entry lists and day groups, consumed by the
//! CLI handlers.

use crate::models::{ExpenseEntry, IncomeEntry};
use crate::reports::DayGroup;

/// Format a single expense for display
pub fn format_expense_row(entry: &ExpenseEntry) -> String {
    let description = if entry.description.is_empty() {
        "—".to_string()
    } else {
        truncate(&entry.description, 30)
    };

    format!(
        "{}  {}  {:<13} {:<13} {:>10}  {}",
        entry.id,
        entry.date,
        entry.category.to_string(),
        entry.payment_mode.to_string(),
        entry.amount.to_string(),
        description
    )
}

/// Format a list of expenses as a table
pub fn format_expense_table(entries: &[ExpenseEntry]) -> String {
    if entries.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:<13} {:<13} {:>10}  {}\n",
        "ID", "Date", "Category", "Payment", "Amount", "Note"
    ));
    output.push_str(&"-".repeat(78));
    output.push('\n');
    for entry in entries {
        output.push_str(&format_expense_row(entry));
        output.push('\n');
    }
    output
}

/// Format a list of income entries as a table
pub fn format_income_table(entries: &[IncomeEntry]) -> String {
    if entries.is_empty() {
        return "No income recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:<13} {:>10}  {}\n",
        "ID", "Date", "Source", "Amount", "Note"
    ));
    output.push_str(&"-".repeat(64));
    output.push('\n');
    for entry in entries {
        let note = if entry.note.is_empty() {
            "—".to_string()
        } else {
            truncate(&entry.note, 30)
        };
        output.push_str(&format!(
            "{}  {}  {:<13} {:>10}  {}\n",
            entry.id,
            entry.date,
            entry.source.to_string(),
            entry.amount.to_string(),
            note
        ));
    }
    output
}

/// Format day groups with per-day subtotals
pub fn format_day_groups(groups: &[DayGroup]) -> String {
    if groups.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    for group in groups {
        output.push_str(&format!("{}  ({})\n", group.date, group.total));
        for entry in &group.items {
            output.push_str(&format!(
                "    {:<13} {:<13} {:>10}  {}\n",
                entry.category.to_string(),
                entry.payment_mode.to_string(),
                entry.amount.to_string(),
                truncate(&entry.description, 30)
            ));
        }
    }
    output
}

/// Truncate a string to a maximum length, adding an ellipsis
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseId, Money, PaymentMode};

    fn entry(description: &str) -> ExpenseEntry {
        ExpenseEntry {
            id: ExpenseId::new(),
            date: "2024-01-05".parse().unwrap(),
            category: Category::Food,
            payment_mode: PaymentMode::Cash,
            amount: Money::from_cents(10000),
            description: description.into(),
        }
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[]), "No expenses found.\n");
    }

    #[test]
    fn test_row_contains_fields() {
        let row = format_expense_row(&entry("lunch"));
        assert!(row.contains("2024-01-05"));
        assert!(row.contains("Food"));
        assert!(row.contains("$100.00"));
        assert!(row.contains("lunch"));
    }

    #[test]
    fn test_empty_description_shows_dash() {
        let row = format_expense_row(&entry(""));
        assert!(row.contains('—'));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        let long = truncate("a very long description indeed", 10);
        assert!(long.chars().count() <= 10);
        assert!(long.ends_with('…'));
    }
}
