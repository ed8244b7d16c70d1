//! Monthly report builder
//!
//! Assembles one report per calendar month present in either collection:
//! expense and income totals, cash-flow savings, and the top category
//! and source for the month.

use std::collections::BTreeSet;

use crate::models::{Category, ExpenseEntry, IncomeEntry, IncomeSource, Money};

use super::aggregate::{month_key, sum_amounts, top_total, totals_by};

/// Aggregated figures for one calendar month
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// "YYYY-MM" month key
    pub month: String,
    /// Sum of the month's expenses
    pub total_expense: Money,
    /// Sum of the month's income
    pub total_income: Money,
    /// Income minus savings-eligible spend (credit-card expenses are
    /// excluded because they are not an immediate cash outflow)
    pub savings: Money,
    /// Category with the greatest total, if any expense exists
    pub top_category: Option<(Category, Money)>,
    /// Source with the greatest total, if any income exists
    pub top_source: Option<(IncomeSource, Money)>,
}

impl MonthlyReport {
    /// Build the report for one month from pre-filtered collections
    fn for_month(month: String, expenses: &[ExpenseEntry], income: &[IncomeEntry]) -> Self {
        let total_expense = sum_amounts(expenses);
        let total_income = sum_amounts(income);

        let cash_spend: Money = expenses
            .iter()
            .filter(|e| e.is_savings_eligible())
            .map(|e| e.amount)
            .sum();
        let savings = total_income - cash_spend;

        let top_category = top_total(&totals_by(expenses, |e| e.category));
        let top_source = top_total(&totals_by(income, |e| e.source));

        Self {
            month,
            total_expense,
            total_income,
            savings,
            top_category,
            top_source,
        }
    }
}

/// Build one report per distinct month in either collection, most
/// recent month first. A month present in only one collection still
/// produces a report; the missing side totals zero with no top entity.
pub fn build_monthly_reports(
    expenses: &[ExpenseEntry],
    income: &[IncomeEntry],
) -> Vec<MonthlyReport> {
    let months: BTreeSet<String> = expenses
        .iter()
        .map(|e| month_key(e.date))
        .chain(income.iter().map(|i| month_key(i.date)))
        .collect();

    months
        .into_iter()
        .rev()
        .map(|month| {
            let month_expenses: Vec<ExpenseEntry> = expenses
                .iter()
                .filter(|e| month_key(e.date) == month)
                .cloned()
                .collect();
            let month_income: Vec<IncomeEntry> = income
                .iter()
                .filter(|i| month_key(i.date) == month)
                .cloned()
                .collect();
            MonthlyReport::for_month(month, &month_expenses, &month_income)
        })
        .collect()
}
