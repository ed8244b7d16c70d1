//! Expense filtering and sorting
//!
//! [`ExpenseFilter`] bundles the active filter criteria plus the sort
//! key. Unset fields are "no constraint". Filtering preserves the
//! collection's relative order; sorting afterwards is stable.

use std::fmt;

use chrono::NaiveDate;
use clap::ValueEnum;

use super::expense::{Category, ExpenseEntry, PaymentMode};

/// Sort orders for the expense list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    /// Newest first (default)
    #[default]
    DateDesc,
    /// Oldest first
    DateAsc,
    /// Amount: high to low
    AmountDesc,
    /// Amount: low to high
    AmountAsc,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DateDesc => "date-desc",
            Self::DateAsc => "date-asc",
            Self::AmountDesc => "amount-desc",
            Self::AmountAsc => "amount-asc",
        })
    }
}

/// Filter and sort criteria for the expense collection
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Case-insensitive substring search over description, category,
    /// and payment mode
    pub query: String,
    /// Exact category match
    pub category: Option<Category>,
    /// Exact payment-mode match
    pub payment_mode: Option<PaymentMode>,
    /// Inclusive lower date bound
    pub from_date: Option<NaiveDate>,
    /// Inclusive upper date bound
    pub to_date: Option<NaiveDate>,
    /// Sort order applied after filtering
    pub sort_by: SortKey,
}

impl ExpenseFilter {
    /// Create a new empty filter (matches everything, newest first)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search query
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Filter by category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Filter by payment mode
    pub fn payment_mode(mut self, payment_mode: PaymentMode) -> Self {
        self.payment_mode = Some(payment_mode);
        self
    }

    /// Set the inclusive lower date bound
    pub fn from_date(mut self, date: NaiveDate) -> Self {
        self.from_date = Some(date);
        self
    }

    /// Set the inclusive upper date bound
    pub fn to_date(mut self, date: NaiveDate) -> Self {
        self.to_date = Some(date);
        self
    }

    /// Set the sort order
    pub fn sort_by(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Whether an entry passes every enabled criterion
    pub fn matches(&self, entry: &ExpenseEntry) -> bool {
        if let Some(category) = self.category {
            if entry.category != category {
                return false;
            }
        }
        if let Some(payment_mode) = self.payment_mode {
            if entry.payment_mode != payment_mode {
                return false;
            }
        }
        if let Some(from) = self.from_date {
            if entry.date < from {
                return false;
            }
        }
        if let Some(to) = self.to_date {
            if entry.date > to {
                return false;
            }
        }

        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        entry.search_haystack().contains(&query)
    }

    /// Filter then sort a collection, leaving the input untouched.
    ///
    /// Filtering keeps the original relative order; the sort is stable,
    /// so equal keys also keep it.
    pub fn apply(&self, entries: &[ExpenseEntry]) -> Vec<ExpenseEntry> {
        let mut result: Vec<ExpenseEntry> = entries
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect();

        match self.sort_by {
            SortKey::DateDesc => result.sort_by(|a, b| b.date.cmp(&a.date)),
            SortKey::DateAsc => result.sort_by(|a, b| a.date.cmp(&b.date)),
            SortKey::AmountDesc => result.sort_by(|a, b| b.amount.cmp(&a.amount)),
            SortKey::AmountAsc => result.sort_by(|a, b| a.amount.cmp(&b.amount)),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};

    fn entry(date: &str, category: Category, mode: PaymentMode, cents: i64) -> ExpenseEntry {
        ExpenseEntry {
            id: ExpenseId::new(),
            date: date.parse().unwrap(),
            category,
            payment_mode: mode,
            amount: Money::from_cents(cents),
            description: String::new(),
        }
    }

    fn sample() -> Vec<ExpenseEntry> {
        vec![
            entry("2024-02-15", Category::Food, PaymentMode::Cash, 5000),
            entry("2024-01-31", Category::Travel, PaymentMode::Venmo, 3000),
            entry("2024-02-01", Category::Food, PaymentMode::CreditCard, 8000),
        ]
    }

    #[test]
    fn test_empty_filter_matches_all_newest_first() {
        let result = ExpenseFilter::new().apply(&sample());
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].date.to_string(), "2024-02-15");
        assert_eq!(result[2].date.to_string(), "2024-01-31");
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        // 2024-01-31 is excluded, 2024-02-15 is included
        let filter = ExpenseFilter::new()
            .from_date("2024-02-01".parse().unwrap())
            .to_date("2024-02-29".parse().unwrap());
        let result = filter.apply(&sample());
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|e| e.date.to_string().starts_with("2024-02")));
    }

    #[test]
    fn test_category_and_payment_mode_exact_match() {
        let result = ExpenseFilter::new()
            .category(Category::Food)
            .apply(&sample());
        assert_eq!(result.len(), 2);

        let result = ExpenseFilter::new()
            .category(Category::Food)
            .payment_mode(PaymentMode::Cash)
            .apply(&sample());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].amount.cents(), 5000);
    }

    #[test]
    fn test_query_searches_description_category_and_mode() {
        let mut entries = sample();
        entries[1].description = "train to Boston".into();

        let by_desc = ExpenseFilter::new().query("boston").apply(&entries);
        assert_eq!(by_desc.len(), 1);
        assert_eq!(by_desc[0].category, Category::Travel);

        let by_mode = ExpenseFilter::new().query("credit card").apply(&entries);
        assert_eq!(by_mode.len(), 1);

        // Whitespace-only queries are no constraint
        let all = ExpenseFilter::new().query("   ").apply(&entries);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let filter = ExpenseFilter::new().category(Category::Food);
        let once = filter.apply(&sample());
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_date_sorts_reverse_each_other() {
        let entries = sample();
        let asc = ExpenseFilter::new().sort_by(SortKey::DateAsc).apply(&entries);
        let mut desc = ExpenseFilter::new().sort_by(SortKey::DateDesc).apply(&entries);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_amount_sorts() {
        let result = ExpenseFilter::new()
            .sort_by(SortKey::AmountAsc)
            .apply(&sample());
        let cents: Vec<i64> = result.iter().map(|e| e.amount.cents()).collect();
        assert_eq!(cents, vec![3000, 5000, 8000]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_dates() {
        let mut entries = sample();
        entries[2].date = entries[0].date;

        let result = ExpenseFilter::new().sort_by(SortKey::DateDesc).apply(&entries);
        // Both 2024-02-15 entries keep their original relative order
        assert_eq!(result[0].amount.cents(), 5000);
        assert_eq!(result[1].amount.cents(), 8000);
    }
}
