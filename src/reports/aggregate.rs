//! Pure aggregation functions over entry collections
//!
//! Everything here is a deterministic function of its input: sums,
//! key→total accumulators, top-entity selection, and day grouping.
//! Accumulation is a single linear pass into a BTreeMap, which also
//! makes iteration order (and therefore tie-breaking) deterministic.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{ExpenseEntry, IncomeEntry, Money};

/// Amount accessor shared by expense and income entries
pub trait Posting {
    fn amount(&self) -> Money;
}

impl Posting for ExpenseEntry {
    fn amount(&self) -> Money {
        self.amount
    }
}

impl Posting for IncomeEntry {
    fn amount(&self) -> Money {
        self.amount
    }
}

/// Sum of all entry amounts; zero for empty input
pub fn sum_amounts<T: Posting>(entries: &[T]) -> Money {
    entries.iter().map(Posting::amount).sum()
}

/// Accumulate per-key totals in one pass
pub fn totals_by<T, K, F>(entries: &[T], key: F) -> BTreeMap<K, Money>
where
    T: Posting,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut totals: BTreeMap<K, Money> = BTreeMap::new();
    for entry in entries {
        *totals.entry(key(entry)).or_default() += entry.amount();
    }
    totals
}

/// Items plus their total for one grouping key
#[derive(Debug, Clone)]
pub struct Group<T> {
    pub items: Vec<T>,
    pub total: Money,
}

/// Group entries by key, keeping each group's items in caller order
pub fn group_by<T, K, F>(entries: &[T], key: F) -> BTreeMap<K, Group<T>>
where
    T: Posting + Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut groups: BTreeMap<K, Group<T>> = BTreeMap::new();
    for entry in entries {
        let group = groups.entry(key(entry)).or_insert_with(|| Group {
            items: Vec::new(),
            total: Money::zero(),
        });
        group.total += entry.amount();
        group.items.push(entry.clone());
    }
    groups
}

/// The key with the strictly greatest total.
///
/// Ties keep the first key encountered (BTreeMap order, so the smallest
/// key). An empty map yields None.
pub fn top_total<K: Ord + Clone>(totals: &BTreeMap<K, Money>) -> Option<(K, Money)> {
    let mut best: Option<(&K, Money)> = None;
    for (key, &total) in totals {
        match best {
            Some((_, amount)) if total <= amount => {}
            _ => best = Some((key, total)),
        }
    }
    best.map(|(key, total)| (key.clone(), total))
}

/// Expenses for one calendar date
#[derive(Debug, Clone)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub items: Vec<ExpenseEntry>,
    pub total: Money,
}

/// Cluster expenses into per-date groups.
///
/// Input is re-sorted date-descending then amount-descending, so groups
/// come out newest first and each group's items run high to low.
pub fn group_by_day(expenses: &[ExpenseEntry]) -> Vec<DayGroup> {
    let mut sorted: Vec<ExpenseEntry> = expenses.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date).then(b.amount.cmp(&a.amount)));

    let mut groups: Vec<DayGroup> = Vec::new();
    for expense in sorted {
        match groups.last_mut() {
            Some(group) if group.date == expense.date => {
                group.total += expense.amount;
                group.items.push(expense);
            }
            _ => groups.push(DayGroup {
                date: expense.date,
                total: expense.amount,
                items: vec![expense],
            }),
        }
    }
    groups
}

/// "YYYY-MM" month key for a date
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Total spent on a single date
pub fn daily_total(expenses: &[ExpenseEntry], date: NaiveDate) -> Money {
    expenses
        .iter()
        .filter(|e| e.date == date)
        .map(|e| e.amount)
        .sum()
}
