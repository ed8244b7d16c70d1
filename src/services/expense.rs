//! Expense service
//!
//! Named commands over the expense collection. Admission is
//! all-or-nothing: a draft that fails validation leaves the store
//! untouched. Every mutation saves the collection to disk before
//! returning (write-through).

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{ExpenseDraft, ExpenseEntry, ExpenseFilter, ExpenseId, Money};
use crate::reports::aggregate;
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate a draft and prepend it to the collection
    pub fn add(&self, draft: ExpenseDraft) -> TrackerResult<ExpenseEntry> {
        let entry = draft.validate()?;

        self.storage.expenses.insert_front(entry.clone())?;
        self.storage.expenses.save()?;

        Ok(entry)
    }

    /// Replace the entry with the given ID by a re-validated draft.
    ///
    /// The entry keeps its ID and its position in the collection.
    pub fn update(&self, id: ExpenseId, draft: ExpenseDraft) -> TrackerResult<ExpenseEntry> {
        let mut entry = draft.validate()?;
        entry.id = id;

        if !self.storage.expenses.replace(id, entry.clone())? {
            return Err(TrackerError::expense_not_found(id.to_string()));
        }
        self.storage.expenses.save()?;

        Ok(entry)
    }

    /// Delete an expense by ID. Deleting an unknown ID leaves the
    /// collection unchanged and returns false.
    pub fn delete(&self, id: ExpenseId) -> TrackerResult<bool> {
        let removed = self.storage.expenses.remove(id)?;
        if removed {
            self.storage.expenses.save()?;
        }
        Ok(removed)
    }

    /// Remove all expenses
    pub fn clear(&self) -> TrackerResult<()> {
        self.storage.expenses.clear()?;
        self.storage.expenses.save()
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> TrackerResult<Option<ExpenseEntry>> {
        self.storage.expenses.get(id)
    }

    /// List expenses, filtered and sorted
    pub fn list(&self, filter: &ExpenseFilter) -> TrackerResult<Vec<ExpenseEntry>> {
        let all = self.storage.expenses.all()?;
        Ok(filter.apply(&all))
    }

    /// Total spent on a single date
    pub fn daily_total(&self, date: NaiveDate) -> TrackerResult<Money> {
        let all = self.storage.expenses.all()?;
        Ok(aggregate::daily_total(&all, date))
    }
}
