//! Income service
//!
//! Named commands over the income collection, write-through like the
//! expense service.

use crate::error::TrackerResult;
use crate::models::{IncomeDraft, IncomeEntry, IncomeId};
use crate::storage::Storage;

/// Service for income management
pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    /// Create a new income service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate a draft and prepend it to the collection
    pub fn add(&self, draft: IncomeDraft) -> TrackerResult<IncomeEntry> {
        let entry = draft.validate()?;

        self.storage.income.insert_front(entry.clone())?;
        self.storage.income.save()?;

        Ok(entry)
    }

    /// Delete an income entry by ID. Deleting an unknown ID leaves the
    /// collection unchanged and returns false.
    pub fn delete(&self, id: IncomeId) -> TrackerResult<bool> {
        let removed = self.storage.income.remove(id)?;
        if removed {
            self.storage.income.save()?;
        }
        Ok(removed)
    }

    /// Remove all income entries
    pub fn clear(&self) -> TrackerResult<()> {
        self.storage.income.clear()?;
        self.storage.income.save()
    }

    /// List all income entries, newest first
    pub fn list(&self) -> TrackerResult<Vec<IncomeEntry>> {
        self.storage.income.all()
    }
}
