//! Income repository for JSON storage
//!
//! Same shape as the expense repository: an ordered, newest-first Vec
//! persisted to income.json as a bare JSON array.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrackerError;
use crate::models::{IncomeEntry, IncomeId};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for income persistence
pub struct IncomeRepository {
    path: PathBuf,
    entries: RwLock<Vec<IncomeEntry>>,
}

impl IncomeRepository {
    /// Create a new income repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Load income entries from disk. Missing or corrupt files load as
    /// empty.
    pub fn load(&self) -> Result<(), TrackerError> {
        let loaded: Vec<IncomeEntry> = read_json_or_default(&self.path)?;

        let mut entries = self
            .entries
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *entries = loaded;
        Ok(())
    }

    /// Save income entries to disk in their in-memory order
    pub fn save(&self) -> Result<(), TrackerError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*entries)
    }

    /// Get all income entries, newest first
    pub fn all(&self) -> Result<Vec<IncomeEntry>, TrackerError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.clone())
    }

    /// Prepend a new income entry
    pub fn insert_front(&self, entry: IncomeEntry) -> Result<(), TrackerError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        entries.insert(0, entry);
        Ok(())
    }

    /// Remove an income entry by ID. Removing an unknown ID is a no-op
    /// returning false.
    pub fn remove(&self, id: IncomeId) -> Result<bool, TrackerError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = entries.len();
        entries.retain(|e| e.id != id);
        Ok(entries.len() < before)
    }

    /// Remove all income entries
    pub fn clear(&self) -> Result<(), TrackerError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        entries.clear();
        Ok(())
    }

    /// Count income entries
    pub fn count(&self) -> Result<usize, TrackerError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.len())
    }
}
