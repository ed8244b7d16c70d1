//! Expense repository for JSON storage
//!
//! Holds the expense collection in memory, newest first, and persists it
//! to expenses.json as a bare JSON array. Insertion order is part of the
//! data model, so the backing store is an ordered Vec rather than a map.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrackerError;
use crate::models::{ExpenseEntry, ExpenseId};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    entries: RwLock<Vec<ExpenseEntry>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk. Missing or corrupt files load as empty.
    pub fn load(&self) -> Result<(), TrackerError> {
        let loaded: Vec<ExpenseEntry> = read_json_or_default(&self.path)?;

        let mut entries = self
            .entries
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *entries = loaded;
        Ok(())
    }

    /// Save expenses to disk in their in-memory order
    pub fn save(&self) -> Result<(), TrackerError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*entries)
    }

    /// Get all expenses, newest first
    pub fn all(&self) -> Result<Vec<ExpenseEntry>, TrackerError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.clone())
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<ExpenseEntry>, TrackerError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.iter().find(|e| e.id == id).cloned())
    }

    /// Prepend a new expense (newest-first insertion order)
    pub fn insert_front(&self, entry: ExpenseEntry) -> Result<(), TrackerError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        entries.insert(0, entry);
        Ok(())
    }

    /// Replace the entry with the given ID in place, keeping its position.
    /// Returns false if no entry has that ID.
    pub fn replace(&self, id: ExpenseId, entry: ExpenseEntry) -> Result<bool, TrackerError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match entries.iter_mut().find(|e| e.id == id) {
            Some(slot) => {
                *slot = entry;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove an expense by ID. Removing an unknown ID is a no-op
    /// returning false.
    pub fn remove(&self, id: ExpenseId) -> Result<bool, TrackerError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = entries.len();
        entries.retain(|e| e.id != id);
        Ok(entries.len() < before)
    }

    /// Remove all expenses
    pub fn clear(&self) -> Result<(), TrackerError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        entries.clear();
        Ok(())
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, TrackerError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, PaymentMode};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    fn entry(date: &str, cents: i64) -> ExpenseEntry {
        ExpenseEntry {
            id: ExpenseId::new(),
            date: date.parse().unwrap(),
            category: Category::Food,
            payment_mode: PaymentMode::Cash,
            amount: Money::from_cents(cents),
            description: String::new(),
        }
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_front_keeps_newest_first() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.insert_front(entry("2024-01-01", 100)).unwrap();
        repo.insert_front(entry("2024-01-02", 200)).unwrap();

        let all = repo.all().unwrap();
        assert_eq!(all[0].amount.cents(), 200);
        assert_eq!(all[1].amount.cents(), 100);
    }

    #[test]
    fn test_save_and_reload_preserves_order() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        for cents in [100, 200, 300] {
            repo.insert_front(entry("2024-01-01", cents)).unwrap();
        }
        repo.save().unwrap();

        let repo2 = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        repo2.load().unwrap();

        let all = repo2.all().unwrap();
        let cents: Vec<i64> = all.iter().map(|e| e.amount.cents()).collect();
        assert_eq!(cents, vec![300, 200, 100]);
    }

    #[test]
    fn test_persisted_payload_is_a_bare_array() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        repo.insert_front(entry("2024-01-01", 100)).unwrap();
        repo.save().unwrap();

        let raw = std::fs::read_to_string(temp_dir.path().join("expenses.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
    }

    #[test]
    fn test_corrupt_file_loads_as_empty() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(temp_dir.path().join("expenses.json"), "{{{ not json").unwrap();

        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_replace_keeps_position() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let target = entry("2024-01-02", 200);
        let id = target.id;
        repo.insert_front(entry("2024-01-01", 100)).unwrap();
        repo.insert_front(target).unwrap();
        repo.insert_front(entry("2024-01-03", 300)).unwrap();

        let mut replacement = entry("2024-01-02", 999);
        replacement.id = id;
        assert!(repo.replace(id, replacement).unwrap());

        let all = repo.all().unwrap();
        assert_eq!(all[1].amount.cents(), 999);
    }

    #[test]
    fn test_replace_unknown_id_returns_false() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert!(!repo.replace(ExpenseId::new(), entry("2024-01-01", 1)).unwrap());
    }

    #[test]
    fn test_remove_unknown_id_is_a_noop() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        repo.insert_front(entry("2024-01-01", 100)).unwrap();

        assert!(!repo.remove(ExpenseId::new()).unwrap());
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_clear() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        repo.insert_front(entry("2024-01-01", 100)).unwrap();
        repo.clear().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }
}
