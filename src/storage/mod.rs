//! Storage layer for spendlog
//!
//! Two independent JSON stores (expenses, income) behind repositories,
//! with atomic whole-file writes. Mutating service commands save
//! synchronously, so a committed change survives an immediate exit.

pub mod expenses;
pub mod file_io;
pub mod income;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json_or_default, write_json_atomic};
pub use income::IncomeRepository;

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    paths: TrackerPaths,
    pub expenses: ExpenseRepository,
    pub income: IncomeRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrackerPaths) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            income: IncomeRepository::new(paths.income_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// Load both collections from disk
    pub fn load_all(&mut self) -> Result<(), TrackerError> {
        self.expenses.load()?;
        self.income.load()?;
        Ok(())
    }
}
