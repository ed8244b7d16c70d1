//! Error types for spendlog
//!
//! Defines the crate-wide error hierarchy using thiserror, plus the
//! validation error kinds surfaced when an entry is rejected on admission.

use thiserror::Error;

/// Validation failures for candidate entries.
///
/// Checks run in a fixed order (amount, category/source, payment mode,
/// date), so the variant always names the first violated rule. All of
/// these are user-facing and recoverable; the store is left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Amount was not a number or was not greater than zero
    #[error("Enter a valid amount greater than 0")]
    InvalidAmount,

    /// No category was chosen for an expense
    #[error("Pick a category")]
    MissingCategory,

    /// No payment mode was chosen for an expense
    #[error("Pick a payment mode")]
    MissingPaymentMode,

    /// No date was given
    #[error("Pick a date")]
    MissingDate,

    /// No source was chosen for an income entry
    #[error("Pick a source")]
    MissingSource,
}

/// The main error type for spendlog operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors (lock poisoning, unwritable data dir, ...)
    #[error("Storage error: {0}")]
    Storage(String),

    /// An entry was rejected by the validator
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Unusable command-line input (bad ID, ambiguous prefix, ...)
    #[error("Invalid input: {0}")]
    Input(String),
}

impl TrackerError {
    /// Create a "not found" error for expense entries
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for income entries
    pub fn income_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Income",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for spendlog operations
pub type TrackerResult<T> = Result<T, TrackerError>;
