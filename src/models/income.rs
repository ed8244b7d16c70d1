//! Income entry model
//!
//! Income records mirror expenses but carry a source instead of a
//! category and have no payment mode.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

use super::ids::IncomeId;
use super::money::Money;

/// Fixed set of income sources
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum IncomeSource {
    Salary,
    Freelance,
    Business,
    Investments,
    Gifts,
    Other,
}

impl IncomeSource {
    /// Human-readable name, as persisted and displayed
    pub fn name(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::Business => "Business",
            Self::Investments => "Investments",
            Self::Gifts => "Gifts",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for IncomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single income record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeEntry {
    /// Unique identifier
    pub id: IncomeId,

    /// Calendar date the income was received
    pub date: NaiveDate,

    /// Where the money came from
    pub source: IncomeSource,

    /// Amount received (always positive)
    pub amount: Money,

    /// Optional free-text note
    #[serde(default)]
    pub note: String,
}

/// Candidate income input
#[derive(Debug, Clone, Default)]
pub struct IncomeDraft {
    /// Raw amount text; must parse to a value greater than zero
    pub amount: String,
    pub source: Option<IncomeSource>,
    pub date: Option<NaiveDate>,
    pub note: String,
}

impl IncomeDraft {
    /// Validate the draft and admit it as an entry with a fresh ID.
    ///
    /// Check order: amount, source, date. The note is trimmed.
    pub fn validate(self) -> Result<IncomeEntry, ValidationError> {
        let amount = match Money::parse(&self.amount) {
            Ok(a) if a.is_positive() => a,
            _ => return Err(ValidationError::InvalidAmount),
        };
        let source = self.source.ok_or(ValidationError::MissingSource)?;
        let date = self.date.ok_or(ValidationError::MissingDate)?;

        Ok(IncomeEntry {
            id: IncomeId::new(),
            date,
            source,
            amount,
            note: self.note.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> IncomeDraft {
        IncomeDraft {
            amount: "2500.00".into(),
            source: Some(IncomeSource::Salary),
            date: NaiveDate::from_ymd_opt(2024, 1, 31),
            note: " January pay ".into(),
        }
    }

    #[test]
    fn test_valid_draft_is_admitted() {
        let entry = draft().validate().unwrap();
        assert_eq!(entry.amount.cents(), 250000);
        assert_eq!(entry.source, IncomeSource::Salary);
        assert_eq!(entry.note, "January pay");
    }

    #[test]
    fn test_amount_checked_before_source() {
        let d = IncomeDraft {
            amount: "nope".into(),
            source: None,
            ..draft()
        };
        assert_eq!(d.validate().unwrap_err(), ValidationError::InvalidAmount);
    }

    #[test]
    fn test_missing_source_and_date() {
        let d = IncomeDraft {
            source: None,
            ..draft()
        };
        assert_eq!(d.validate().unwrap_err(), ValidationError::MissingSource);

        let d = IncomeDraft {
            date: None,
            ..draft()
        };
        assert_eq!(d.validate().unwrap_err(), ValidationError::MissingDate);
    }

    #[test]
    fn test_serialization_round_trip() {
        let entry = draft().validate().unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""source":"Salary""#));

        let back: IncomeEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
