//! Expense entry model
//!
//! An expense records a single spend: date, category, payment mode,
//! amount, and an optional description. Candidate input arrives as an
//! [`ExpenseDraft`] and is admitted through [`ExpenseDraft::validate`].

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

use super::ids::ExpenseId;
use super::money::Money;

/// Fixed set of expense categories
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum Category {
    Food,
    Travel,
    Rent,
    Shopping,
    Bills,
    Subscriptions,
    Health,
    Others,
}

impl Category {
    /// Human-readable name, as persisted and displayed
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Rent => "Rent",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Subscriptions => "Subscriptions",
            Self::Health => "Health",
            Self::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed set of payment modes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum PaymentMode {
    Cash,
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    PayPal,
    Venmo,
    Other,
}

impl PaymentMode {
    /// Human-readable name, as persisted and displayed
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::DebitCard => "Debit Card",
            Self::CreditCard => "Credit Card",
            Self::BankTransfer => "Bank Transfer",
            Self::PayPal => "PayPal",
            Self::Venmo => "Venmo",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Unique identifier
    pub id: ExpenseId,

    /// Calendar date of the spend
    pub date: NaiveDate,

    /// Expense category
    pub category: Category,

    /// How the expense was paid
    #[serde(rename = "paymentMode")]
    pub payment_mode: PaymentMode,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Optional free-text note
    #[serde(default)]
    pub description: String,
}

impl ExpenseEntry {
    /// Whether this expense counts against cash-based savings.
    ///
    /// Credit-card spend is excluded: it is not an immediate cash outflow.
    pub fn is_savings_eligible(&self) -> bool {
        !matches!(self.payment_mode, PaymentMode::CreditCard)
    }

    /// Lower-cased text searched by the filter query: description,
    /// category, and payment mode, space-joined and trimmed.
    pub fn search_haystack(&self) -> String {
        format!("{} {} {}", self.description, self.category, self.payment_mode)
            .to_lowercase()
            .trim()
            .to_string()
    }
}

/// Candidate expense input, as it comes off a form or the CLI
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    /// Raw amount text; must parse to a value greater than zero
    pub amount: String,
    pub category: Option<Category>,
    pub payment_mode: Option<PaymentMode>,
    pub date: Option<NaiveDate>,
    pub description: String,
}

impl ExpenseDraft {
    /// Validate the draft and admit it as an entry with a fresh ID.
    ///
    /// Checks run in a fixed order so the first violation is the one
    /// reported: amount, category, payment mode, date. The description
    /// is trimmed on the way in.
    pub fn validate(self) -> Result<ExpenseEntry, ValidationError> {
        let amount = match Money::parse(&self.amount) {
            Ok(a) if a.is_positive() => a,
            _ => return Err(ValidationError::InvalidAmount),
        };
        let category = self.category.ok_or(ValidationError::MissingCategory)?;
        let payment_mode = self
            .payment_mode
            .ok_or(ValidationError::MissingPaymentMode)?;
        let date = self.date.ok_or(ValidationError::MissingDate)?;

        Ok(ExpenseEntry {
            id: ExpenseId::new(),
            date,
            category,
            payment_mode,
            amount,
            description: self.description.trim().to_string(),
        })
    }
}
