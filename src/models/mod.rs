//! Core data models for spendlog
//!
//! Expense and income entries, the fixed category/payment-mode/source
//! sets, the money type, and the expense filter.

pub mod expense;
pub mod filter;
pub mod ids;
pub mod income;
pub mod money;

pub use expense::{Category, ExpenseDraft, ExpenseEntry, PaymentMode};
pub use filter::{ExpenseFilter, SortKey};
pub use ids::{ExpenseId, IncomeId};
pub use income::{IncomeDraft, IncomeEntry, IncomeSource};
pub use money::Money;
