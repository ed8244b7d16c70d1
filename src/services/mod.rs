//! Service layer for spendlog
//!
//! Named commands over the storage layer. All mutation funnels through
//! these services: validate on admission, mutate, save before returning.

pub mod expense;
pub mod income;

pub use expense::ExpenseService;
pub use income::IncomeService;
