//! Reports and aggregation
//!
//! Pure functions that derive totals, groupings, and monthly reports
//! from the entry collections, plus export rendering.

pub mod aggregate;
pub mod export;
pub mod monthly;

pub use aggregate::{group_by_day, DayGroup, Posting};
pub use export::{export_month_csv, render_monthly_report};
pub use monthly::{build_monthly_reports, MonthlyReport};
