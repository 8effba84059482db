//! Aggregations over the transaction and budget stores.
//!
//! Each aggregation comes as a pure function over already-loaded rows plus a
//! small computer type that loads those rows from the database first.

pub mod budget_summary;
pub mod dashboard;
pub mod error;
pub mod insights;
pub mod month;

pub use budget_summary::{BudgetSummaryComputer, deviation_percent, summarize};
pub use dashboard::{DashboardComputer, dashboard_summary};
pub use error::{ComputeError, Result};
pub use insights::budget_insights;
pub use month::Month;
