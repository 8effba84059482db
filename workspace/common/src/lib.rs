//! Common transport-layer types shared between the HTTP API and the
//! terminal reports. These structs are the JSON shapes the handlers return,
//! so any consumer can deserialize API responses without duplicating them.

mod categories;
mod dashboard;
mod summary;

pub use categories::{CategoryInfo, FALLBACK_PALETTE, catalog};
pub use dashboard::{CategoryTotal, DashboardSummary, MonthlyTotal};
pub use summary::{BudgetInsight, BudgetStatus, BudgetSummaryRow, InsightKind};
