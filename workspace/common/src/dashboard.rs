use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Spending total for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonthlyTotal {
    /// Month rendered as `Jul-2025`
    pub month: String,
    pub total: Decimal,
}

/// Spending total for one category, ready for a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryTotal {
    pub name: String,
    pub value: Decimal,
    pub color: String,
}

/// Overview over every recorded transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Sum of all transaction amounts
    pub total: Decimal,
    /// Number of transactions
    pub count: usize,
    /// Category with the largest total, or `N/A` without transactions
    pub top_category: String,
    /// Most recent transaction date
    pub latest_date: Option<NaiveDate>,
    /// Totals per month in chronological order
    pub monthly: Vec<MonthlyTotal>,
    /// Totals per category, largest first
    pub by_category: Vec<CategoryTotal>,
}
