use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Whether actual spending went past the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BudgetStatus {
    /// Spending strictly exceeded the budget amount.
    Over,
    /// Spending was at or below the budget amount.
    Under,
}

impl BudgetStatus {
    /// Classifies `spent` against `budget`. Equal values are `Under`.
    pub fn classify(spent: Decimal, budget: Decimal) -> Self {
        if spent > budget {
            BudgetStatus::Over
        } else {
            BudgetStatus::Under
        }
    }

    /// Bar colour the summary chart uses for this status.
    pub fn bar_color(self) -> &'static str {
        match self {
            BudgetStatus::Over => "#ff6b6b",
            BudgetStatus::Under => "#4caf50",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetStatus::Over => f.pad("Over"),
            BudgetStatus::Under => f.pad("Under"),
        }
    }
}

/// One category's budget compared against what was actually spent in a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummaryRow {
    pub category: String,
    /// The budgeted amount for the month
    pub budget: Decimal,
    /// Sum of the month's transactions in this category
    pub actual_spent: Decimal,
    pub status: BudgetStatus,
    /// `(actual - budget) / budget * 100`, one decimal place; zero for a zero budget
    pub deviation_percent: Decimal,
    /// Chart colour derived from the status
    pub bar_color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Over,
    Under,
}

/// A human readable alert about one summary row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BudgetInsight {
    pub kind: InsightKind,
    pub text: String,
}
