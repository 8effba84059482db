use common::{BudgetStatus, BudgetSummaryRow};
use model::entities::{budget, transaction};
use rust_decimal::{Decimal, RoundingStrategy};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;
use tracing::{debug, info, instrument};

use crate::error::{ComputeError, Result};
use crate::month::Month;

/// Compares each of a month's budgets with what was actually spent.
///
/// Budgets drive the row set: a category with spending but no budget is left
/// out, a budget without spending reports zero. Rows come back in the order
/// the budgets are given.
pub fn summarize(
    month: Month,
    transactions: &[transaction::Model],
    budgets: &[budget::Model],
) -> Result<Vec<BudgetSummaryRow>> {
    let mut spending: HashMap<&str, Decimal> = HashMap::new();
    for t in transactions.iter().filter(|t| month.contains(t.date)) {
        add_amount(spending.entry(t.category.as_str()).or_insert(Decimal::ZERO), t.amount)?;
    }

    let rows = budgets
        .iter()
        .filter(|b| b.month.parse::<Month>().is_ok_and(|m| m == month))
        .map(|b| {
            let spent = spending
                .get(b.category.as_str())
                .copied()
                .unwrap_or(Decimal::ZERO);
            let status = BudgetStatus::classify(spent, b.amount);
            BudgetSummaryRow {
                category: b.category.clone(),
                budget: b.amount,
                actual_spent: spent,
                status,
                deviation_percent: deviation_percent(spent, b.amount),
                bar_color: status.bar_color().to_string(),
            }
        })
        .collect();
    Ok(rows)
}

/// Adds `amount` to a running total, failing instead of overflowing.
pub(crate) fn add_amount(total: &mut Decimal, amount: Decimal) -> Result<()> {
    *total = total
        .checked_add(amount)
        .ok_or(ComputeError::Overflow)?;
    Ok(())
}

/// Percentage by which `actual` deviates from `budget`, to one decimal place
/// with halves rounded away from zero. A zero budget has no meaningful
/// deviation and reports zero.
pub fn deviation_percent(actual: Decimal, budget: Decimal) -> Decimal {
    if budget.is_zero() {
        return Decimal::ZERO;
    }
    actual
        .checked_sub(budget)
        .and_then(|diff| diff.checked_div(budget))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|pct| {
            pct.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
                .normalize()
        })
        .unwrap_or(Decimal::ZERO)
}

/// Loads a month's transactions and budgets and runs [`summarize`] over them.
#[derive(Debug, Default)]
pub struct BudgetSummaryComputer;

impl BudgetSummaryComputer {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self, db), fields(month = %month))]
    pub async fn compute(
        &self,
        db: &DatabaseConnection,
        month: Month,
    ) -> Result<Vec<BudgetSummaryRow>> {
        let (start, end) = month.window();
        debug!("Loading transactions dated in [{}, {})", start, end);

        let transactions = transaction::Entity::find()
            .filter(transaction::Column::Date.gte(start))
            .filter(transaction::Column::Date.lt(end))
            .all(db)
            .await?;

        let budgets = budget::Entity::find()
            .filter(budget::Column::Month.eq(month.to_string()))
            .order_by_asc(budget::Column::Id)
            .all(db)
            .await?;

        let rows = summarize(month, &transactions, &budgets)?;
        info!(
            "Summarized {} budgets against {} transactions for {}",
            rows.len(),
            transactions.len(),
            month
        );
        Ok(rows)
    }
}
