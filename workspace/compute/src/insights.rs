use common::{BudgetInsight, BudgetStatus, BudgetSummaryRow, InsightKind};

/// Turns summary rows into one alert sentence each, in row order.
pub fn budget_insights(rows: &[BudgetSummaryRow]) -> Vec<BudgetInsight> {
    rows.iter().map(insight_for).collect()
}

fn insight_for(row: &BudgetSummaryRow) -> BudgetInsight {
    let spent = row.actual_spent.normalize();
    let budget = row.budget.normalize();
    let pct = row.deviation_percent.normalize();

    match row.status {
        BudgetStatus::Over => BudgetInsight {
            kind: InsightKind::Over,
            text: format!(
                "You spent {} on {}, which is {}% OVER your budget of {}.",
                spent, row.category, pct, budget
            ),
        },
        BudgetStatus::Under => BudgetInsight {
            kind: InsightKind::Under,
            text: format!(
                "Good job! You spent {} on {}, which is {}% UNDER your budget of {}.",
                spent,
                row.category,
                pct.abs(),
                budget
            ),
        },
    }
}
