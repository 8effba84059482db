use std::fmt::{self, Write as _};

use anyhow::Result;
use common::{BudgetInsight, BudgetSummaryRow, DashboardSummary};
use compute::{BudgetSummaryComputer, DashboardComputer, Month, budget_insights};
use tracing::{debug, info};

use crate::config::connect;

pub async fn print_budget_summary(database_url: &str, month_token: &str) -> Result<()> {
    let month: Month = month_token.parse()?;
    info!("Building budget summary for {}", month);

    let db = connect(database_url).await?;
    let computed = BudgetSummaryComputer::new().compute(&db, month).await;
    db.close().await?;

    let rows = computed?;
    let insights = budget_insights(&rows);
    print!("{}", render_budget_summary(month, &rows, &insights)?);
    Ok(())
}

pub async fn print_dashboard(database_url: &str) -> Result<()> {
    info!("Building dashboard over all transactions");

    let db = connect(database_url).await?;
    let computed = DashboardComputer::new().compute(&db).await;
    db.close().await?;

    print!("{}", render_dashboard(&computed?)?);
    Ok(())
}

fn render_budget_summary(
    month: Month,
    rows: &[BudgetSummaryRow],
    insights: &[BudgetInsight],
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Budget summary for {}", month)?;

    if rows.is_empty() {
        writeln!(out, "No budgets set for this month.")?;
        return Ok(out);
    }

    writeln!(
        out,
        "{:<16} {:>12} {:>12} {:>7} {:>10}",
        "Category", "Budget", "Spent", "Status", "Deviation"
    )?;
    for row in rows {
        writeln!(
            out,
            "{:<16} {:>12} {:>12} {:>7} {:>9}%",
            row.category,
            row.budget.normalize(),
            row.actual_spent.normalize(),
            row.status,
            row.deviation_percent,
        )?;
    }

    debug!("Rendering {} insights", insights.len());
    writeln!(out)?;
    for insight in insights {
        writeln!(out, "- {}", insight.text)?;
    }
    Ok(out)
}

fn render_dashboard(summary: &DashboardSummary) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Total spent:   {}", summary.total.normalize())?;
    writeln!(out, "Transactions:  {}", summary.count)?;
    writeln!(out, "Top category:  {}", summary.top_category)?;
    match summary.latest_date {
        Some(date) => writeln!(out, "Latest entry:  {}", date)?,
        None => writeln!(out, "Latest entry:  N/A")?,
    }

    if !summary.monthly.is_empty() {
        writeln!(out, "\nMonthly")?;
        for point in &summary.monthly {
            writeln!(out, "  {:<10} {:>12}", point.month, point.total.normalize())?;
        }
    }

    if !summary.by_category.is_empty() {
        writeln!(out, "\nBy category")?;
        for slice in &summary.by_category {
            writeln!(out, "  {:<16} {:>12}  {}", slice.name, slice.value.normalize(), slice.color)?;
        }
    }
    Ok(out)
}
