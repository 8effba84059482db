use common::{CategoryInfo, CategoryTotal, DashboardSummary, MonthlyTotal};
use model::entities::transaction;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::collections::{BTreeMap, HashMap};
use tracing::{info, instrument};

use crate::budget_summary::add_amount;
use crate::error::Result;
use crate::month::Month;

/// Label used for the top category when there is nothing to rank.
pub const NO_CATEGORY: &str = "N/A";

/// Builds the spending overview over every transaction given.
pub fn dashboard_summary(transactions: &[transaction::Model]) -> Result<DashboardSummary> {
    let mut monthly: BTreeMap<Month, Decimal> = BTreeMap::new();
    let mut by_category: HashMap<&str, Decimal> = HashMap::new();
    let mut total = Decimal::ZERO;

    for t in transactions {
        add_amount(monthly.entry(Month::of(t.date)).or_insert(Decimal::ZERO), t.amount)?;
        add_amount(by_category.entry(t.category.as_str()).or_insert(Decimal::ZERO), t.amount)?;
        add_amount(&mut total, t.amount)?;
    }

    let mut ranked: Vec<(&str, Decimal)> = by_category.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let top_category = ranked
        .first()
        .map(|(name, _)| name.to_string())
        .unwrap_or_else(|| NO_CATEGORY.to_string());

    Ok(DashboardSummary {
        total,
        count: transactions.len(),
        top_category,
        latest_date: transactions.iter().map(|t| t.date).max(),
        monthly: monthly
            .into_iter()
            .map(|(month, total)| MonthlyTotal {
                month: month.to_string(),
                total,
            })
            .collect(),
        by_category: ranked
            .into_iter()
            .enumerate()
            .map(|(position, (name, value))| {
                let info = CategoryInfo::resolve(name, position);
                CategoryTotal {
                    name: info.name,
                    value,
                    color: info.color,
                }
            })
            .collect(),
    })
}

/// Loads all transactions and runs [`dashboard_summary`] over them.
#[derive(Debug, Default)]
pub struct DashboardComputer;

impl DashboardComputer {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self, db))]
    pub async fn compute(&self, db: &DatabaseConnection) -> Result<DashboardSummary> {
        let transactions = transaction::Entity::find().all(db).await?;
        let summary = dashboard_summary(&transactions)?;
        info!(
            "Dashboard over {} transactions, {} months, {} categories",
            summary.count,
            summary.monthly.len(),
            summary.by_category.len()
        );
        Ok(summary)
    }
}
