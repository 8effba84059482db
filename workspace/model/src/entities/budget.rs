use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// A monthly spending limit for one category.
///
/// `(category, month)` is unique. Rows are written through an
/// `INSERT ... ON CONFLICT` upsert, so timestamps are set by the writer rather
/// than by an `ActiveModelBehavior` hook.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub category: String,
    /// Canonical month token, e.g. `Jul-2025`.
    pub month: String,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub amount: Decimal,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
