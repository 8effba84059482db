use crate::error::ApiError;
use super::validate_amount;
use crate::schemas::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use chrono::{DateTime, Utc};
use compute::Month;
use model::entities::budget;
use rust_decimal::Decimal;
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for setting a category's budget for a month
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct UpsertBudgetRequest {
    /// Category label, e.g. "Food"
    #[validate(length(min = 1))]
    pub category: String,
    /// Month token, e.g. "Jul-2025" or "2025-07"
    #[validate(length(min = 1))]
    pub month: String,
    /// Spending limit for the month
    #[validate(custom(function = "validate_amount"))]
    pub amount: Decimal,
}

/// Budget response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BudgetResponse {
    pub id: i32,
    pub category: String,
    /// Canonical month token, e.g. "Jul-2025"
    pub month: String,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<budget::Model> for BudgetResponse {
    fn from(model: budget::Model) -> Self {
        Self {
            id: model.id,
            category: model.category,
            month: model.month,
            amount: model.amount,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// List all budgets
#[utoipa::path(
    get,
    path = "/api/budgets",
    tag = "budgets",
    responses(
        (status = 200, description = "Budgets retrieved successfully", body = [BudgetResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_budgets(
    State(state): State<AppState>,
) -> Result<Json<Vec<BudgetResponse>>, ApiError> {
    trace!("Entering get_budgets function");

    let budgets = budget::Entity::find()
        .order_by_asc(budget::Column::Id)
        .all(&state.db)
        .await
        .map_err(ApiError::internal("Failed to fetch budgets"))?;

    info!("Retrieved {} budgets", budgets.len());
    Ok(Json(budgets.into_iter().map(BudgetResponse::from).collect()))
}

/// Create or overwrite the budget for a (category, month)
#[utoipa::path(
    post,
    path = "/api/budgets",
    tag = "budgets",
    request_body = UpsertBudgetRequest,
    responses(
        (status = 200, description = "Budget saved", body = BudgetResponse),
        (status = 400, description = "Missing fields or invalid month", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn upsert_budget(
    State(state): State<AppState>,
    payload: Result<Json<UpsertBudgetRequest>, JsonRejection>,
) -> Result<Json<BudgetResponse>, ApiError> {
    trace!("Entering upsert_budget function");
    let Json(request) = payload?;
    request.validate()?;
    let month: Month = request.month.parse()?;

    debug!(
        "Saving budget of {} for {} in {}",
        request.amount, request.category, month
    );

    let saved = save_budget(&state.db, &request.category, month, request.amount)
        .await
        .map_err(ApiError::internal("Failed to save budget"))?
        .ok_or(ApiError::Internal("Failed to save budget"))?;

    info!("Budget {} saved for {} in {}", saved.id, saved.category, saved.month);
    Ok(Json(BudgetResponse::from(saved)))
}

/// Writes the budget row for `(category, month)` and reads it back.
///
/// The insert conflicts on the unique `(category, month)` index and then
/// only overwrites the amount, so the row keeps its id and `created_at`.
pub async fn save_budget(
    db: &DatabaseConnection,
    category: &str,
    month: Month,
    amount: Decimal,
) -> Result<Option<budget::Model>, DbErr> {
    let now = Utc::now();
    let token = month.to_string();

    let row = budget::ActiveModel {
        category: Set(category.to_string()),
        month: Set(token.clone()),
        amount: Set(amount),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    budget::Entity::insert(row)
        .on_conflict(
            OnConflict::columns([budget::Column::Category, budget::Column::Month])
                .update_columns([budget::Column::Amount, budget::Column::UpdatedAt])
                .to_owned(),
        )
        .exec(db)
        .await?;

    budget::Entity::find()
        .filter(budget::Column::Category.eq(category))
        .filter(budget::Column::Month.eq(token))
        .one(db)
        .await
}
