use crate::error::ApiError;
use crate::schemas::AppState;
use axum::{
    extract::{Query, State},
    response::Json,
};
use common::{BudgetInsight, BudgetSummaryRow};
use compute::{budget_insights, BudgetSummaryComputer, Month};
use serde::Deserialize;
use tracing::{debug, instrument};
use utoipa::IntoParams;

/// Query parameters for the budget summary endpoints
#[derive(Debug, Deserialize, IntoParams)]
pub struct BudgetSummaryQuery {
    /// Month token, e.g. "Jul-2025" or "2025-07"
    pub month: Option<String>,
}

impl BudgetSummaryQuery {
    fn month(&self) -> Result<Month, ApiError> {
        match self.month.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token.parse::<Month>()?),
            _ => Err(ApiError::bad_request(
                "MISSING_MONTH",
                "Month parameter is required",
            )),
        }
    }
}

async fn summary_rows(state: &AppState, month: Month) -> Result<Vec<BudgetSummaryRow>, ApiError> {
    BudgetSummaryComputer::new()
        .compute(&state.db, month)
        .await
        .map_err(ApiError::internal("Failed to generate budget summary"))
}

/// Compare each budget of a month with the actual spending
#[utoipa::path(
    get,
    path = "/api/budget-summary",
    tag = "insights",
    params(BudgetSummaryQuery),
    responses(
        (status = 200, description = "One row per budget of the month", body = [BudgetSummaryRow]),
        (status = 400, description = "Missing or invalid month", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_budget_summary(
    Query(query): Query<BudgetSummaryQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<BudgetSummaryRow>>, ApiError> {
    let month = query.month()?;
    debug!("Generating budget summary for {}", month);

    Ok(Json(summary_rows(&state, month).await?))
}

/// Alert sentences for each budget of a month
#[utoipa::path(
    get,
    path = "/api/budget-summary/insights",
    tag = "insights",
    params(BudgetSummaryQuery),
    responses(
        (status = 200, description = "One alert per budget of the month", body = [BudgetInsight]),
        (status = 400, description = "Missing or invalid month", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_budget_insights(
    Query(query): Query<BudgetSummaryQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<BudgetInsight>>, ApiError> {
    let month = query.month()?;
    debug!("Generating budget insights for {}", month);

    let rows = summary_rows(&state, month).await?;
    Ok(Json(budget_insights(&rows)))
}
