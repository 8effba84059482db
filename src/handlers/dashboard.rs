use crate::error::ApiError;
use crate::schemas::AppState;
use axum::{extract::State, response::Json};
use common::DashboardSummary;
use compute::DashboardComputer;
use tracing::instrument;

/// Totals, top category and chart series over all transactions
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "insights",
    responses(
        (status = 200, description = "Spending overview", body = DashboardSummary),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardSummary>, ApiError> {
    DashboardComputer::new()
        .compute(&state.db)
        .await
        .map(Json)
        .map_err(ApiError::internal("Failed to build dashboard"))
}
