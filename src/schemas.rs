use crate::handlers::budgets::{BudgetResponse, UpsertBudgetRequest};
use crate::handlers::transactions::{
    CreateTransactionRequest, DeleteTransactionRequest, TransactionResponse,
    UpdateTransactionRequest,
};
use common::{
    BudgetInsight, BudgetStatus, BudgetSummaryRow, CategoryInfo, CategoryTotal, DashboardSummary,
    InsightKind, MonthlyTotal,
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection, opened at startup and closed on shutdown
    pub db: DatabaseConnection,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::transactions::get_transactions,
        crate::handlers::transactions::get_transaction,
        crate::handlers::transactions::create_transaction,
        crate::handlers::transactions::update_transaction,
        crate::handlers::transactions::delete_transaction,
        crate::handlers::budgets::get_budgets,
        crate::handlers::budgets::upsert_budget,
        crate::handlers::budget_summary::get_budget_summary,
        crate::handlers::budget_summary::get_budget_insights,
        crate::handlers::dashboard::get_dashboard,
        crate::handlers::categories::get_categories,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            CreateTransactionRequest,
            UpdateTransactionRequest,
            DeleteTransactionRequest,
            TransactionResponse,
            UpsertBudgetRequest,
            BudgetResponse,
            BudgetSummaryRow,
            BudgetStatus,
            BudgetInsight,
            InsightKind,
            DashboardSummary,
            MonthlyTotal,
            CategoryTotal,
            CategoryInfo,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "transactions", description = "Transaction CRUD endpoints"),
        (name = "budgets", description = "Monthly category budget endpoints"),
        (name = "insights", description = "Budget summary, alerts and dashboard endpoints"),
        (name = "categories", description = "Category catalog"),
    ),
    info(
        title = "finvis API",
        description = "Personal finance visualizer API - record transactions, set monthly budgets and compare spending against them",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
