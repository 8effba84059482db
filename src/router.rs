use crate::config::REQUEST_TIMEOUT;
use crate::handlers::{
    budget_summary::{get_budget_insights, get_budget_summary},
    budgets::{get_budgets, upsert_budget},
    categories::get_categories,
    dashboard::get_dashboard,
    health::health_check,
    transactions::{
        create_transaction, delete_transaction, get_transaction, get_transactions,
        update_transaction,
    },
};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Transaction CRUD routes; update and delete carry the id in the body
        .route(
            "/api/transactions",
            get(get_transactions)
                .post(create_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
        .route("/api/transactions/:transaction_id", get(get_transaction))
        // Budget routes
        .route("/api/budgets", get(get_budgets).post(upsert_budget))
        .route("/api/budget-summary", get(get_budget_summary))
        .route("/api/budget-summary/insights", get(get_budget_insights))
        // Charts
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/categories", get(get_categories))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
