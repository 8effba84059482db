use crate::handlers::budgets::{BudgetResponse, UpsertBudgetRequest};
use crate::handlers::transactions::{CreateTransactionRequest, TransactionResponse, UpdateTransactionRequest};
use crate::schemas::HealthResponse;
use crate::test_utils::{init_test_tracing, setup_test_app};
use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{json, Value};

async fn test_server() -> TestServer {
    TestServer::new(setup_test_app().await).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn record(server: &TestServer, amount: i64, on: NaiveDate, category: &str) -> TransactionResponse {
    let request = CreateTransactionRequest {
        amount: Decimal::new(amount, 0),
        date: on,
        description: format!("{} spending", category),
        category: category.to_string(),
    };
    let response = server.post("/api/transactions").json(&request).await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

async fn set_budget(server: &TestServer, category: &str, month: &str, amount: i64) -> BudgetResponse {
    let request = UpsertBudgetRequest {
        category: category.to_string(),
        month: month.to_string(),
        amount: Decimal::new(amount, 0),
    };
    let response = server.post("/api/budgets").json(&request).await;
    response.assert_status_ok();
    response.json()
}

async fn summary(server: &TestServer, month: &str) -> Vec<Value> {
    let response = server
        .get("/api/budget-summary")
        .add_query_param("month", month)
        .await;
    response.assert_status_ok();
    response.json()
}

#[tokio::test]
async fn test_health_check() {
    let _guard = init_test_tracing();
    let server = test_server().await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "healthy");
    assert_eq!(body.database, "connected");
}

#[tokio::test]
async fn test_create_transaction() {
    let server = test_server().await;

    let created = record(&server, 450, date(2025, 7, 3), "Food").await;

    assert!(created.id > 0);
    assert_eq!(created.amount, Decimal::new(450, 0));
    assert_eq!(created.date, date(2025, 7, 3));
    assert_eq!(created.description, "Food spending");
    assert_eq!(created.category, "Food");
    assert_eq!(created.created_at, created.updated_at);
}

#[tokio::test]
async fn test_create_transaction_with_missing_field() {
    let server = test_server().await;

    let response = server
        .post("/api/transactions")
        .json(&json!({ "amount": 10, "date": "2025-07-01", "description": "lunch" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "INVALID_BODY");

    let listed: Vec<TransactionResponse> = server.get("/api/transactions").await.json();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_create_transaction_with_empty_fields() {
    let server = test_server().await;

    let response = server
        .post("/api/transactions")
        .json(&json!({ "amount": 10, "date": "2025-07-01", "description": "", "category": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"], "Missing fields: category, description");
}

#[tokio::test]
async fn test_get_transactions_newest_first() {
    let server = test_server().await;

    let older = record(&server, 100, date(2025, 6, 30), "Rent").await;
    let newest = record(&server, 200, date(2025, 7, 15), "Food").await;
    let same_day = record(&server, 300, date(2025, 7, 15), "Travel").await;

    let response = server.get("/api/transactions").await;
    response.assert_status_ok();
    let listed: Vec<TransactionResponse> = response.json();

    let ids: Vec<i32> = listed.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![same_day.id, newest.id, older.id]);
}

#[tokio::test]
async fn test_get_transaction_by_id() {
    let server = test_server().await;
    let created = record(&server, 75, date(2025, 7, 9), "Health").await;

    let response = server.get(&format!("/api/transactions/{}", created.id)).await;
    response.assert_status_ok();
    let fetched: TransactionResponse = response.json();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.category, "Health");

    let missing = server.get("/api/transactions/9999").await;
    missing.assert_status(StatusCode::NOT_FOUND);
    let body: Value = missing.json();
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_update_transaction_replaces_all_fields() {
    let server = test_server().await;
    let created = record(&server, 75, date(2025, 7, 9), "Health").await;

    let update = UpdateTransactionRequest {
        id: created.id,
        amount: Decimal::new(-1250, 2),
        date: date(2025, 8, 1),
        description: "refund".to_string(),
        category: "Shopping".to_string(),
    };
    let response = server.put("/api/transactions").json(&update).await;
    response.assert_status_ok();
    let updated: Option<TransactionResponse> = response.json();
    let updated = updated.expect("existing transaction is returned");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.amount, Decimal::new(-1250, 2));
    assert_eq!(updated.date, date(2025, 8, 1));
    assert_eq!(updated.description, "refund");
    assert_eq!(updated.category, "Shopping");
    assert_eq!(updated.created_at, created.created_at);

    let fetched: TransactionResponse = server
        .get(&format!("/api/transactions/{}", created.id))
        .await
        .json();
    assert_eq!(fetched.category, "Shopping");
}

#[tokio::test]
async fn test_update_unknown_transaction_returns_null() {
    let server = test_server().await;

    let update = UpdateTransactionRequest {
        id: 4242,
        amount: Decimal::new(1, 0),
        date: date(2025, 7, 1),
        description: "ghost".to_string(),
        category: "Other".to_string(),
    };
    let response = server.put("/api/transactions").json(&update).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body.is_null());
}

#[tokio::test]
async fn test_delete_transaction_leaves_others_intact() {
    let server = test_server().await;
    let doomed = record(&server, 10, date(2025, 7, 1), "Food").await;
    let kept = record(&server, 20, date(2025, 7, 2), "Food").await;

    let response = server
        .delete("/api/transactions")
        .json(&json!({ "id": doomed.id }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.text(), "Transaction deleted");

    let listed: Vec<TransactionResponse> = server.get("/api/transactions").await.json();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, kept.id);

    server
        .get(&format!("/api/transactions/{}", doomed.id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_transaction_still_succeeds() {
    let server = test_server().await;

    let response = server
        .delete("/api/transactions")
        .json(&json!({ "id": 31337 }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "Transaction deleted");
}

#[tokio::test]
async fn test_upsert_budget_creates_then_replaces() {
    let server = test_server().await;

    let first = set_budget(&server, "Food", "Jul-2025", 5000).await;
    assert_eq!(first.month, "Jul-2025");
    assert_eq!(first.amount, Decimal::new(5000, 0));

    // Same month in ISO form hits the same row
    let second = set_budget(&server, "Food", "2025-07", 6000).await;
    assert_eq!(second.id, first.id);
    assert_eq!(second.amount, Decimal::new(6000, 0));
    assert_eq!(second.created_at, first.created_at);

    let budgets: Vec<BudgetResponse> = server.get("/api/budgets").await.json();
    assert_eq!(budgets.len(), 1);
    assert_eq!(budgets[0].amount, Decimal::new(6000, 0));
}

#[tokio::test]
async fn test_upsert_budget_keeps_months_and_categories_apart() {
    let server = test_server().await;

    set_budget(&server, "Food", "Jul-2025", 5000).await;
    set_budget(&server, "Food", "Aug-2025", 4000).await;
    set_budget(&server, "Rent", "Jul-2025", 15000).await;

    let budgets: Vec<BudgetResponse> = server.get("/api/budgets").await.json();
    assert_eq!(budgets.len(), 3);
}

#[tokio::test]
async fn test_upsert_budget_validation() {
    let server = test_server().await;

    let invalid_month = server
        .post("/api/budgets")
        .json(&json!({ "category": "Food", "month": "Smarch-2025", "amount": 100 }))
        .await;
    invalid_month.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = invalid_month.json();
    assert_eq!(body["code"], "INVALID_MONTH");

    let empty_category = server
        .post("/api/budgets")
        .json(&json!({ "category": "", "month": "Jul-2025", "amount": 100 }))
        .await;
    empty_category.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = empty_category.json();
    assert_eq!(body["error"], "Missing fields: category");

    let missing_amount = server
        .post("/api/budgets")
        .json(&json!({ "category": "Food", "month": "Jul-2025" }))
        .await;
    missing_amount.assert_status(StatusCode::BAD_REQUEST);

    let budgets: Vec<BudgetResponse> = server.get("/api/budgets").await.json();
    assert!(budgets.is_empty());
}

#[tokio::test]
async fn test_budget_summary_over_and_under() {
    let server = test_server().await;

    set_budget(&server, "Food", "Jul-2025", 5000).await;
    set_budget(&server, "Rent", "Jul-2025", 5000).await;
    set_budget(&server, "Travel", "Jul-2025", 1000).await;
    record(&server, 4000, date(2025, 7, 2), "Food").await;
    record(&server, 2200, date(2025, 7, 20), "Food").await;
    record(&server, 3000, date(2025, 7, 1), "Rent").await;
    // No budget for this category, so no row
    record(&server, 999, date(2025, 7, 5), "Shopping").await;

    let rows = summary(&server, "Jul-2025").await;
    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0]["category"], "Food");
    assert_eq!(rows[0]["budget"].as_f64(), Some(5000.0));
    assert_eq!(rows[0]["actualSpent"].as_f64(), Some(6200.0));
    assert_eq!(rows[0]["status"], "Over");
    assert_eq!(rows[0]["deviationPercent"].as_f64(), Some(24.0));
    assert_eq!(rows[0]["barColor"], "#ff6b6b");

    assert_eq!(rows[1]["category"], "Rent");
    assert_eq!(rows[1]["actualSpent"].as_f64(), Some(3000.0));
    assert_eq!(rows[1]["status"], "Under");
    assert_eq!(rows[1]["deviationPercent"].as_f64(), Some(-40.0));
    assert_eq!(rows[1]["barColor"], "#4caf50");

    assert_eq!(rows[2]["category"], "Travel");
    assert_eq!(rows[2]["actualSpent"].as_f64(), Some(0.0));
    assert_eq!(rows[2]["status"], "Under");
}

#[tokio::test]
async fn test_budget_summary_spend_equal_to_budget_is_under() {
    let server = test_server().await;

    set_budget(&server, "Utilities", "2025-07", 800).await;
    record(&server, 800, date(2025, 7, 10), "Utilities").await;

    let rows = summary(&server, "2025-07").await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["status"], "Under");
    assert_eq!(rows[0]["deviationPercent"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn test_budget_summary_month_window() {
    let server = test_server().await;

    set_budget(&server, "Food", "Jul-2025", 100).await;
    record(&server, 1, date(2025, 6, 30), "Food").await;
    record(&server, 10, date(2025, 7, 1), "Food").await;
    record(&server, 20, date(2025, 7, 31), "Food").await;
    record(&server, 1000, date(2025, 8, 1), "Food").await;

    let rows = summary(&server, "July-2025").await;
    assert_eq!(rows[0]["actualSpent"].as_f64(), Some(30.0));
    assert_eq!(rows[0]["status"], "Under");
}

#[tokio::test]
async fn test_budget_summary_december_rolls_into_next_year() {
    let server = test_server().await;

    set_budget(&server, "Travel", "Dec-2024", 500).await;
    record(&server, 600, date(2024, 12, 31), "Travel").await;
    record(&server, 50, date(2025, 1, 1), "Travel").await;

    let rows = summary(&server, "Dec-2024").await;
    assert_eq!(rows[0]["actualSpent"].as_f64(), Some(600.0));
    assert_eq!(rows[0]["status"], "Over");
    assert_eq!(rows[0]["deviationPercent"].as_f64(), Some(20.0));
}

#[tokio::test]
async fn test_budget_summary_with_negative_budget_and_refund() {
    let server = test_server().await;

    set_budget(&server, "Shopping", "Jul-2025", -100).await;
    record(&server, 300, date(2025, 7, 2), "Shopping").await;
    record(&server, -500, date(2025, 7, 9), "Shopping").await;

    let rows = summary(&server, "Jul-2025").await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["budget"].as_f64(), Some(-100.0));
    assert_eq!(rows[0]["actualSpent"].as_f64(), Some(-200.0));
    assert_eq!(rows[0]["status"], "Under");
    assert_eq!(rows[0]["deviationPercent"].as_f64(), Some(100.0));

    // A refund that pushes spending above a negative budget is over it
    record(&server, 150, date(2025, 7, 20), "Shopping").await;
    let rows = summary(&server, "Jul-2025").await;
    assert_eq!(rows[0]["actualSpent"].as_f64(), Some(-50.0));
    assert_eq!(rows[0]["status"], "Over");
}

#[tokio::test]
async fn test_budget_summary_rounds_half_percent_away_from_zero() {
    let server = test_server().await;

    set_budget(&server, "Food", "Jul-2025", 10000).await;
    set_budget(&server, "Rent", "Jul-2025", 10000).await;
    record(&server, 10025, date(2025, 7, 2), "Food").await;
    record(&server, 9975, date(2025, 7, 2), "Rent").await;

    let rows = summary(&server, "Jul-2025").await;
    assert_eq!(rows[0]["deviationPercent"].as_f64(), Some(0.3));
    assert_eq!(rows[1]["deviationPercent"].as_f64(), Some(-0.3));
}

#[tokio::test]
async fn test_out_of_range_amounts_are_rejected() {
    let server = test_server().await;

    for _ in 0..2 {
        let response = server
            .post("/api/transactions")
            .json(&json!({ "amount": 5e28, "date": "2025-07-01", "description": "typo", "category": "Food" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"], "Invalid fields: amount");
    }

    let budget = server
        .post("/api/budgets")
        .json(&json!({ "category": "Food", "month": "Jul-2025", "amount": 1e12 }))
        .await;
    budget.assert_status(StatusCode::BAD_REQUEST);

    set_budget(&server, "Food", "Jul-2025", 100).await;
    let rows = summary(&server, "Jul-2025").await;
    assert_eq!(rows[0]["actualSpent"].as_f64(), Some(0.0));
    server.get("/api/dashboard").await.assert_status_ok();
}

#[tokio::test]
async fn test_update_rejects_out_of_range_amount() {
    let server = test_server().await;
    let created = record(&server, 75, date(2025, 7, 9), "Health").await;

    let response = server
        .put("/api/transactions")
        .json(&json!({
            "id": created.id,
            "amount": -1e13,
            "date": "2025-07-09",
            "description": "typo",
            "category": "Health"
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let fetched: TransactionResponse = server
        .get(&format!("/api/transactions/{}", created.id))
        .await
        .json();
    assert_eq!(fetched.amount, Decimal::new(75, 0));
}

#[tokio::test]
async fn test_budget_summary_requires_month() {
    let server = test_server().await;

    let missing = server.get("/api/budget-summary").await;
    missing.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = missing.json();
    assert_eq!(body["code"], "MISSING_MONTH");
    assert_eq!(body["error"], "Month parameter is required");

    let blank = server
        .get("/api/budget-summary")
        .add_query_param("month", "")
        .await;
    blank.assert_status(StatusCode::BAD_REQUEST);

    let invalid = server
        .get("/api/budget-summary")
        .add_query_param("month", "2025-13")
        .await;
    invalid.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = invalid.json();
    assert_eq!(body["code"], "INVALID_MONTH");
}

#[tokio::test]
async fn test_budget_summary_without_budgets_is_empty() {
    let server = test_server().await;
    record(&server, 10, date(2025, 7, 1), "Food").await;

    let rows = summary(&server, "Jul-2025").await;
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_budget_insights() {
    let server = test_server().await;

    set_budget(&server, "Food", "Jul-2025", 5000).await;
    set_budget(&server, "Rent", "Jul-2025", 5000).await;
    record(&server, 6200, date(2025, 7, 2), "Food").await;
    record(&server, 3000, date(2025, 7, 1), "Rent").await;

    let response = server
        .get("/api/budget-summary/insights")
        .add_query_param("month", "Jul-2025")
        .await;
    response.assert_status_ok();
    let insights: Vec<Value> = response.json();

    assert_eq!(insights.len(), 2);
    assert_eq!(insights[0]["kind"], "over");
    assert_eq!(
        insights[0]["text"],
        "You spent 6200 on Food, which is 24% OVER your budget of 5000."
    );
    assert_eq!(insights[1]["kind"], "under");
    assert_eq!(
        insights[1]["text"],
        "Good job! You spent 3000 on Rent, which is 40% UNDER your budget of 5000."
    );

    server
        .get("/api/budget-summary/insights")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_dashboard() {
    let server = test_server().await;

    record(&server, 300, date(2025, 6, 12), "Food").await;
    record(&server, 1000, date(2025, 7, 1), "Rent").await;
    record(&server, 200, date(2025, 7, 3), "Food").await;

    let response = server.get("/api/dashboard").await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["total"].as_f64(), Some(1500.0));
    assert_eq!(body["count"], 3);
    assert_eq!(body["topCategory"], "Rent");
    assert_eq!(body["latestDate"], "2025-07-03");

    let monthly = body["monthly"].as_array().unwrap();
    assert_eq!(monthly.len(), 2);
    assert_eq!(monthly[0]["month"], "Jun-2025");
    assert_eq!(monthly[0]["total"].as_f64(), Some(300.0));
    assert_eq!(monthly[1]["month"], "Jul-2025");
    assert_eq!(monthly[1]["total"].as_f64(), Some(1200.0));

    let by_category = body["byCategory"].as_array().unwrap();
    assert_eq!(by_category[0]["name"], "Rent");
    assert_eq!(by_category[1]["name"], "Food");
    assert_eq!(by_category[1]["value"].as_f64(), Some(500.0));
    assert!(by_category[0]["color"].as_str().unwrap().starts_with('#'));
}

#[tokio::test]
async fn test_empty_dashboard() {
    let server = test_server().await;

    let body: Value = server.get("/api/dashboard").await.json();

    assert_eq!(body["count"], 0);
    assert_eq!(body["topCategory"], "N/A");
    assert!(body["latestDate"].is_null());
    assert!(body["monthly"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_categories() {
    let server = test_server().await;

    let response = server.get("/api/categories").await;
    response.assert_status_ok();
    let categories: Vec<Value> = response.json();

    assert_eq!(categories.len(), 10);
    assert_eq!(categories[0]["name"], "Food");
    assert!(categories.iter().any(|c| c["name"] == "Other"));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let server = test_server().await;

    let response = server.get("/api-docs/openapi.json").await;
    response.assert_status_ok();
    let doc: Value = response.json();
    assert!(doc["paths"]["/api/budget-summary"].is_object());
}
