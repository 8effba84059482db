use crate::error::ApiError;
use super::validate_amount;
use crate::schemas::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use model::entities::transaction;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace, warn};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for recording a new transaction
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreateTransactionRequest {
    /// Transaction amount
    #[validate(custom(function = "validate_amount"))]
    pub amount: Decimal,
    /// Date the money was spent (YYYY-MM-DD)
    pub date: NaiveDate,
    /// What the money was spent on
    #[validate(length(min = 1))]
    pub description: String,
    /// Category label, e.g. "Food"
    #[validate(length(min = 1))]
    pub category: String,
}

/// Request body for replacing every field of an existing transaction
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct UpdateTransactionRequest {
    /// ID of the transaction to replace
    pub id: i32,
    #[validate(custom(function = "validate_amount"))]
    pub amount: Decimal,
    pub date: NaiveDate,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub category: String,
}

/// Request body for deleting a transaction
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct DeleteTransactionRequest {
    /// ID of the transaction to delete
    pub id: i32,
}

/// Transaction response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: i32,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<transaction::Model> for TransactionResponse {
    fn from(model: transaction::Model) -> Self {
        Self {
            id: model.id,
            amount: model.amount,
            date: model.date,
            description: model.description,
            category: model.category,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Record a new transaction
#[utoipa::path(
    post,
    path = "/api/transactions",
    tag = "transactions",
    request_body = CreateTransactionRequest,
    responses(
        (status = 201, description = "Transaction created successfully", body = TransactionResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_transaction(
    State(state): State<AppState>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TransactionResponse>), ApiError> {
    trace!("Entering create_transaction function");
    let Json(request) = payload?;
    request.validate()?;
    debug!(
        "Creating transaction: amount {}, date {}, category {}",
        request.amount, request.date, request.category
    );

    let new_transaction = transaction::ActiveModel {
        amount: Set(request.amount),
        date: Set(request.date),
        description: Set(request.description),
        category: Set(request.category),
        ..Default::default()
    };

    let created = new_transaction
        .insert(&state.db)
        .await
        .map_err(ApiError::internal("Failed to create transaction"))?;

    info!("Transaction created with ID: {}", created.id);
    Ok((StatusCode::CREATED, Json(TransactionResponse::from(created))))
}

/// List all transactions, newest date first
#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = "transactions",
    responses(
        (status = 200, description = "Transactions retrieved successfully", body = [TransactionResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<TransactionResponse>>, ApiError> {
    trace!("Entering get_transactions function");

    let transactions = transaction::Entity::find()
        .order_by_desc(transaction::Column::Date)
        .order_by_desc(transaction::Column::Id)
        .all(&state.db)
        .await
        .map_err(ApiError::internal("Failed to fetch transactions"))?;

    info!("Retrieved {} transactions", transactions.len());
    Ok(Json(
        transactions
            .into_iter()
            .map(TransactionResponse::from)
            .collect(),
    ))
}

/// Get a single transaction by ID
#[utoipa::path(
    get,
    path = "/api/transactions/{transaction_id}",
    tag = "transactions",
    params(
        ("transaction_id" = i32, Path, description = "Transaction ID"),
    ),
    responses(
        (status = 200, description = "Transaction retrieved successfully", body = TransactionResponse),
        (status = 404, description = "Transaction not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_transaction(
    Path(transaction_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<TransactionResponse>, ApiError> {
    trace!("Entering get_transaction function for transaction_id: {}", transaction_id);

    match transaction::Entity::find_by_id(transaction_id)
        .one(&state.db)
        .await
        .map_err(ApiError::internal("Failed to fetch transaction"))?
    {
        Some(model) => Ok(Json(TransactionResponse::from(model))),
        None => {
            warn!("Transaction with ID {} not found", transaction_id);
            Err(ApiError::NotFound(format!(
                "Transaction with ID {} not found",
                transaction_id
            )))
        }
    }
}

/// Replace every field of a transaction
///
/// Answers `null` when no transaction has the given ID.
#[utoipa::path(
    put,
    path = "/api/transactions",
    tag = "transactions",
    request_body = UpdateTransactionRequest,
    responses(
        (status = 200, description = "Updated transaction, or null if the ID is unknown", body = TransactionResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn update_transaction(
    State(state): State<AppState>,
    payload: Result<Json<UpdateTransactionRequest>, JsonRejection>,
) -> Result<Json<Option<TransactionResponse>>, ApiError> {
    trace!("Entering update_transaction function");
    let Json(request) = payload?;
    request.validate()?;

    let existing = transaction::Entity::find_by_id(request.id)
        .one(&state.db)
        .await
        .map_err(ApiError::internal("Failed to update transaction"))?;

    let Some(existing) = existing else {
        warn!("Transaction with ID {} not found for update", request.id);
        return Ok(Json(None));
    };

    let mut active: transaction::ActiveModel = existing.into();
    active.amount = Set(request.amount);
    active.date = Set(request.date);
    active.description = Set(request.description);
    active.category = Set(request.category);

    let updated = active
        .update(&state.db)
        .await
        .map_err(ApiError::internal("Failed to update transaction"))?;

    info!("Transaction with ID {} replaced", updated.id);
    Ok(Json(Some(TransactionResponse::from(updated))))
}

/// Delete a transaction by ID
#[utoipa::path(
    delete,
    path = "/api/transactions",
    tag = "transactions",
    request_body = DeleteTransactionRequest,
    responses(
        (status = 200, description = "Transaction deleted", body = String),
        (status = 400, description = "Missing ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn delete_transaction(
    State(state): State<AppState>,
    payload: Result<Json<DeleteTransactionRequest>, JsonRejection>,
) -> Result<&'static str, ApiError> {
    let Json(request) = payload?;
    trace!("Entering delete_transaction function for transaction_id: {}", request.id);

    let result = transaction::Entity::delete_by_id(request.id)
        .exec(&state.db)
        .await
        .map_err(ApiError::internal("Failed to delete transaction"))?;

    if result.rows_affected == 0 {
        warn!("Transaction with ID {} not found for deletion", request.id);
    } else {
        info!("Transaction with ID {} deleted", request.id);
    }
    Ok("Transaction deleted")
}
