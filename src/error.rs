use crate::schemas::ErrorResponse;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use compute::ComputeError;
use std::fmt::Display;
use thiserror::Error;
use tracing::{error, warn};
use validator::ValidationErrors;

/// Errors a handler can answer with.
///
/// Validation problems carry their message to the caller. Persistence
/// failures only expose a fixed per-operation message; the cause is logged.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    BadRequest { code: &'static str, message: String },
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            code,
            message: message.into(),
        }
    }

    /// Maps a storage error to a generic 500, logging the cause.
    ///
    /// Meant for `map_err`: `.map_err(ApiError::internal("Failed to fetch budgets"))`.
    pub fn internal<E: Display>(message: &'static str) -> impl FnOnce(E) -> ApiError {
        move |cause| {
            error!("{}: {}", message, cause);
            ApiError::Internal(message)
        }
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest { code, .. } => (StatusCode::BAD_REQUEST, *code),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
            success: false,
        });
        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("Rejected request body: {}", rejection.body_text());
        ApiError::bad_request("INVALID_BODY", rejection.body_text())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut missing = Vec::new();
        let mut invalid = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            if field_errors.iter().all(|e| e.code == "length") {
                missing.push(field.to_string());
            } else {
                invalid.push(field.to_string());
            }
        }
        missing.sort();
        invalid.sort();

        let message = if missing.is_empty() {
            format!("Invalid fields: {}", invalid.join(", "))
        } else {
            format!("Missing fields: {}", missing.join(", "))
        };
        warn!("Request failed validation: {}", message);
        ApiError::bad_request("VALIDATION_ERROR", message)
    }
}

impl From<ComputeError> for ApiError {
    fn from(err: ComputeError) -> Self {
        match err {
            ComputeError::InvalidMonth(_) => ApiError::bad_request("INVALID_MONTH", err.to_string()),
            ComputeError::Database(_) | ComputeError::Overflow => {
                ApiError::internal("Database failure")(err)
            }
        }
    }
}
