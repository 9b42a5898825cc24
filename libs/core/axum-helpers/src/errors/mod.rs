pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use crate::validation::{FieldError, Location};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Single-message error envelope.
///
/// ```json
/// { "error": "Product not found" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Envelope returned when one or more field rules fail.
///
/// ```json
/// { "errors": [{ "type": "field", "msg": "Invalid ID", "path": "id", "location": "params", "value": "abc" }] }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct FieldErrorsResponse {
    /// Every failing rule, in rule order
    pub errors: Vec<FieldError>,
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Validation failed: {} field error(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) => ErrorCode::ValidationError,
            AppError::InvalidJson(_) => ErrorCode::InvalidJson,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.error_code();

        let (status, message) = match self {
            AppError::Validation(errors) => {
                tracing::info!(
                    error_code = code.code(),
                    failures = errors.len(),
                    "Validation error"
                );
                return (StatusCode::BAD_REQUEST, Json(FieldErrorsResponse { errors }))
                    .into_response();
            }
            AppError::InvalidJson(e) => {
                tracing::warn!(error_code = code.code(), "Invalid JSON body: {}", e);
                (StatusCode::BAD_REQUEST, code.default_message().to_string())
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = code.code(), "Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::Database(e) => {
                tracing::error!(error_code = code.code(), "Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    code.default_message().to_string(),
                )
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(error_code = code.code(), "Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    code.default_message().to_string(),
                )
            }
        };

        error_response(status, message)
    }
}

/// Field errors raised by `#[derive(Validate)]` DTOs, reported as body fields
/// sorted by field name.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));

        let errors = fields
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |err| FieldError {
                    kind: "field".to_string(),
                    value: err.params.get("value").cloned(),
                    msg: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                    path: field.to_string(),
                    location: Location::Body,
                })
            })
            .collect();

        AppError::Validation(errors)
    }
}

/// Build a `{ "error": message }` response with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = Json(ErrorResponse {
        error: message.into(),
    });

    (status, body).into_response()
}
