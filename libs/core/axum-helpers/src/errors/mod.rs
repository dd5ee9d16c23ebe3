pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{ConnAcquireErr, DbErr};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Returned for every non-2xx response:
/// - `code`: Integer error code for logging/monitoring (e.g., 1008)
/// - `error`: Machine-readable error identifier (e.g., "CONFLICT")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details (e.g., the failing field)
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1008,
///   "error": "CONFLICT",
///   "message": "Item with name 'Sample Item' already exists"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain crates convert their own error enums into this type; its
/// `IntoResponse` picks the status, logs at a level matching the category
/// and renders an [`ErrorResponse`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: Option<serde_json::Value>,
    },

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

type ErrorParts = (StatusCode, String, Option<serde_json::Value>, ErrorCode);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details, code): ErrorParts = match &self {
            AppError::Database(e) => {
                let code = db_error_code(e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    code.default_message().to_string(),
                    None,
                    code,
                )
            }
            AppError::JsonExtractorRejection(e) => {
                let status = match e {
                    // Unparseable or wrongly-shaped bodies are validation failures
                    JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
                        StatusCode::UNPROCESSABLE_ENTITY
                    }
                    other => other.status(),
                };
                (status, e.body_text(), None, ErrorCode::JsonExtraction)
            }
            AppError::Validation { message, details } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                message.clone(),
                details.clone(),
                ErrorCode::ValidationError,
            ),
            AppError::InvalidId(raw) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Invalid id '{}': expected a positive integer", raw),
                None,
                ErrorCode::InvalidId,
            ),
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, msg.clone(), None, ErrorCode::NotFound)
            }
            AppError::Conflict(msg) => {
                (StatusCode::CONFLICT, msg.clone(), None, ErrorCode::Conflict)
            }
        };

        // The full error (driver text included) only goes to the log
        if code.is_server_error() {
            tracing::error!(error_code = code.code(), error = ?self, "Request failed");
        } else {
            tracing::info!(error_code = code.code(), "{}", self);
        }

        let body = Json(ErrorResponse {
            code: code.code(),
            error: code.as_str().to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Classifies a SeaORM `DbErr`; pool exhaustion and a closed pool get their
/// own codes so they can be told apart from query failures.
fn db_error_code(error: &DbErr) -> ErrorCode {
    match error {
        DbErr::ConnectionAcquire(ConnAcquireErr::Timeout) => ErrorCode::DatabasePoolTimeout,
        DbErr::ConnectionAcquire(_) => ErrorCode::DatabasePoolClosed,
        DbErr::Conn(_) | DbErr::Exec(_) | DbErr::Query(_) => ErrorCode::DatabaseError,
        _ => ErrorCode::DatabaseUnhandled,
    }
}

/// Helper function to create error responses.
///
/// # Example
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(
///     StatusCode::NOT_FOUND,
///     "The requested resource was not found".to_string(),
///     ErrorCode::NotFound,
/// );
/// ```
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    let body = Json(ErrorResponse {
        code: error_code.code(),
        error: error_code.as_str().to_string(),
        message,
        details: None,
    });

    (status, body).into_response()
}
