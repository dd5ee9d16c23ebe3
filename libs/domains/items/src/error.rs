use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

#[derive(Debug, Error)]
pub enum ItemError {
    /// Caller input broke a field rule
    #[error("{field} {constraint}")]
    Validation { field: String, constraint: String },

    #[error("Item with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Item with ID {0} not found")]
    NotFound(i64),

    /// Unexpected storage failure; the driver error is kept for logging and
    /// for the pool-timeout / pool-closed codes
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl ItemError {
    pub fn validation(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        ItemError::Validation {
            field: field.into(),
            constraint: constraint.into(),
        }
    }
}

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        let message = err.to_string();
        match err {
            ItemError::Validation { field, constraint } => AppError::Validation {
                message,
                details: Some(json!({ "field": field, "constraint": constraint })),
            },
            ItemError::DuplicateName(_) => AppError::Conflict(message),
            ItemError::NotFound(_) => AppError::NotFound(message),
            ItemError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Reports the first failing field, in field-name order so the result does
/// not depend on hash iteration.
impl From<ValidationErrors> for ItemError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| (field.to_string(), errs.first().map(describe)))
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        match fields.into_iter().next() {
            Some((field, constraint)) => {
                ItemError::validation(field, constraint.unwrap_or_else(|| "is invalid".into()))
            }
            None => ItemError::validation("body", "is invalid"),
        }
    }
}

fn describe(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("failed '{}' check", error.code))
}
