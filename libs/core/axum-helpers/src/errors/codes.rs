//! Error codes carried by every error response.
//!
//! `as_str()` is what clients match on, `code()` is what dashboards and log
//! queries filter by. Client errors live in 1000-1999 and storage errors in
//! 2000-2999; numbers are never recycled.
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::Conflict;
//! assert_eq!(code.as_str(), "CONFLICT");
//! assert_eq!(code.code(), 1008);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A field rule was broken (empty name, over-long description, id <= 0)
    ValidationError,
    /// Path id is not an integer
    InvalidId,
    /// Body is not JSON of the expected shape
    JsonExtraction,
    /// No item or route matches
    NotFound,
    /// Name already taken
    Conflict,

    /// Query or connection failure
    DatabaseError,
    /// No pooled connection became free in time
    DatabasePoolTimeout,
    /// Pool was closed (shutdown)
    DatabasePoolClosed,
    DatabaseUnhandled,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidId => "INVALID_ID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::DatabasePoolTimeout => "DATABASE_POOL_TIMEOUT",
            Self::DatabasePoolClosed => "DATABASE_POOL_CLOSED",
            Self::DatabaseUnhandled => "DATABASE_UNHANDLED",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidId => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::Conflict => 1008,

            Self::DatabaseError => 2003,
            Self::DatabasePoolTimeout => 2013,
            Self::DatabasePoolClosed => 2014,
            Self::DatabaseUnhandled => 2099,
        }
    }

    /// Message used when the failure has nothing safer or more specific to say.
    ///
    /// Storage errors always use it so driver text never reaches clients.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidId => "Invalid id format",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::Conflict => "Resource already exists",
            Self::DatabaseError => "Database error occurred",
            Self::DatabasePoolTimeout => "Database is busy, try again later",
            Self::DatabasePoolClosed => "Database is unavailable",
            Self::DatabaseUnhandled => "Unexpected database error",
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.code() >= 2000
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorCode; 9] = [
        ErrorCode::ValidationError,
        ErrorCode::InvalidId,
        ErrorCode::JsonExtraction,
        ErrorCode::NotFound,
        ErrorCode::Conflict,
        ErrorCode::DatabaseError,
        ErrorCode::DatabasePoolTimeout,
        ErrorCode::DatabasePoolClosed,
        ErrorCode::DatabaseUnhandled,
    ];

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<_> = ALL.iter().map(ErrorCode::code).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), ALL.len());
    }

    #[test]
    fn test_only_storage_codes_are_server_errors() {
        assert!(!ErrorCode::Conflict.is_server_error());
        assert!(!ErrorCode::InvalidId.is_server_error());
        assert!(ErrorCode::DatabasePoolTimeout.is_server_error());
    }

    #[test]
    fn test_display_matches_serde() {
        for code in ALL {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code));

            let back: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(back, code);
        }
    }
}
