/// Errors raised by the database crate's own checks.
///
/// Connection and query failures stay `sea_orm::DbErr` so callers can match
/// on pool timeouts and constraint violations directly.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
