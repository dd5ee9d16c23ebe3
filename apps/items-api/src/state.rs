//! Application state management.
//!
//! This module defines the shared application state passed to all request handlers.
//! The state contains:
//! - Configuration
//! - SQLite connection pool

use sea_orm::DatabaseConnection;

/// Shared application state.
///
/// This struct is cloned for each handler (inexpensive Arc clones), providing access to:
/// - Application configuration
/// - SQLite connection pool
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// SeaORM connection (cloneable, shares underlying connection pool)
    pub db: DatabaseConnection,
}
