//! SQLite test infrastructure
//!
//! `TestDatabase::new()` gives every test its own private in-memory
//! database. `TestDatabase::file_backed()` uses a throwaway file with a real
//! connection pool, for tests that need several connections writing at once.

use database::sqlite::{SqliteConfig, connect_from_config};
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

/// Test database wrapper that ensures proper cleanup
///
/// A file-backed database lives in a temporary directory that is removed
/// when this struct is dropped.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
    pub connection_string: String,
    _dir: Option<TempDir>,
}

impl TestDatabase {
    /// Create a private in-memory database
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Create the schema, then build your repository from db.connection()
    /// # }
    /// ```
    pub async fn new() -> Self {
        let config = SqliteConfig::in_memory();
        let connection_string = config.url().to_string();

        let connection = connect_from_config(config)
            .await
            .expect("Failed to open in-memory test database");

        tracing::debug!("In-memory test database ready");

        Self {
            connection,
            connection_string,
            _dir: None,
        }
    }

    /// Create a database file in a fresh temporary directory, pooled with
    /// up to `max_connections` connections
    pub async fn file_backed(max_connections: u32) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("test.db");
        let connection_string = format!("sqlite://{}?mode=rwc", path.display());

        let config = SqliteConfig::new(connection_string.clone())
            .with_pool_size(max_connections, 1);

        let connection = connect_from_config(config)
            .await
            .expect("Failed to open file-backed test database");

        tracing::debug!(path = %path.display(), "File-backed test database ready");

        Self {
            connection,
            connection_string,
            _dir: Some(dir),
        }
    }

    /// Get a handle to the pool (cheap clone)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
