use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

use super::SqliteConfig;
use crate::common::{RetryConfig, retry, retry_with_backoff};

/// Connect to a SQLite database with the default pool settings
///
/// # Example
/// ```ignore
/// let db = database::sqlite::connect("sqlite://items.db?mode=rwc").await?;
/// ```
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect_from_config(SqliteConfig::new(database_url)).await
}

/// Connect using a SqliteConfig
pub async fn connect_from_config(config: SqliteConfig) -> Result<DatabaseConnection, DbErr> {
    connect_with_options(config.into_connect_options()).await
}

/// Connect with custom connection options
pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!("Successfully connected to SQLite database");
    Ok(db)
}

/// Connect from config with automatic retry on failure
///
/// A missing directory or a locked file at startup are the usual transient
/// causes; query-time failures are never retried.
///
/// # Example
/// ```ignore
/// use database::sqlite::{SqliteConfig, connect_from_config_with_retry};
/// use database::common::RetryConfig;
///
/// let db = connect_from_config_with_retry(
///     SqliteConfig::from_env()?,
///     Some(RetryConfig::new().with_max_retries(5)),
/// )
/// .await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: SqliteConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    let options = config.into_connect_options();

    match retry_config {
        Some(policy) => {
            retry_with_backoff(|| connect_with_options(options.clone()), policy).await
        }
        None => retry(|| connect_with_options(options.clone())).await,
    }
}
