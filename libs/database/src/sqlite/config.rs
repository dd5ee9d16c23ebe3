use sea_orm::ConnectOptions;
use std::time::Duration;

#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or_default};

/// File next to the working directory, created on first start.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://items.db?mode=rwc";

/// SQLite connection pool configuration
///
/// In-memory databases (`sqlite::memory:`) live only as long as the
/// connection that created them, so they are always pinned to a single
/// connection that is never recycled.
///
/// # Example
///
/// ```ignore
/// use database::sqlite::SqliteConfig;
///
/// let config = SqliteConfig::new("sqlite://items.db?mode=rwc");
/// let options = config.into_connect_options();
/// ```
#[derive(Clone, Debug)]
pub struct SqliteConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout_secs: u64,

    /// Connection idle timeout in seconds (ignored for in-memory databases)
    pub idle_timeout_secs: u64,

    /// Enable SQL statement logging
    pub sqlx_logging: bool,
}

impl SqliteConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Private in-memory database, used by tests.
    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:")
    }

    pub fn with_pool_size(mut self, max_connections: u32, min_connections: u32) -> Self {
        self.max_connections = max_connections;
        self.min_connections = min_connections;
        self
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Get a reference to the database URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Convert this config into SeaORM ConnectOptions
    pub fn into_connect_options(self) -> ConnectOptions {
        let in_memory = self.is_in_memory();
        let mut opt = ConnectOptions::new(self.url);

        opt.acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .sqlx_logging(self.sqlx_logging);

        if in_memory {
            opt.max_connections(1).min_connections(1);
        } else {
            opt.max_connections(self.max_connections)
                .min_connections(self.min_connections.min(self.max_connections))
                .idle_timeout(Duration::from_secs(self.idle_timeout_secs));
        }

        opt
    }

    /// Rejects URLs for other database engines.
    pub fn validate(&self) -> Result<(), String> {
        if self.url.starts_with("sqlite:") {
            Ok(())
        } else {
            Err(format!(
                "only sqlite URLs are supported, got '{}'",
                self.url.split("://").next().unwrap_or_default()
            ))
        }
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            min_connections: 1,
            acquire_timeout_secs: 8,
            idle_timeout_secs: 300,
            sqlx_logging: false,
        }
    }
}

/// Load SqliteConfig from environment variables
///
/// - `DATABASE_URL` (default: `sqlite://items.db?mode=rwc`)
/// - `DB_MAX_CONNECTIONS` (default: 5)
/// - `DB_MIN_CONNECTIONS` (default: 1)
/// - `DB_ACQUIRE_TIMEOUT_SECS` (default: 8)
/// - `DB_IDLE_TIMEOUT_SECS` (default: 300)
/// - `DB_SQLX_LOGGING` (default: false)
#[cfg(feature = "config")]
impl FromEnv for SqliteConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            url: env_or_default("DATABASE_URL", DEFAULT_DATABASE_URL),
            max_connections: env_parse_or_default("DB_MAX_CONNECTIONS", "5")?,
            min_connections: env_parse_or_default("DB_MIN_CONNECTIONS", "1")?,
            acquire_timeout_secs: env_parse_or_default("DB_ACQUIRE_TIMEOUT_SECS", "8")?,
            idle_timeout_secs: env_parse_or_default("DB_IDLE_TIMEOUT_SECS", "300")?,
            sqlx_logging: env_parse_or_default("DB_SQLX_LOGGING", "false")?,
        };

        config.validate().map_err(|details| ConfigError::Unsupported {
            key: "DATABASE_URL".to_string(),
            details,
        })?;

        Ok(config)
    }
}
