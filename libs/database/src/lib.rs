//! Database library providing the SQLite connector and shared utilities
//!
//! # Features
//!
//! - `sqlite` (default) - SQLite support with SeaORM
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::sqlite::{self, SqliteConfig};
//!
//! let config = SqliteConfig::new("sqlite://items.db?mode=rwc");
//! let db = sqlite::connect_from_config_with_retry(config, None).await?;
//! sqlite::check_health(&db).await?;
//! ```

pub mod common;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use common::{DatabaseError, DatabaseResult};
