//! SQLite connector built on SeaORM

mod config;
mod connector;
mod health;

pub use config::{DEFAULT_DATABASE_URL, SqliteConfig};
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_options,
};
pub use health::check_health;
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
