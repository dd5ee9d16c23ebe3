use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig, tracing::LogConfig};

// Import SQLite config from the database library
use database::sqlite::SqliteConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: SqliteConfig,
    pub server: ServerConfig,
    pub logging: LogConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = SqliteConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let logging = LogConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            logging,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(
            [
                "APP_ENV",
                "HOST",
                "PORT",
                "DATABASE_URL",
                "DB_MAX_CONNECTIONS",
                "LOG_FILE",
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "items_api");
                assert_eq!(config.server.address(), "0.0.0.0:8000");
                assert_eq!(config.database.url(), "sqlite://items.db?mode=rwc");
                assert_eq!(config.database.max_connections, 5);
                assert_eq!(config.logging.file, Some("app.log".into()));
                assert!(config.environment.is_development());
            },
        );
    }

    #[test]
    fn test_postgres_url_rejected() {
        temp_env::with_var("DATABASE_URL", Some("postgres://localhost/items"), || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn test_env_file_supplies_database_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "DATABASE_URL=sqlite://from-env-file.db?mode=rwc\n").unwrap();

        temp_env::with_var_unset("DATABASE_URL", || {
            core_config::load_dotenv_from(&path).unwrap();
            let config = Config::from_env().unwrap();
            assert_eq!(config.database.url(), "sqlite://from-env-file.db?mode=rwc");
        });
    }

    #[test]
    fn test_invalid_port_rejected() {
        temp_env::with_var("PORT", Some("not-a-port"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
