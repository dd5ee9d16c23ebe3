use crate::{env_or_default, ConfigError, Environment, FromEnv};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::{DefaultFields, Format, Full};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Layer type of the log file sink.
pub type FileLayer<S> =
    tracing_subscriber::fmt::Layer<S, DefaultFields, Format<Full>, RollingFileAppender>;

/// Default filter for production: request and lifecycle logs, quiet SQL.
const PRODUCTION_FILTER: &str = "info,sqlx=warn,sea_orm=warn";

/// Default filter for development: verbose crate logs, statements at info.
const DEVELOPMENT_FILTER: &str = "debug,sqlx=info,sea_orm=info,hyper=info";

/// Log file written next to the working directory unless `LOG_FILE` says otherwise.
pub const DEFAULT_LOG_FILE: &str = "app.log";

/// Where log output goes besides stdout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    /// Plain-text copy of every event; `None` disables the file sink
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }
}

impl FromEnv for LogConfig {
    /// `LOG_FILE` (default `app.log`); an empty value or `off` disables the file.
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env_or_default("LOG_FILE", DEFAULT_LOG_FILE);
        let raw = raw.trim();

        let file = if raw.is_empty() || raw.eq_ignore_ascii_case("off") {
            None
        } else {
            Some(PathBuf::from(raw))
        };

        Ok(Self { file })
    }
}

/// Opens `path` for appending, creating the parent directory if needed.
///
/// The file is never rotated.
pub fn open_log_file(path: &Path) -> Result<RollingFileAppender, ConfigError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ConfigError::Unsupported {
            key: "LOG_FILE".to_string(),
            details: format!("'{}' does not name a file", path.display()),
        })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .map_err(|e| ConfigError::Unsupported {
            key: "LOG_FILE".to_string(),
            details: e.to_string(),
        })
}

/// Plain-text layer for the log file: no colours, timestamp, level, target.
pub fn file_layer<S>(writer: RollingFileAppender) -> FileLayer<S> {
    tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
}

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in main() before any fallible operations. Safe to call
/// multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize tracing with environment-aware configuration and error span capture.
///
/// - **Production** (`APP_ENV=production`): JSON lines, no module targets.
/// - **Development** (default): pretty, human-readable output.
///
/// Both variants install `tracing_error::ErrorLayer` so `eyre` reports carry
/// span traces. `RUST_LOG` overrides the default filter. When
/// `log_config.file` is set, every event is also appended to that file; if
/// the file cannot be opened, logging continues on stdout only.
///
/// Calling this more than once is harmless; later calls are ignored, which is
/// what tests rely on.
pub fn init_tracing(environment: &Environment, log_config: &LogConfig) {
    let is_production = environment.is_production();

    let (file_writer, file_error) = match log_config.file.as_deref().map(open_log_file) {
        Some(Ok(writer)) => (Some(writer), None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if is_production {
            EnvFilter::new(PRODUCTION_FILTER)
        } else {
            EnvFilter::new(DEVELOPMENT_FILTER)
        }
    });

    let result = if is_production {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(file_writer.map(file_layer))
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(file_writer.map(file_layer))
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => {
            info!(
                environment = ?environment,
                log_file = ?log_config.file,
                "Tracing initialized"
            );
            if let Some(e) = file_error {
                warn!("Logging to stdout only: {}", e);
            }
        }
        Err(_) => {
            debug!("Tracing already initialized, skipping re-initialization");
        }
    }
}
