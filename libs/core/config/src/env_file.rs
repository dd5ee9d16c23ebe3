//! `.env` file loading
//!
//! Values from the file only fill in variables that are not already set, so
//! the real environment always wins. A missing file is not an error.

use std::path::{Path, PathBuf};

use crate::ConfigError;

/// Load `.env` from the working directory or the nearest parent that has one.
///
/// Returns the path that was loaded, or `None` when there is no file.
pub fn load_dotenv() -> Result<Option<PathBuf>, ConfigError> {
    absent_is_ok(dotenv::dotenv())
}

/// Load a specific env file.
pub fn load_dotenv_from(path: &Path) -> Result<Option<PathBuf>, ConfigError> {
    absent_is_ok(dotenv::from_path(path).map(|_| path.to_path_buf()))
}

fn absent_is_ok(result: dotenv::Result<PathBuf>) -> Result<Option<PathBuf>, ConfigError> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(ConfigError::EnvFile(e.to_string())),
    }
}
