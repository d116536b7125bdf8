//! Data directory and database path resolution.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

pub const DATA_DIR_ENV: &str = "MINDTOEYE_DATA_DIR";
pub const DATABASE_FILE: &str = "mindtoeye.db";

#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the system data directory.
    #[error("Cannot determine system data directory")]
    NoDataDir,

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },
}

/// Root for application data.
///
/// `MINDTOEYE_DATA_DIR` wins; otherwise the platform data directory
/// (e.g. `~/.local/share/mindtoeye`).
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::data_dir()
        .map(|d| d.join("mindtoeye"))
        .ok_or(PathError::NoDataDir)
}

/// Path to the `SQLite` database file, creating its directory.
pub fn database_path() -> Result<PathBuf, PathError> {
    let data_dir = data_root()?;
    ensure_dir(&data_dir)?;
    Ok(data_dir.join(DATABASE_FILE))
}

pub fn ensure_dir(dir: &std::path::Path) -> Result<(), PathError> {
    fs::create_dir_all(dir).map_err(|e| PathError::CreateFailed {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })
}
