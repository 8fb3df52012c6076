//! Cross-Platform Path Utilities
//!
//! Resolves the workbench directory (~/.analysis-workbench/).

use std::path::PathBuf;

use crate::utils::error::{AppError, AppResult};

/// Name of the per-user workbench directory.
pub const WORKBENCH_DIR_NAME: &str = ".analysis-workbench";

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the workbench directory (~/.analysis-workbench/)
pub fn workbench_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(WORKBENCH_DIR_NAME))
}

/// Get the config file path (~/.analysis-workbench/config.json)
pub fn config_path() -> AppResult<PathBuf> {
    Ok(workbench_dir()?.join("config.json"))
}

/// Final path component, used as the display name of a loaded file.
pub fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
