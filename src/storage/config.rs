//! JSON Configuration Management
//!
//! Reads the workbench configuration file. The file is optional and never
//! written: the workbench keeps no persisted local state.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::models::settings::WorkbenchConfig;
use crate::utils::error::{AppError, AppResult};
use crate::utils::paths::config_path;

/// Configuration service for loading workbench settings
#[derive(Debug)]
pub struct ConfigService {
    config_path: Option<PathBuf>,
    config: WorkbenchConfig,
}

impl ConfigService {
    /// Load the configuration from the default path, then apply environment
    /// overrides and validate.
    pub fn new() -> AppResult<Self> {
        let path = config_path().ok();
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Load from `path` (when it exists) and apply overrides from `lookup`.
    pub fn load_with<F>(path: Option<PathBuf>, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path.as_deref() {
            Some(p) if p.exists() => {
                info!("[Config] Loading {}", p.display());
                Self::load_from_file(p)?
            }
            _ => {
                debug!("[Config] No config file, using defaults");
                WorkbenchConfig::default()
            }
        };

        config.apply_overrides(lookup).map_err(AppError::config)?;
        config.validate().map_err(AppError::validation)?;

        Ok(Self {
            config_path: path,
            config,
        })
    }

    /// Load configuration from a file
    fn load_from_file(path: &Path) -> AppResult<WorkbenchConfig> {
        let content = fs::read_to_string(path)?;
        let config: WorkbenchConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Get the current configuration
    pub fn get_config(&self) -> &WorkbenchConfig {
        &self.config
    }

    /// Take the configuration out of the service
    pub fn into_config(self) -> WorkbenchConfig {
        self.config
    }

    /// Path the configuration was looked up at, if one could be resolved
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}
