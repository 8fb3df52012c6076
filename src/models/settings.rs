//! Settings Models
//!
//! Workbench configuration and its environment overrides.

use serde::{Deserialize, Serialize};
use url::Url;

use analysis_workbench_core::ProviderMode;

/// Environment variable overriding `mode`.
pub const ENV_MODE: &str = "WORKBENCH_MODE";
/// Environment variable overriding `base_url`.
pub const ENV_API_URL: &str = "WORKBENCH_API_URL";
/// Environment variable overriding `simulated_latency_ms`.
pub const ENV_LATENCY_MS: &str = "WORKBENCH_LATENCY_MS";

/// Workbench configuration stored in config.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkbenchConfig {
    /// Which provider the session is composed with: "live" or "simulated"
    #[serde(default)]
    pub mode: ProviderMode,
    /// Base URL of the analysis service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Artificial latency of the simulated provider in milliseconds
    #[serde(default = "default_latency_ms")]
    pub simulated_latency_ms: u64,
    /// Developer name forwarded to the service for its log file names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    /// Client-side request timeout. Unset means no timeout is enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    analysis_workbench_providers::DEFAULT_BASE_URL.to_string()
}

fn default_latency_ms() -> u64 {
    800
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            mode: ProviderMode::default(),
            base_url: default_base_url(),
            simulated_latency_ms: default_latency_ms(),
            developer: None,
            request_timeout_secs: None,
        }
    }
}

impl WorkbenchConfig {
    /// Apply overrides read through `lookup` (normally `std::env::var`).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), String>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = lookup(ENV_MODE) {
            self.mode = mode.parse()?;
        }
        if let Some(url) = lookup(ENV_API_URL) {
            self.base_url = url;
        }
        if let Some(latency) = lookup(ENV_LATENCY_MS) {
            self.simulated_latency_ms = latency
                .trim()
                .parse()
                .map_err(|_| format!("Invalid {}: {}", ENV_LATENCY_MS, latency))?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let url = Url::parse(self.base_url.trim())
            .map_err(|e| format!("Invalid base_url '{}': {}", self.base_url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "Invalid base_url scheme: {}. Must be 'http' or 'https'",
                url.scheme()
            ));
        }

        if self.request_timeout_secs == Some(0) {
            return Err("request_timeout_secs must be at least 1 second".to_string());
        }

        Ok(())
    }
}
