//! Provider Composition
//!
//! Builds the one `AnalysisProvider` a session uses from the configured mode.
//! The mode is consulted here and nowhere else.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use analysis_workbench_core::{AnalysisProvider, ProviderMode};
use analysis_workbench_providers::{RemoteConfig, RemoteProvider, SimulatedProvider};

use crate::models::settings::WorkbenchConfig;
use crate::utils::error::AppResult;

/// Create the provider selected by `config.mode`.
pub fn build_provider(config: &WorkbenchConfig) -> AppResult<Arc<dyn AnalysisProvider>> {
    let provider: Arc<dyn AnalysisProvider> = match config.mode {
        ProviderMode::Live => {
            let remote = RemoteProvider::new(&RemoteConfig {
                base_url: config.base_url.trim().to_string(),
                developer: config.developer.clone(),
                request_timeout: config.request_timeout_secs.map(Duration::from_secs),
            })?;
            info!("[Providers] Live mode, service at {}", remote.base_url());
            Arc::new(remote)
        }
        ProviderMode::Simulated => {
            let latency = Duration::from_millis(config.simulated_latency_ms);
            info!("[Providers] Simulated mode, latency {:?}", latency);
            Arc::new(SimulatedProvider::with_latency(latency))
        }
    };
    Ok(provider)
}
