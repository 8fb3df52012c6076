//! Health Check Commands
//!
//! Reports the composed mode and whether the provider is reachable.

use analysis_workbench_core::ProviderMode;

use crate::models::response::{CommandResponse, HealthResponse};
use crate::state::AppState;

/// Get the health status of the workbench and its provider
pub async fn get_health(state: &AppState) -> CommandResponse<HealthResponse> {
    let provider = state.dispatcher().provider();
    let mode = provider.mode();
    let mut health = HealthResponse {
        mode,
        provider: provider.name().to_string(),
        service_url: (mode == ProviderMode::Live).then(|| state.config().base_url.clone()),
        ..Default::default()
    };

    match provider.health_check().await {
        Ok(()) => health.provider_reachable = true,
        Err(e) => {
            health.status = "degraded".to_string();
            health.provider_error = Some(e.to_string());
        }
    }

    CommandResponse::ok(health)
}

/// Get the application version
pub fn get_version() -> CommandResponse<String> {
    CommandResponse::ok(env!("CARGO_PKG_VERSION").to_string())
}
