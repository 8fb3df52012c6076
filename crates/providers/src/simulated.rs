//! Simulated Analysis Provider
//!
//! Local stand-in for the analysis service. Ignores the source text and
//! returns the fixture for the requested kind after a fixed delay, so the
//! workbench behaves like it is waiting on the network.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use analysis_workbench_core::error::ProviderResult;
use analysis_workbench_core::{AnalysisKind, AnalysisProvider, ProviderMode, ResultModel};

use crate::fixtures::fixture;

/// Default artificial latency.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

/// Provider that serves canned fixtures.
#[derive(Debug, Clone)]
pub struct SimulatedProvider {
    latency: Duration,
}

impl SimulatedProvider {
    pub fn new() -> Self {
        Self::with_latency(DEFAULT_LATENCY)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisProvider for SimulatedProvider {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn mode(&self) -> ProviderMode {
        ProviderMode::Simulated
    }

    async fn fetch(&self, kind: AnalysisKind, _text: &str) -> ProviderResult<ResultModel> {
        debug!(
            "[SimulatedProvider] serving {} fixture after {:?}",
            kind, self.latency
        );
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(fixture(kind))
    }
}
