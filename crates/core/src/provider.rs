//! Analysis Provider Trait
//!
//! Defines the common interface for everything that can perform an analysis
//! kind and hand back a `ResultModel`: the live HTTP service, the simulated
//! local backend, and test doubles.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderResult;
use crate::kind::AnalysisKind;
use crate::model::ResultModel;

/// Which backend family a provider belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProviderMode {
    /// Requests go to the external analysis service.
    Live,
    /// Canned fixtures are returned after an artificial delay.
    #[default]
    Simulated,
}

impl std::fmt::Display for ProviderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderMode::Live => write!(f, "live"),
            ProviderMode::Simulated => write!(f, "simulated"),
        }
    }
}

impl std::str::FromStr for ProviderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" | "remote" => Ok(ProviderMode::Live),
            "simulated" | "demo" | "sim" => Ok(ProviderMode::Simulated),
            _ => Err(format!("Unknown provider mode: {}", s)),
        }
    }
}

/// Trait that all analysis providers must implement.
///
/// A provider performs exactly one exchange per `fetch` call. It does not retry
/// and does not validate the source text beyond what its backend requires.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Returns the provider name for identification.
    fn name(&self) -> &'static str;

    /// Returns the backend family of this provider.
    fn mode(&self) -> ProviderMode;

    /// Run `kind` against `text` and return the normalized result.
    async fn fetch(&self, kind: AnalysisKind, text: &str) -> ProviderResult<ResultModel>;

    /// Check if the provider is reachable.
    ///
    /// Local providers are always healthy.
    async fn health_check(&self) -> ProviderResult<()> {
        Ok(())
    }
}
