//! Application State
//!
//! Shared state of a workbench session: the configuration, the session store
//! and the dispatcher composed with its provider.

use std::sync::Arc;
use tokio::sync::RwLock;

use analysis_workbench_core::AnalysisProvider;

use crate::models::settings::WorkbenchConfig;
use crate::services::dispatcher::AnalysisDispatcher;
use crate::services::providers::build_provider;
use crate::services::session::SessionState;
use crate::utils::error::AppResult;

/// Application state handed to every command. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Configuration the session was composed with
    config: Arc<WorkbenchConfig>,
    /// The single session store
    session: Arc<RwLock<SessionState>>,
    /// Dispatcher bound to the configured provider
    dispatcher: Arc<AnalysisDispatcher>,
}

impl AppState {
    /// Compose the state with the provider selected by `config.mode`
    pub fn new(config: WorkbenchConfig) -> AppResult<Self> {
        let provider = build_provider(&config)?;
        Ok(Self::with_provider(config, provider))
    }

    /// Compose the state with an explicit provider
    pub fn with_provider(config: WorkbenchConfig, provider: Arc<dyn AnalysisProvider>) -> Self {
        let session = Arc::new(RwLock::new(SessionState::new(provider.mode())));
        let dispatcher = Arc::new(AnalysisDispatcher::new(provider, session.clone()));
        Self {
            config: Arc::new(config),
            session,
            dispatcher,
        }
    }

    pub fn config(&self) -> &WorkbenchConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<RwLock<SessionState>> {
        &self.session
    }

    pub fn dispatcher(&self) -> &Arc<AnalysisDispatcher> {
        &self.dispatcher
    }
}
