//! Analysis Dispatcher
//!
//! Runs one analysis against the provider the session was composed with and
//! reports the outcome to the session store.
//!
//! - blank text fails with `DispatchError::EmptyInput` before any provider call
//! - `active_kind` is set when the run begins, `last_result` only on success
//! - provider failures are wrapped into `DispatchError::Transport`
//! - in-flight runs are never cancelled; the session's sequence guard decides
//!   which result is kept

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use analysis_workbench_core::{
    AnalysisKind, AnalysisProvider, DispatchError, DispatchResult, ProviderMode, ResultModel,
};

use crate::services::session::{CommitOutcome, RunSequence, SessionState};

/// A resolved run, as seen by the caller.
#[derive(Debug, Clone)]
pub struct CompletedRun {
    pub sequence: RunSequence,
    pub outcome: CommitOutcome,
    pub result: ResultModel,
}

/// Chooses nothing at runtime: the provider is injected once at composition.
pub struct AnalysisDispatcher {
    provider: Arc<dyn AnalysisProvider>,
    session: Arc<RwLock<SessionState>>,
}

impl AnalysisDispatcher {
    pub fn new(provider: Arc<dyn AnalysisProvider>, session: Arc<RwLock<SessionState>>) -> Self {
        Self { provider, session }
    }

    pub fn provider(&self) -> &Arc<dyn AnalysisProvider> {
        &self.provider
    }

    pub fn mode(&self) -> ProviderMode {
        self.provider.mode()
    }

    /// Run `kind` against `text` and return the provider's result.
    ///
    /// The returned result may still have been discarded by the session if a
    /// newer run settled first; use `run_tracked` to observe that.
    pub async fn run(&self, kind: AnalysisKind, text: &str) -> DispatchResult<ResultModel> {
        self.run_tracked(kind, text).await.map(|run| run.result)
    }

    /// Like `run`, also reporting the run's sequence number and whether its
    /// result was committed.
    pub async fn run_tracked(
        &self,
        kind: AnalysisKind,
        text: &str,
    ) -> DispatchResult<CompletedRun> {
        if text.trim().is_empty() {
            self.session.write().await.reject_empty_input();
            debug!("[Dispatcher] Refusing {} analysis of blank input", kind);
            return Err(DispatchError::EmptyInput);
        }

        let sequence = self.session.write().await.begin_run(kind);
        info!(
            "[Dispatcher] Run {} started: {} analysis via {} provider",
            sequence,
            kind,
            self.provider.name()
        );

        match self.provider.fetch(kind, text).await {
            Ok(result) => {
                let outcome = self.session.write().await.commit(sequence, result.clone());
                info!(
                    "[Dispatcher] Run {} resolved: {} tokens, {} diagnostics ({:?})",
                    sequence,
                    result.tokens.len(),
                    result.diagnostics.len(),
                    outcome
                );
                Ok(CompletedRun {
                    sequence,
                    outcome,
                    result,
                })
            }
            Err(err) => {
                let err = DispatchError::from(err);
                warn!("[Dispatcher] Run {} failed: {}", sequence, err);
                let message = match &err {
                    DispatchError::Transport(message) => message.clone(),
                    other => other.to_string(),
                };
                self.session.write().await.fail(sequence, message);
                Err(err)
            }
        }
    }
}
