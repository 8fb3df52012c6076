//! Session State
//!
//! The single mutable store of a workbench session: the source buffer, the
//! active analysis kind, the last committed result, the active view tab and
//! the status line.
//!
//! Runs are sequence-numbered. `begin_run` hands out strictly increasing
//! numbers and `commit` only applies a result whose number is at least the
//! last settled one, so a slow older run can never overwrite the result of a
//! newer run that already resolved. `clear` retires every run started before
//! it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use analysis_workbench_core::{AnalysisKind, ProviderMode, ResultModel};

use crate::models::session::{StatusLevel, StatusLine, ViewTab};

/// Sequence number of an analysis run.
pub type RunSequence = u64;

/// What `commit` did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitOutcome {
    /// The result is now `last_result`.
    Applied,
    /// A newer run already settled, or the session was cleared since.
    Discarded,
}

/// Mutable state of one workbench session.
#[derive(Debug, Clone)]
pub struct SessionState {
    source_text: String,
    source_name: Option<String>,
    mode: ProviderMode,
    active_kind: Option<AnalysisKind>,
    last_result: Option<ResultModel>,
    last_result_at: Option<DateTime<Utc>>,
    active_tab: ViewTab,
    status: StatusLine,
    transport_error: Option<String>,
    /// Highest sequence handed out by `begin_run`
    latest_started: RunSequence,
    /// Highest sequence that was applied or failed as the latest run
    last_settled: RunSequence,
    /// Runs with a sequence at or below this were started before a clear
    retired_through: RunSequence,
}

impl SessionState {
    pub fn new(mode: ProviderMode) -> Self {
        Self {
            source_text: String::new(),
            source_name: None,
            mode,
            active_kind: None,
            last_result: None,
            last_result_at: None,
            active_tab: ViewTab::default(),
            status: StatusLine::ready(),
            transport_error: None,
            latest_started: 0,
            last_settled: 0,
            retired_through: 0,
        }
    }

    // ── Accessors ──────────────────────────────────────────────────────

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    /// Number of lines shown in the editor gutter. An empty buffer has one.
    pub fn line_count(&self) -> usize {
        self.source_text.split('\n').count()
    }

    pub fn mode(&self) -> ProviderMode {
        self.mode
    }

    pub fn active_kind(&self) -> Option<AnalysisKind> {
        self.active_kind
    }

    pub fn last_result(&self) -> Option<&ResultModel> {
        self.last_result.as_ref()
    }

    pub fn last_result_at(&self) -> Option<DateTime<Utc>> {
        self.last_result_at
    }

    pub fn active_tab(&self) -> ViewTab {
        self.active_tab
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Message of the latest run's transport failure, until the next commit or clear.
    pub fn transport_error(&self) -> Option<&str> {
        self.transport_error.as_deref()
    }

    pub fn log_reference(&self) -> Option<&str> {
        self.last_result
            .as_ref()
            .and_then(|r| r.log_reference.as_deref())
    }

    /// Whether the most recently started run has not resolved yet.
    pub fn is_running(&self) -> bool {
        self.latest_started > self.last_settled && self.latest_started > self.retired_through
    }

    pub fn latest_sequence(&self) -> RunSequence {
        self.latest_started
    }

    // ── Source buffer ──────────────────────────────────────────────────

    /// Replace the buffer after an edit.
    pub fn set_source_text(&mut self, text: impl Into<String>) {
        self.source_text = text.into();
    }

    /// Replace the buffer with the content of a loaded file or sample.
    pub fn load_source(&mut self, name: impl Into<String>, text: impl Into<String>) {
        let name = name.into();
        self.source_text = text.into();
        self.status = StatusLine::new(StatusLevel::Success, format!("File loaded: {}", name));
        self.source_name = Some(name);
    }

    /// Record a failed load without touching the buffer.
    pub fn report_load_failure(&mut self, message: impl Into<String>) {
        self.status = StatusLine::new(StatusLevel::Error, message);
    }

    // ── View selection ─────────────────────────────────────────────────

    /// Explicit user tab choice. Holds until the next commit with diagnostics.
    pub fn select_tab(&mut self, tab: ViewTab) {
        self.active_tab = tab;
    }

    // ── Run lifecycle ──────────────────────────────────────────────────

    /// Analysis refused because the buffer is blank.
    pub fn reject_empty_input(&mut self) {
        self.status = StatusLine::new(StatusLevel::Error, "Error: Editor is empty");
    }

    /// Start a run of `kind` and return its sequence number.
    pub fn begin_run(&mut self, kind: AnalysisKind) -> RunSequence {
        self.latest_started += 1;
        self.active_kind = Some(kind);
        self.status = StatusLine::new(
            StatusLevel::Loading,
            format!("Running {} analysis...", kind.label()),
        );
        self.latest_started
    }

    /// Offer the result of run `sequence`.
    pub fn commit(&mut self, sequence: RunSequence, result: ResultModel) -> CommitOutcome {
        if sequence <= self.retired_through || sequence < self.last_settled {
            debug!(
                "[Session] Discarding result of run {} (settled {}, retired through {})",
                sequence, self.last_settled, self.retired_through
            );
            return CommitOutcome::Discarded;
        }

        if result.has_diagnostics() {
            self.active_tab = ViewTab::Errors;
        }
        if sequence == self.latest_started {
            let label = self.active_kind.map(|k| k.label()).unwrap_or("Analysis");
            self.status = StatusLine::new(
                StatusLevel::Success,
                format!("{} analysis completed", label),
            );
        }
        self.last_result = Some(result);
        self.last_result_at = Some(Utc::now());
        self.transport_error = None;
        self.last_settled = sequence;
        CommitOutcome::Applied
    }

    /// Report that run `sequence` failed. Only the latest run's failure is
    /// surfaced; `last_result` is never touched. Returns whether it was surfaced.
    pub fn fail(&mut self, sequence: RunSequence, message: impl Into<String>) -> bool {
        if sequence <= self.retired_through || sequence != self.latest_started {
            return false;
        }
        let message = message.into();
        self.status = StatusLine::new(
            StatusLevel::Error,
            format!("Analysis failed: {}", message),
        );
        self.transport_error = Some(message);
        self.active_tab = ViewTab::Errors;
        self.last_settled = self.last_settled.max(sequence);
        true
    }

    /// Reset the session to its freshly opened state, keeping the mode.
    /// Runs still in flight are retired.
    pub fn clear(&mut self) {
        self.source_text.clear();
        self.source_name = None;
        self.active_kind = None;
        self.last_result = None;
        self.last_result_at = None;
        self.transport_error = None;
        self.active_tab = ViewTab::default();
        self.retired_through = self.latest_started;
        self.status = StatusLine::new(StatusLevel::Success, "Editor cleared");
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(ProviderMode::default())
    }
}
