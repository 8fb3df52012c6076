//! Out-of-Order Resolution Tests
//!
//! Two runs in flight at once, resolved in a controlled order. The result of
//! the most recently started run must win regardless of arrival order.

use std::sync::Arc;

use analysis_workbench::services::session::CommitOutcome;
use analysis_workbench::{AppState, WorkbenchConfig};
use analysis_workbench_core::{AnalysisKind, DispatchError, ProviderError};

use crate::support::{marked, GatedProvider};

fn gated_state() -> (AppState, Arc<GatedProvider>) {
    let provider = Arc::new(GatedProvider::default());
    let state = AppState::with_provider(WorkbenchConfig::default(), provider.clone());
    (state, provider)
}

async fn wait_for_sequence(state: &AppState, sequence: u64) {
    while state.session().read().await.latest_sequence() < sequence {
        tokio::task::yield_now().await;
    }
}

fn marker_of(state_result: Option<&analysis_workbench_core::ResultModel>) -> Option<String> {
    state_result.map(|r| r.tokens[0].literal_value.clone())
}

#[tokio::test]
async fn test_newer_run_resolving_first_is_kept() {
    let (state, provider) = gated_state();
    let first_gate = provider.gate("first");
    let second_gate = provider.gate("second");

    let dispatcher = state.dispatcher().clone();
    let first = tokio::spawn(async move {
        dispatcher.run_tracked(AnalysisKind::Lexical, "first").await
    });
    wait_for_sequence(&state, 1).await;

    let dispatcher = state.dispatcher().clone();
    let second = tokio::spawn(async move {
        dispatcher.run_tracked(AnalysisKind::Syntactic, "second").await
    });
    wait_for_sequence(&state, 2).await;

    second_gate.send(Ok(marked("second"))).unwrap();
    let second = second.await.unwrap().unwrap();
    assert_eq!(second.sequence, 2);
    assert_eq!(second.outcome, CommitOutcome::Applied);

    first_gate.send(Ok(marked("first"))).unwrap();
    let first = first.await.unwrap().unwrap();
    assert_eq!(first.sequence, 1);
    assert_eq!(first.outcome, CommitOutcome::Discarded);

    let session = state.session().read().await;
    assert_eq!(marker_of(session.last_result()).as_deref(), Some("second"));
    assert_eq!(session.active_kind(), Some(AnalysisKind::Syntactic));
    assert_eq!(session.status().message, "Syntactic analysis completed");
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_in_order_resolution_keeps_latest() {
    let (state, provider) = gated_state();
    let first_gate = provider.gate("first");
    let second_gate = provider.gate("second");

    let dispatcher = state.dispatcher().clone();
    let first = tokio::spawn(async move { dispatcher.run(AnalysisKind::Lexical, "first").await });
    wait_for_sequence(&state, 1).await;
    let dispatcher = state.dispatcher().clone();
    let second = tokio::spawn(async move { dispatcher.run(AnalysisKind::Lexical, "second").await });
    wait_for_sequence(&state, 2).await;

    first_gate.send(Ok(marked("first"))).unwrap();
    first.await.unwrap().unwrap();
    assert!(state.session().read().await.is_running());

    second_gate.send(Ok(marked("second"))).unwrap();
    second.await.unwrap().unwrap();

    let session = state.session().read().await;
    assert_eq!(marker_of(session.last_result()).as_deref(), Some("second"));
    assert!(!session.is_running());
}

#[tokio::test]
async fn test_late_success_after_newer_failure_is_discarded() {
    let (state, provider) = gated_state();
    let first_gate = provider.gate("first");
    let second_gate = provider.gate("second");

    let dispatcher = state.dispatcher().clone();
    let first = tokio::spawn(async move {
        dispatcher.run_tracked(AnalysisKind::Full, "first").await
    });
    wait_for_sequence(&state, 1).await;
    let dispatcher = state.dispatcher().clone();
    let second = tokio::spawn(async move { dispatcher.run(AnalysisKind::Full, "second").await });
    wait_for_sequence(&state, 2).await;

    second_gate
        .send(Err(ProviderError::network("connection reset")))
        .unwrap();
    assert!(matches!(
        second.await.unwrap(),
        Err(DispatchError::Transport(_))
    ));

    first_gate.send(Ok(marked("first"))).unwrap();
    let first = first.await.unwrap().unwrap();
    assert_eq!(first.outcome, CommitOutcome::Discarded);

    let session = state.session().read().await;
    assert!(session.last_result().is_none());
    assert!(session.transport_error().is_some());
}

#[tokio::test]
async fn test_clear_retires_in_flight_run() {
    let (state, provider) = gated_state();
    let gate = provider.gate("pending");

    let dispatcher = state.dispatcher().clone();
    let run = tokio::spawn(async move {
        dispatcher.run_tracked(AnalysisKind::Lexical, "pending").await
    });
    wait_for_sequence(&state, 1).await;

    analysis_workbench::clear_session(&state).await;
    gate.send(Ok(marked("ghost"))).unwrap();
    assert_eq!(run.await.unwrap().unwrap().outcome, CommitOutcome::Discarded);

    let session = state.session().read().await;
    assert!(session.last_result().is_none());
    assert_eq!(session.status().message, "Editor cleared");
}

#[tokio::test]
async fn test_blank_input_skips_provider() {
    let (state, provider) = gated_state();
    for kind in AnalysisKind::all() {
        let result = state.dispatcher().run(*kind, "  \n\t").await;
        assert_eq!(result.unwrap_err(), DispatchError::EmptyInput);
    }
    assert_eq!(provider.calls(), 0);
    assert_eq!(
        state.session().read().await.status().message,
        "Error: Editor is empty"
    );
}
