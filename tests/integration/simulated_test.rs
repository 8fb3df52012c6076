//! Simulated Mode Integration Tests
//!
//! Runs the workbench against canned fixtures with the clock paused, so the
//! artificial latency elapses instantly.

use std::time::Duration;

use analysis_workbench::models::session::{StatusLevel, ViewTab};
use analysis_workbench::services::presentation::{
    ListView, TreeView, DIAGNOSTICS_NONE, TOKENS_EMPTY,
};
use analysis_workbench::{
    get_presentation, run_analysis, select_tab, set_source_text, AppState, WorkbenchConfig,
};
use analysis_workbench_core::{AnalysisKind, DiagnosticCategory};

const SOURCE: &str = "fn main() {\n    let x = 5;\n}\n";

async fn simulated_state() -> AppState {
    let state = AppState::new(WorkbenchConfig::default()).unwrap();
    set_source_text(&state, SOURCE.to_string()).await;
    state
}

// ============================================================================
// Clean runs
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_lexical_run_keeps_selected_tab() {
    let state = simulated_state().await;
    select_tab(&state, ViewTab::Tree).await;

    let summary = run_analysis(&state, AnalysisKind::Lexical).await.data.unwrap();
    assert_eq!(summary.token_count, 11);
    assert_eq!(summary.diagnostic_count, 0);

    let presentation = get_presentation(&state).await.data.unwrap();
    assert_eq!(presentation.active_tab, ViewTab::Tree);
    assert_eq!(presentation.status.message, "Lexical analysis completed");
    assert_eq!(presentation.tokens.entries()[0].kind, "FN");
    assert_eq!(presentation.diagnostics, ListView::placeholder(DIAGNOSTICS_NONE));
    assert_eq!(
        presentation.log_line.as_deref(),
        Some("Logs: lexico-simulated.txt")
    );
}

#[tokio::test(start_paused = true)]
async fn test_syntactic_run_renders_tree() {
    let state = simulated_state().await;
    run_analysis(&state, AnalysisKind::Syntactic).await;

    let presentation = get_presentation(&state).await.data.unwrap();
    assert!(matches!(presentation.tree, TreeView::Dump(_)));
}

#[tokio::test(start_paused = true)]
async fn test_semantic_run_with_nothing_to_show() {
    let state = simulated_state().await;
    run_analysis(&state, AnalysisKind::Semantic).await;

    let presentation = get_presentation(&state).await.data.unwrap();
    assert_eq!(presentation.tokens, ListView::placeholder(TOKENS_EMPTY));
    assert_eq!(presentation.diagnostics, ListView::placeholder(DIAGNOSTICS_NONE));
}

// ============================================================================
// Runs with diagnostics
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_full_run_switches_to_errors() {
    let state = simulated_state().await;
    select_tab(&state, ViewTab::Tokens).await;

    let summary = run_analysis(&state, AnalysisKind::Full).await.data.unwrap();
    assert_eq!(summary.diagnostic_count, 3);
    assert!(summary.has_tree);

    let presentation = get_presentation(&state).await.data.unwrap();
    assert_eq!(presentation.active_tab, ViewTab::Errors);
    let categories: Vec<DiagnosticCategory> = presentation
        .diagnostics
        .entries()
        .iter()
        .map(|d| d.category)
        .collect();
    assert_eq!(
        categories,
        vec![
            DiagnosticCategory::Lexical,
            DiagnosticCategory::Syntactic,
            DiagnosticCategory::Semantic
        ]
    );

    // The user may still switch away afterwards.
    select_tab(&state, ViewTab::Tree).await;
    let presentation = get_presentation(&state).await.data.unwrap();
    assert_eq!(presentation.active_tab, ViewTab::Tree);
}

// ============================================================================
// Loading state
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_loading_state_visible_during_latency() {
    let state = simulated_state().await;
    let task_state = state.clone();
    let handle =
        tokio::spawn(async move { run_analysis(&task_state, AnalysisKind::Lexical).await });

    // Let the run start; the paused clock keeps the provider asleep.
    tokio::task::yield_now().await;
    {
        let session = state.session().read().await;
        assert!(session.is_running());
        assert_eq!(session.status().level, StatusLevel::Loading);
        assert_eq!(session.status().message, "Running Lexical analysis...");
        assert!(session.last_result().is_none());
    }

    tokio::time::advance(Duration::from_millis(800)).await;
    assert!(handle.await.unwrap().success);
    assert!(!state.session().read().await.is_running());
}
