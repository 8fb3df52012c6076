//! Workflow Integration Tests
//!
//! Loading sources, clearing, and the console driving a whole session.

use std::time::Duration;

use analysis_workbench::console::run_with;
use analysis_workbench::models::session::ViewTab;
use analysis_workbench::services::presentation::{
    ListView, TreeView, DIAGNOSTICS_NOT_RUN, TOKENS_NOT_RUN, TREE_NOT_RUN,
};
use analysis_workbench::{
    clear_session, get_presentation, load_sample, load_source_file, run_analysis, AppState,
    WorkbenchConfig,
};
use analysis_workbench_core::AnalysisKind;

fn instant_state() -> AppState {
    AppState::new(WorkbenchConfig {
        simulated_latency_ms: 0,
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_load_file_then_analyze() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("program.rs");
    std::fs::write(&path, "fn main() {\n    let x = 5;\n}\n").unwrap();

    let state = instant_state();
    let info = load_source_file(&state, &path).await.data.unwrap();
    assert_eq!(info.name.as_deref(), Some("program.rs"));
    assert_eq!(info.line_count, 4);

    let presentation = get_presentation(&state).await.data.unwrap();
    assert_eq!(presentation.status.message, "File loaded: program.rs");
    // Loading does not run anything.
    assert_eq!(presentation.tokens, ListView::placeholder(TOKENS_NOT_RUN));

    assert!(run_analysis(&state, AnalysisKind::Lexical).await.success);
    let presentation = get_presentation(&state).await.data.unwrap();
    assert!(!presentation.tokens.entries().is_empty());
}

#[tokio::test]
async fn test_clear_restores_fresh_session() {
    let state = instant_state();
    load_sample(&state, Some("lexical-errors")).await;
    run_analysis(&state, AnalysisKind::Full).await;

    clear_session(&state).await;
    let presentation = get_presentation(&state).await.data.unwrap();
    assert_eq!(presentation.active_tab, ViewTab::Tokens);
    assert_eq!(presentation.tokens, ListView::placeholder(TOKENS_NOT_RUN));
    assert_eq!(
        presentation.diagnostics,
        ListView::placeholder(DIAGNOSTICS_NOT_RUN)
    );
    assert_eq!(presentation.tree, TreeView::Placeholder(TREE_NOT_RUN.to_string()));
    assert!(presentation.log_line.is_none());

    let session = state.session().read().await;
    assert_eq!(session.source_text(), "");
    assert!(session.active_kind().is_none());
}

#[tokio::test]
async fn test_console_session() {
    let state = instant_state();
    let script: &[u8] = b"example semantic-errors\nfull\ntab tree\nshow\nquit\nlex\n";
    run_with(state.clone(), script).await.unwrap();

    // Let the spawned analysis settle.
    for _ in 0..50 {
        if !state.session().read().await.is_running() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let session = state.session().read().await;
    assert_eq!(session.source_name(), Some("semantic-errors"));
    // `lex` came after `quit` and was never read.
    assert_eq!(session.active_kind(), Some(AnalysisKind::Full));
    assert_eq!(session.latest_sequence(), 1);
}
