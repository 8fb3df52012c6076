//! Live Mode Integration Tests
//!
//! Drives the workbench against a local stub of the analysis service.

use analysis_workbench::models::session::{StatusLevel, ViewTab};
use analysis_workbench::services::presentation::{TreeView, CONNECTION_ERROR_TITLE};
use analysis_workbench::{
    get_health, get_presentation, run_analysis, set_source_text, AppState, WorkbenchConfig,
};
use analysis_workbench_core::{AnalysisKind, DiagnosticCategory, ProviderMode};

use crate::support::stub_service;

fn live_state(base_url: String) -> AppState {
    AppState::new(WorkbenchConfig {
        mode: ProviderMode::Live,
        base_url,
        request_timeout_secs: Some(5),
        ..Default::default()
    })
    .unwrap()
}

const FULL_RESPONSE: &str = r#"{
    "status": "error",
    "tokens": [
        {"type": "FN", "value": "fn", "line": 1},
        {"type": "IDENTIFIER", "value": "main", "line": 1}
    ],
    "errors": [
        {"type": "Error Léxico", "category": "Léxico", "message": "Illegal character '@'", "line": 2},
        {"type": "Error Semántico", "category": "SEMANTICO", "message": "Variable 'y' not declared"},
        {"type": "Warning", "category": "style", "message": "unused variable", "line": "n/a"}
    ],
    "ast": "Program(main)",
    "log_file": "completo-ana-19-10-2026.txt"
}"#;

#[tokio::test]
async fn test_live_full_run_then_transport_failure() {
    let base = stub_service(vec![
        ("200 OK", FULL_RESPONSE.to_string()),
        ("500 Internal Server Error", r#"{"detail":"boom"}"#.to_string()),
    ])
    .await;
    let state = live_state(base);
    set_source_text(&state, "fn main() {\n let x = @;\n}\n".to_string()).await;

    // First run: normalized service response.
    let summary = run_analysis(&state, AnalysisKind::Full).await.data.unwrap();
    assert_eq!(summary.token_count, 2);
    assert_eq!(summary.diagnostic_count, 3);

    let presentation = get_presentation(&state).await.data.unwrap();
    assert_eq!(presentation.active_tab, ViewTab::Errors);
    let entries = presentation.diagnostics.entries();
    assert_eq!(entries[0].category, DiagnosticCategory::Lexical);
    assert_eq!(entries[0].location_text(), "Line 2: Illegal character '@'");
    assert_eq!(entries[1].category, DiagnosticCategory::Semantic);
    assert_eq!(entries[2].category, DiagnosticCategory::Unclassified);
    assert_eq!(entries[2].line, None);
    assert_eq!(presentation.tree, TreeView::Dump("Program(main)".to_string()));
    assert_eq!(
        presentation.log_line.as_deref(),
        Some("Logs: completo-ana-19-10-2026.txt")
    );

    // Second run: the service fails; the stale result stays visible behind
    // the connection error.
    let response = run_analysis(&state, AnalysisKind::Full).await;
    assert!(!response.success);
    assert_eq!(
        response.error.as_deref(),
        Some("Transport error: HTTP error! status: 500")
    );

    let presentation = get_presentation(&state).await.data.unwrap();
    assert_eq!(presentation.status.level, StatusLevel::Error);
    assert_eq!(presentation.active_tab, ViewTab::Errors);
    let entries = presentation.diagnostics.entries();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].title, CONNECTION_ERROR_TITLE);
    assert_eq!(entries[0].message, "HTTP error! status: 500");
    assert_eq!(presentation.tokens.entries().len(), 2);
}

#[tokio::test]
async fn test_live_health_check() {
    let base = stub_service(vec![("200 OK", r#"{"message":"ok"}"#.to_string())]).await;
    let state = live_state(base.clone());

    let health = get_health(&state).await.data.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.service_url, Some(base));
    assert_eq!(health.mode, ProviderMode::Live);
    assert_eq!(health.provider, "remote");
}

#[tokio::test]
async fn test_live_unreachable_service_reports_degraded() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let state = live_state(format!("http://{}", addr));
    let health = get_health(&state).await.data.unwrap();
    assert_eq!(health.status, "degraded");
    assert!(!health.provider_reachable);
    assert!(health.provider_error.is_some());
}
