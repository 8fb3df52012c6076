//! Analysis Commands
//!
//! Entry points for the four analysis actions.

use tracing::debug;

use analysis_workbench_core::AnalysisKind;

use crate::models::response::{AnalysisSummary, CommandResponse};
use crate::state::AppState;

/// Run `kind` over the current source buffer.
///
/// The buffer is snapshotted before dispatch, so edits made while the run is
/// in flight do not affect it.
pub async fn run_analysis(
    state: &AppState,
    kind: AnalysisKind,
) -> CommandResponse<AnalysisSummary> {
    let text = state.session().read().await.source_text().to_string();
    debug!("[Commands] run_analysis {} ({} bytes)", kind, text.len());

    match state.dispatcher().run(kind, &text).await {
        Ok(result) => CommandResponse::ok(AnalysisSummary::from_result(kind, &result)),
        Err(e) => CommandResponse::err(e.to_string()),
    }
}
