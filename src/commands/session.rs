//! Session Commands
//!
//! Edit the buffer, switch views, clear, and read the rendered views.

use crate::models::response::{CommandResponse, SourceInfo};
use crate::models::session::ViewTab;
use crate::services::presentation::{Presentation, PresentationController};
use crate::state::AppState;

/// Replace the buffer with edited text.
pub async fn set_source_text(state: &AppState, text: String) -> CommandResponse<SourceInfo> {
    let mut session = state.session().write().await;
    session.set_source_text(text);
    CommandResponse::ok(SourceInfo {
        name: session.source_name().map(str::to_string),
        line_count: session.line_count(),
        byte_len: session.source_text().len(),
    })
}

/// Bring `tab` to the front.
pub async fn select_tab(state: &AppState, tab: ViewTab) -> CommandResponse<ViewTab> {
    state.session().write().await.select_tab(tab);
    CommandResponse::ok(tab)
}

/// Reset the session. Runs still in flight are retired.
pub async fn clear_session(state: &AppState) -> CommandResponse<()> {
    state.session().write().await.clear();
    CommandResponse::ok(())
}

/// Render the current session.
pub async fn get_presentation(state: &AppState) -> CommandResponse<Presentation> {
    let session = state.session().read().await;
    CommandResponse::ok(PresentationController::new().render(&session))
}
