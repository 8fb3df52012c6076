//! File Commands
//!
//! Load a source file or a built-in sample into the editor buffer.

use std::path::Path;

use tracing::{info, warn};

use crate::models::response::{CommandResponse, SourceInfo};
use crate::services::samples::{self, Sample, DEFAULT_SAMPLE};
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::paths::display_name;

const MAX_SOURCE_SIZE: u64 = 10_485_760; // 10MB

async fn read_source(path: &Path) -> AppResult<String> {
    let metadata = tokio::fs::metadata(path).await?;
    if metadata.is_dir() {
        return Err(AppError::validation(format!(
            "{} is a directory",
            path.display()
        )));
    }
    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(AppError::validation(format!(
            "File too large: {} bytes (max {})",
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    let bytes = tokio::fs::read(path).await?;
    String::from_utf8(bytes)
        .map_err(|_| AppError::validation(format!("{} is not a UTF-8 text file", path.display())))
}

/// Replace the editor buffer with the content of `path`.
///
/// On failure the buffer is left untouched and the status line reports the error.
pub async fn load_source_file(state: &AppState, path: &Path) -> CommandResponse<SourceInfo> {
    load_file_into_session(state, path).await.into()
}

async fn load_file_into_session(state: &AppState, path: &Path) -> AppResult<SourceInfo> {
    let text = match read_source(path).await {
        Ok(text) => text,
        Err(e) => {
            warn!("[Files] Failed to load {}: {}", path.display(), e);
            state
                .session()
                .write()
                .await
                .report_load_failure(format!("Error loading file: {}", e));
            return Err(e);
        }
    };

    let name = display_name(path);
    info!("[Files] Loaded {} ({} bytes)", path.display(), text.len());
    let mut session = state.session().write().await;
    session.load_source(name.clone(), text);
    Ok(SourceInfo {
        name: Some(name),
        line_count: session.line_count(),
        byte_len: session.source_text().len(),
    })
}

/// Replace the editor buffer with a built-in sample (the default one when
/// `name` is `None`).
pub async fn load_sample(state: &AppState, name: Option<&str>) -> CommandResponse<SourceInfo> {
    load_sample_into_session(state, name.unwrap_or(DEFAULT_SAMPLE))
        .await
        .into()
}

async fn load_sample_into_session(state: &AppState, name: &str) -> AppResult<SourceInfo> {
    let sample = samples::find(name)
        .ok_or_else(|| AppError::not_found(format!("sample '{}'", name)))?;

    let mut session = state.session().write().await;
    session.load_source(sample.name, sample.source);
    Ok(SourceInfo {
        name: Some(sample.name.to_string()),
        line_count: session.line_count(),
        byte_len: sample.source.len(),
    })
}

/// List the built-in samples.
pub fn list_samples() -> CommandResponse<Vec<Sample>> {
    CommandResponse::ok(samples::all().to_vec())
}
