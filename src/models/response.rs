//! Response Types
//!
//! Standard response types for all workbench commands.

use serde::{Deserialize, Serialize};

use analysis_workbench_core::{AnalysisKind, ProviderMode, ResultModel};

/// Generic command response for all workbench commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResponse<T> {
    /// Create a successful response with data
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response with message
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl<T> From<Result<T, crate::utils::error::AppError>> for CommandResponse<T> {
    fn from(result: Result<T, crate::utils::error::AppError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::err(e.to_string()),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub service: String,
    pub mode: ProviderMode,
    pub provider: String,
    /// Analysis service address, in live mode only
    pub service_url: Option<String>,
    pub provider_reachable: bool,
    pub provider_error: Option<String>,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            service: "analysis-workbench".to_string(),
            mode: ProviderMode::default(),
            provider: String::new(),
            service_url: None,
            provider_reachable: false,
            provider_error: None,
        }
    }
}

/// Outcome of one analysis command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub kind: AnalysisKind,
    pub token_count: usize,
    pub diagnostic_count: usize,
    pub has_tree: bool,
    pub log_reference: Option<String>,
}

impl AnalysisSummary {
    pub fn from_result(kind: AnalysisKind, result: &ResultModel) -> Self {
        Self {
            kind,
            token_count: result.tokens.len(),
            diagnostic_count: result.diagnostics.len(),
            has_tree: result.tree.is_some(),
            log_reference: result.log_reference.clone(),
        }
    }
}

/// Source buffer description returned by load commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInfo {
    pub name: Option<String>,
    pub line_count: usize,
    pub byte_len: usize,
}
