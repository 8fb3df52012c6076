//! Analysis Workbench Core
//!
//! Foundational types for the Analysis Workbench workspace: the normalized
//! result model, response normalization, the provider trait and the error
//! types. This crate has zero dependencies on application-level code (HTTP
//! client, runtime, console).
//!
//! ## Module Organization
//!
//! - `error` - Error types (`ProviderError`, `DispatchError`)
//! - `kind` - The four analysis kinds and their endpoint names
//! - `model` - `Token`, `Diagnostic`, `SyntaxTree`, `ResultModel`
//! - `normalize` - Raw wire types and the total normalization function
//! - `provider` - The `AnalysisProvider` trait and `ProviderMode`

pub mod error;
pub mod kind;
pub mod model;
pub mod normalize;
pub mod provider;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{DispatchError, DispatchResult, ProviderError, ProviderResult};

// ── Result Model ───────────────────────────────────────────────────────
pub use kind::AnalysisKind;
pub use model::{Diagnostic, DiagnosticCategory, ResultModel, SyntaxTree, Token};
pub use normalize::{decode_response, decode_value, normalize, RawAnalysisResponse};

// ── Providers ──────────────────────────────────────────────────────────
pub use provider::{AnalysisProvider, ProviderMode};
