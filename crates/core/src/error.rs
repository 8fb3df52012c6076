//! Core Error Types
//!
//! Defines the error types shared across the Analysis Workbench workspace.
//! These error types are dependency-free (only thiserror + std) to keep the core
//! crate lightweight.
//!
//! - `ProviderError` - what a provider reports for a single failed exchange
//! - `DispatchError` - what the dispatcher reports to its caller

use thiserror::Error;

/// Failure of a single provider exchange.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The request never produced a response (connect refused, DNS, reset).
    #[error("network error: {message}")]
    Network { message: String },

    /// The service answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16, body: String },

    /// The response body could not be parsed as a structured object.
    #[error("failed to decode analysis response: {message}")]
    Decode { message: String },
}

impl ProviderError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network {
            message: msg.into(),
        }
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode {
            message: msg.into(),
        }
    }
}

/// Result type alias for provider exchanges
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Error reported by the analysis dispatcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The source text was blank; no provider was called.
    #[error("Editor is empty")]
    EmptyInput,

    /// The provider failed. Decode failures collapse into this variant too.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl DispatchError {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}

impl From<ProviderError> for DispatchError {
    fn from(err: ProviderError) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Result type alias for dispatch runs
pub type DispatchResult<T> = Result<T, DispatchError>;
