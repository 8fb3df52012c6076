//! HTTP Client Factory
//!
//! Provides a factory function for building the reqwest client used by the
//! remote analysis provider.

use std::time::Duration;

use analysis_workbench_core::error::{ProviderError, ProviderResult};

/// Options for the shared HTTP client.
#[derive(Debug, Clone, Default)]
pub struct HttpClientOptions {
    /// Whole-request timeout. `None` leaves timing to the OS network stack.
    pub timeout: Option<Duration>,
    /// Honor `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub use_system_proxy: bool,
}

/// Build a `reqwest::Client` with the given options.
///
/// - `use_system_proxy == false` -> explicitly disable proxy (`no_proxy`), ignoring env vars
/// - `timeout == None` -> no client-side request timeout
pub fn build_http_client(options: &HttpClientOptions) -> ProviderResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(concat!(
        "analysis-workbench/",
        env!("CARGO_PKG_VERSION")
    ));
    if !options.use_system_proxy {
        builder = builder.no_proxy();
    }
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| ProviderError::network(format!("failed to build HTTP client: {}", e)))
}
