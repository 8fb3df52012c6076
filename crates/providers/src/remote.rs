//! Remote Analysis Provider
//!
//! Talks to the external analysis service:
//!
//! ```text
//! POST {base_url}/analyze/{lexico|sintactico|semantico|completo}
//! {"code": "<source text>", "developer": "<name>"?}
//! ```
//!
//! Every call is a single request/response exchange. Non-2xx statuses and
//! unparseable bodies are reported as errors; nothing is retried.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use analysis_workbench_core::error::{ProviderError, ProviderResult};
use analysis_workbench_core::normalize::decode_response;
use analysis_workbench_core::{AnalysisKind, AnalysisProvider, ProviderMode, ResultModel};

use crate::http_client::{build_http_client, HttpClientOptions};

/// Default address of a locally running analysis service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Settings for a `RemoteProvider`.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub base_url: String,
    /// Name recorded by the service in its log file names
    pub developer: Option<String>,
    pub request_timeout: Option<Duration>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            developer: None,
            request_timeout: None,
        }
    }
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    developer: Option<&'a str>,
}

/// Provider backed by the HTTP analysis service.
///
/// `Send + Sync`: the reqwest `Client` is internally arc'd and all fields are
/// immutable after construction.
pub struct RemoteProvider {
    client: reqwest::Client,
    base_url: Url,
    developer: Option<String>,
}

impl RemoteProvider {
    /// Create a provider. Fails when the base URL does not parse or the HTTP
    /// client cannot be built.
    pub fn new(config: &RemoteConfig) -> ProviderResult<Self> {
        let base_url = Url::parse(config.base_url.trim()).map_err(|e| {
            ProviderError::network(format!("invalid base URL '{}': {}", config.base_url, e))
        })?;
        let client = build_http_client(&HttpClientOptions {
            timeout: config.request_timeout,
            use_system_proxy: false,
        })?;
        Ok(Self {
            client,
            base_url,
            developer: config.developer.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Endpoint URL for `kind`. Any path and query on the base URL are
    /// preserved; a fragment is dropped.
    pub fn endpoint(&self, kind: AnalysisKind) -> ProviderResult<Url> {
        let mut url = self.base_url.clone();
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| {
                ProviderError::network(format!(
                    "base URL cannot carry a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["analyze", kind.endpoint_segment()]);
        Ok(url)
    }

    /// Map a reqwest transport error to `ProviderError`.
    fn map_reqwest_error(&self, err: reqwest::Error) -> ProviderError {
        if err.is_connect() {
            ProviderError::network(format!(
                "cannot connect to analysis service at {}: {}",
                self.base_url, err
            ))
        } else if err.is_timeout() {
            ProviderError::network(format!("request to analysis service timed out: {}", err))
        } else {
            ProviderError::network(err.to_string())
        }
    }
}

#[async_trait]
impl AnalysisProvider for RemoteProvider {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn mode(&self) -> ProviderMode {
        ProviderMode::Live
    }

    async fn fetch(&self, kind: AnalysisKind, text: &str) -> ProviderResult<ResultModel> {
        let url = self.endpoint(kind)?;
        debug!("[RemoteProvider] POST {} ({} bytes)", url, text.len());

        let body = AnalyzeRequest {
            code: text,
            developer: self.developer.as_deref(),
        };
        let response = self
            .client
            .post(url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            warn!(
                "[RemoteProvider] {} answered HTTP {}",
                url,
                status.as_u16()
            );
            return Err(ProviderError::HttpStatus {
                status: status.as_u16(),
                body: body_text,
            });
        }

        let body_text = response
            .text()
            .await
            .map_err(|e| ProviderError::network(format!("failed to read response body: {}", e)))?;
        decode_response(&body_text)
    }

    async fn health_check(&self) -> ProviderResult<()> {
        let response = self
            .client
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ProviderError::HttpStatus {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }
}
