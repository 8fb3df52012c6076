//! Analysis Workbench Providers
//!
//! Implementations of `AnalysisProvider`:
//! - `RemoteProvider` - the external HTTP analysis service
//! - `SimulatedProvider` - canned fixtures after an artificial delay
//!
//! Also includes the HTTP client factory and the fixture set.

pub mod fixtures;
pub mod http_client;
pub mod remote;
pub mod simulated;

// Re-export main types
pub use fixtures::fixture;
pub use http_client::{build_http_client, HttpClientOptions};
pub use remote::{RemoteConfig, RemoteProvider, DEFAULT_BASE_URL};
pub use simulated::{SimulatedProvider, DEFAULT_LATENCY};
