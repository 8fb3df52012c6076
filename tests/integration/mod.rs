//! Integration Tests Module
//!
//! End-to-end workbench scenarios driven through `AppState` and the command
//! layer: simulated runs, out-of-order resolution, live runs against a stub
//! analysis service, and file loading.

// Shared helpers (gated provider, stub HTTP service)
mod support;

// Simulated-mode scenarios
mod simulated_test;

// Out-of-order resolution and clear during flight
mod dispatch_race_test;

// Live mode against a local stub service
mod live_test;

// Source loading and presentation placeholders
mod workflow_test;
