//! Services
//!
//! Business logic services for the workbench.
//! Services handle the core functionality and are called by commands.

pub mod dispatcher;
pub mod presentation;
pub mod providers;
pub mod samples;
pub mod session;

pub use dispatcher::{AnalysisDispatcher, CompletedRun};
pub use presentation::{Presentation, PresentationController};
pub use providers::build_provider;
pub use session::{CommitOutcome, RunSequence, SessionState};
