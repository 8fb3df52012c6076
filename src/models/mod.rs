//! Data Models
//!
//! Data structures shared by commands and services.

pub mod response;
pub mod session;
pub mod settings;

pub use response::*;
pub use session::*;
pub use settings::*;
