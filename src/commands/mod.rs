//! Commands
//!
//! Entry points the console (or any other front end) calls.
//! Every command returns a `CommandResponse`.

pub mod analysis;
pub mod files;
pub mod health;
pub mod session;

pub use analysis::*;
pub use files::*;
pub use health::*;
pub use session::*;
