//! Analysis Workbench - Application Library
//!
//! Orchestration around an external source-code analysis service:
//! - Commands called by the front end
//! - Services: dispatcher, session store, presentation
//! - Configuration loading
//! - Data models and utilities
//! - A line-oriented console front end

pub mod commands;
pub mod console;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used items from commands
pub use commands::{
    clear_session, get_health, get_presentation, get_version, list_samples, load_sample,
    load_source_file, run_analysis, select_tab, set_source_text,
};
pub use models::response::*;
pub use models::settings::WorkbenchConfig;
pub use state::AppState;
pub use utils::error::{AppError, AppResult};
