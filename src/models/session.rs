//! Session Models
//!
//! View-selection and status types shared by the session store and the
//! presentation layer.

use serde::{Deserialize, Serialize};

/// Result view currently in front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewTab {
    #[default]
    Tokens,
    Errors,
    Tree,
}

impl ViewTab {
    pub fn all() -> &'static [ViewTab] {
        &[ViewTab::Tokens, ViewTab::Errors, ViewTab::Tree]
    }

    pub fn title(&self) -> &'static str {
        match self {
            ViewTab::Tokens => "Tokens",
            ViewTab::Errors => "Errors",
            ViewTab::Tree => "Tree",
        }
    }
}

impl std::fmt::Display for ViewTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewTab::Tokens => write!(f, "tokens"),
            ViewTab::Errors => write!(f, "errors"),
            ViewTab::Tree => write!(f, "tree"),
        }
    }
}

impl std::str::FromStr for ViewTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tokens" | "token" => Ok(ViewTab::Tokens),
            "errors" | "error" | "diagnostics" => Ok(ViewTab::Errors),
            "tree" | "ast" => Ok(ViewTab::Tree),
            _ => Err(format!("Unknown view tab: {}", s)),
        }
    }
}

/// Severity of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Ready,
    Loading,
    Success,
    Error,
}

/// The workbench status bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLine {
    pub level: StatusLevel,
    pub message: String,
}

impl StatusLine {
    pub fn ready() -> Self {
        Self::new(StatusLevel::Ready, "Ready")
    }

    pub fn new(level: StatusLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.level == StatusLevel::Loading
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::ready()
    }
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Status: {}", self.message)
    }
}
