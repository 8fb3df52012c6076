//! Presentation Controller
//!
//! Renders the session into the three result views (tokens, diagnostics,
//! syntax tree) plus the status and log lines.
//!
//! Every empty view carries an explanatory placeholder, and "nothing run yet"
//! is always worded differently from "ran, nothing to show".

use serde::Serialize;

use analysis_workbench_core::{DiagnosticCategory, Token};

use crate::models::session::{StatusLine, ViewTab};
use crate::services::session::SessionState;

pub const TOKENS_NOT_RUN: &str = "Run a lexical analysis to see the tokens";
pub const TOKENS_EMPTY: &str = "The analysis produced no tokens";
pub const DIAGNOSTICS_NOT_RUN: &str = "Run an analysis to see diagnostics";
pub const DIAGNOSTICS_NONE: &str = "No diagnostics detected";
pub const TREE_NOT_RUN: &str = "Run a syntactic analysis to see the syntax tree";
pub const TREE_UNAVAILABLE: &str = "No syntax tree is available for this analysis";

/// Title of the synthetic entry shown for a transport failure.
pub const CONNECTION_ERROR_TITLE: &str = "Connection Error";

/// Content of a list view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ListView<T> {
    Placeholder(String),
    Entries(Vec<T>),
}

impl<T> ListView<T> {
    pub fn placeholder(text: &str) -> Self {
        Self::Placeholder(text.to_string())
    }

    pub fn entries(&self) -> &[T] {
        match self {
            ListView::Entries(entries) => entries,
            ListView::Placeholder(_) => &[],
        }
    }
}

/// Content of the tree view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TreeView {
    Placeholder(String),
    Dump(String),
}

/// A diagnostic as shown in the list, with its styling class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticEntry {
    pub title: String,
    pub category: DiagnosticCategory,
    pub style_class: &'static str,
    pub line: Option<u32>,
    pub message: String,
}

impl DiagnosticEntry {
    /// `Line 4: message`, or `Line N/A: message` without a line.
    pub fn location_text(&self) -> String {
        match self.line {
            Some(line) => format!("Line {}: {}", line, self.message),
            None => format!("Line N/A: {}", self.message),
        }
    }
}

/// Everything the UI shows for a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    pub active_tab: ViewTab,
    pub status: StatusLine,
    pub running: bool,
    pub log_line: Option<String>,
    pub tokens: ListView<Token>,
    pub diagnostics: ListView<DiagnosticEntry>,
    pub tree: TreeView,
}

/// Stateless renderer from `SessionState` to `Presentation`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PresentationController;

impl PresentationController {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, session: &SessionState) -> Presentation {
        Presentation {
            active_tab: session.active_tab(),
            status: session.status().clone(),
            running: session.is_running(),
            log_line: session.log_reference().map(|log| format!("Logs: {}", log)),
            tokens: self.token_view(session),
            diagnostics: self.diagnostic_view(session),
            tree: self.tree_view(session),
        }
    }

    fn token_view(&self, session: &SessionState) -> ListView<Token> {
        match session.last_result() {
            None => ListView::placeholder(TOKENS_NOT_RUN),
            Some(result) if result.tokens.is_empty() => ListView::placeholder(TOKENS_EMPTY),
            Some(result) => ListView::Entries(result.tokens.clone()),
        }
    }

    fn diagnostic_view(&self, session: &SessionState) -> ListView<DiagnosticEntry> {
        let mut entries = Vec::new();
        if let Some(message) = session.transport_error() {
            entries.push(DiagnosticEntry {
                title: CONNECTION_ERROR_TITLE.to_string(),
                category: DiagnosticCategory::Unclassified,
                style_class: DiagnosticCategory::Unclassified.style_class(),
                line: None,
                message: message.to_string(),
            });
        }

        match session.last_result() {
            None if entries.is_empty() => return ListView::placeholder(DIAGNOSTICS_NOT_RUN),
            Some(result) if result.diagnostics.is_empty() && entries.is_empty() => {
                return ListView::placeholder(DIAGNOSTICS_NONE)
            }
            Some(result) => {
                entries.extend(result.diagnostics.iter().map(|d| DiagnosticEntry {
                    title: d.title.clone(),
                    category: d.category,
                    style_class: d.category.style_class(),
                    line: d.source_line,
                    message: d.message.clone(),
                }));
            }
            None => {}
        }
        ListView::Entries(entries)
    }

    fn tree_view(&self, session: &SessionState) -> TreeView {
        match session.last_result() {
            None => TreeView::Placeholder(TREE_NOT_RUN.to_string()),
            Some(result) => match &result.tree {
                Some(tree) => TreeView::Dump(tree.render()),
                None => TreeView::Placeholder(TREE_UNAVAILABLE.to_string()),
            },
        }
    }

    /// Plain-text rendering for a terminal: status, tab bar and the active view.
    pub fn render_text(&self, presentation: &Presentation) -> String {
        let mut out = String::new();
        out.push_str(&presentation.status.to_string());
        out.push('\n');
        if let Some(log_line) = &presentation.log_line {
            out.push_str(log_line);
            out.push('\n');
        }

        let tabs: Vec<String> = ViewTab::all()
            .iter()
            .map(|tab| {
                if *tab == presentation.active_tab {
                    format!("[{}]", tab.title())
                } else {
                    format!(" {} ", tab.title())
                }
            })
            .collect();
        out.push_str(&tabs.join(" "));
        out.push('\n');

        out.push_str(&self.render_tab_text(presentation, presentation.active_tab));
        out
    }

    /// Plain-text body of one view.
    pub fn render_tab_text(&self, presentation: &Presentation, tab: ViewTab) -> String {
        let mut out = String::new();
        match tab {
            ViewTab::Tokens => match &presentation.tokens {
                ListView::Placeholder(text) => push_line(&mut out, text),
                ListView::Entries(tokens) => {
                    for token in tokens {
                        let line = match token.source_line {
                            Some(line) => format!(
                                "{} | {} (Line {})",
                                token.kind, token.literal_value, line
                            ),
                            None => format!("{} | {}", token.kind, token.literal_value),
                        };
                        push_line(&mut out, &line);
                    }
                }
            },
            ViewTab::Errors => match &presentation.diagnostics {
                ListView::Placeholder(text) => push_line(&mut out, text),
                ListView::Entries(entries) => {
                    for entry in entries {
                        push_line(
                            &mut out,
                            &format!("{} [{}]", entry.title, entry.category),
                        );
                        push_line(&mut out, &format!("  {}", entry.location_text()));
                    }
                }
            },
            ViewTab::Tree => match &presentation.tree {
                TreeView::Placeholder(text) => push_line(&mut out, text),
                TreeView::Dump(dump) => push_line(&mut out, dump),
            },
        }
        out
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
