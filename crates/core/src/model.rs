//! Result Model
//!
//! Canonical in-memory shape of one analysis run: tokens, categorized
//! diagnostics, an optional syntax tree and an optional log reference.
//! Instances are built by `normalize` (or by the simulated fixtures) and are
//! never mutated afterwards.

use serde::{Deserialize, Serialize};

/// A lexical token reported by the analysis engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token kind label (e.g. `IDENTIFIER`)
    pub kind: String,
    /// Literal text of the token
    pub literal_value: String,
    /// 1-based line, when the engine reported one
    pub source_line: Option<u32>,
}

impl Token {
    pub fn new(kind: impl Into<String>, literal_value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            literal_value: literal_value.into(),
            source_line: None,
        }
    }

    pub fn at_line(mut self, line: u32) -> Self {
        self.source_line = Some(line);
        self
    }
}

/// Analysis phase a diagnostic belongs to. Drives visual classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCategory {
    /// Also the fallback when a provider omits the category.
    #[default]
    Lexical,
    Syntactic,
    Semantic,
    Unclassified,
}

impl DiagnosticCategory {
    /// Decode a category label sent by a provider.
    ///
    /// English and Spanish labels are accepted, with or without accents.
    /// Anything else is `Unclassified`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "lexical" | "lexico" | "léxico" => Self::Lexical,
            "syntactic" | "syntax" | "sintactico" | "sintáctico" => Self::Syntactic,
            "semantic" | "semantico" | "semántico" => Self::Semantic,
            _ => Self::Unclassified,
        }
    }

    /// Style class a view attaches to a diagnostic of this category.
    pub fn style_class(&self) -> &'static str {
        match self {
            Self::Lexical => "diagnostic-lexical",
            Self::Syntactic => "diagnostic-syntactic",
            Self::Semantic => "diagnostic-semantic",
            Self::Unclassified => "diagnostic-unclassified",
        }
    }
}

impl std::fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical => write!(f, "lexical"),
            Self::Syntactic => write!(f, "syntactic"),
            Self::Semantic => write!(f, "semantic"),
            Self::Unclassified => write!(f, "unclassified"),
        }
    }
}

/// A single reported issue in the analyzed source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub title: String,
    pub category: DiagnosticCategory,
    pub source_line: Option<u32>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        title: impl Into<String>,
        category: DiagnosticCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category,
            source_line: None,
            message: message.into(),
        }
    }

    pub fn at_line(mut self, line: u32) -> Self {
        self.source_line = Some(line);
        self
    }
}

/// Opaque syntax tree. The core only knows how to dump it as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SyntaxTree(serde_json::Value);

impl SyntaxTree {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Indented textual dump. Trees the service already serialized to text are
    /// returned verbatim.
    pub fn render(&self) -> String {
        match &self.0 {
            serde_json::Value::String(text) => text.clone(),
            other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
        }
    }
}

/// Normalized outcome of one analysis run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultModel {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
    pub tree: Option<SyntaxTree>,
    /// Name of the log artifact the service persisted for this run
    pub log_reference: Option<String>,
    /// Informational `status` string reported by the service
    pub server_status: Option<String>,
}

impl ResultModel {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Number of diagnostics in each category, in category order.
    pub fn category_counts(&self) -> [(DiagnosticCategory, usize); 4] {
        let count = |category: DiagnosticCategory| {
            self.diagnostics
                .iter()
                .filter(|d| d.category == category)
                .count()
        };
        [
            (DiagnosticCategory::Lexical, count(DiagnosticCategory::Lexical)),
            (DiagnosticCategory::Syntactic, count(DiagnosticCategory::Syntactic)),
            (DiagnosticCategory::Semantic, count(DiagnosticCategory::Semantic)),
            (
                DiagnosticCategory::Unclassified,
                count(DiagnosticCategory::Unclassified),
            ),
        ]
    }
}
