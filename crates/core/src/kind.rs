//! Analysis Kinds
//!
//! The four staged checks that can be requested against a source buffer.

use serde::{Deserialize, Serialize};

/// One of the staged analyses the service offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    Lexical,
    Syntactic,
    Semantic,
    Full,
}

impl AnalysisKind {
    /// Path segment of the remote endpoint (`/analyze/{segment}`).
    pub fn endpoint_segment(&self) -> &'static str {
        match self {
            AnalysisKind::Lexical => "lexico",
            AnalysisKind::Syntactic => "sintactico",
            AnalysisKind::Semantic => "semantico",
            AnalysisKind::Full => "completo",
        }
    }

    /// Human-readable label used in status messages.
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisKind::Lexical => "Lexical",
            AnalysisKind::Syntactic => "Syntactic",
            AnalysisKind::Semantic => "Semantic",
            AnalysisKind::Full => "Full",
        }
    }

    /// Whether a successful run of this kind carries a syntax tree.
    pub fn produces_tree(&self) -> bool {
        matches!(self, AnalysisKind::Syntactic | AnalysisKind::Full)
    }

    /// Returns all kinds in pipeline order.
    pub fn all() -> &'static [AnalysisKind] {
        &[
            AnalysisKind::Lexical,
            AnalysisKind::Syntactic,
            AnalysisKind::Semantic,
            AnalysisKind::Full,
        ]
    }
}

impl std::fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisKind::Lexical => write!(f, "lexical"),
            AnalysisKind::Syntactic => write!(f, "syntactic"),
            AnalysisKind::Semantic => write!(f, "semantic"),
            AnalysisKind::Full => write!(f, "full"),
        }
    }
}

impl std::str::FromStr for AnalysisKind {
    type Err = String;

    /// Accepts the display names, the endpoint segments and the short console aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lexical" | "lexico" | "lex" => Ok(AnalysisKind::Lexical),
            "syntactic" | "sintactico" | "parse" | "syn" => Ok(AnalysisKind::Syntactic),
            "semantic" | "semantico" | "sem" => Ok(AnalysisKind::Semantic),
            "full" | "completo" | "all" => Ok(AnalysisKind::Full),
            _ => Err(format!("Unknown analysis kind: {}", s)),
        }
    }
}
