//! Simulated Fixtures
//!
//! Fixed results returned by `SimulatedProvider`, one per analysis kind.
//!
//! | kind      | tokens | diagnostics                      | tree |
//! |-----------|--------|----------------------------------|------|
//! | Lexical   | 11     | none                             | no   |
//! | Syntactic | 11     | none                             | yes  |
//! | Semantic  | none   | none                             | no   |
//! | Full      | 15     | lexical, syntactic, semantic     | yes  |
//!
//! The lexical and syntactic fixtures describe `fn main() {\n let x = 5;\n}`.
//! The full fixture describes a program with an unrecognized `@` symbol and a
//! type mismatch.

use serde_json::json;

use analysis_workbench_core::{
    AnalysisKind, Diagnostic, DiagnosticCategory, ResultModel, SyntaxTree, Token,
};

/// Fixture for `kind`. Every call builds an equal value.
pub fn fixture(kind: AnalysisKind) -> ResultModel {
    match kind {
        AnalysisKind::Lexical => lexical_fixture(),
        AnalysisKind::Syntactic => syntactic_fixture(),
        AnalysisKind::Semantic => semantic_fixture(),
        AnalysisKind::Full => full_fixture(),
    }
}

fn log_name(kind: AnalysisKind) -> Option<String> {
    Some(format!("{}-simulated.txt", kind.endpoint_segment()))
}

fn main_tokens() -> Vec<Token> {
    vec![
        Token::new("FN", "fn").at_line(1),
        Token::new("IDENTIFIER", "main").at_line(1),
        Token::new("LPAREN", "(").at_line(1),
        Token::new("RPAREN", ")").at_line(1),
        Token::new("LBRACE", "{").at_line(1),
        Token::new("LET", "let").at_line(2),
        Token::new("IDENTIFIER", "x").at_line(2),
        Token::new("ASSIGN", "=").at_line(2),
        Token::new("NUMBER", "5").at_line(2),
        Token::new("SEMICOLON", ";").at_line(2),
        Token::new("RBRACE", "}").at_line(3),
    ]
}

fn lexical_fixture() -> ResultModel {
    ResultModel {
        tokens: main_tokens(),
        diagnostics: Vec::new(),
        tree: None,
        log_reference: log_name(AnalysisKind::Lexical),
        server_status: Some("success".to_string()),
    }
}

fn syntactic_fixture() -> ResultModel {
    ResultModel {
        tokens: main_tokens(),
        diagnostics: Vec::new(),
        tree: Some(SyntaxTree::new(json!({
            "type": "program",
            "items": [{
                "type": "function",
                "name": "main",
                "params": [],
                "body": [{
                    "type": "let",
                    "name": "x",
                    "mutable": false,
                    "value": {"type": "int_literal", "value": 5}
                }]
            }]
        }))),
        log_reference: log_name(AnalysisKind::Syntactic),
        server_status: Some("success".to_string()),
    }
}

fn semantic_fixture() -> ResultModel {
    ResultModel {
        tokens: Vec::new(),
        diagnostics: Vec::new(),
        tree: None,
        log_reference: log_name(AnalysisKind::Semantic),
        server_status: Some("success".to_string()),
    }
}

fn full_fixture() -> ResultModel {
    ResultModel {
        tokens: vec![
            Token::new("FN", "fn").at_line(1),
            Token::new("IDENTIFIER", "main").at_line(1),
            Token::new("LPAREN", "(").at_line(1),
            Token::new("RPAREN", ")").at_line(1),
            Token::new("LBRACE", "{").at_line(1),
            Token::new("LET", "let").at_line(2),
            Token::new("IDENTIFIER", "x").at_line(2),
            Token::new("ASSIGN", "=").at_line(2),
            Token::new("NUMBER", "5").at_line(2),
            Token::new("SEMICOLON", ";").at_line(2),
            Token::new("LET", "let").at_line(3),
            Token::new("IDENTIFIER", "y").at_line(3),
            Token::new("ASSIGN", "=").at_line(3),
            Token::new("STRING", "\"text\"").at_line(3),
            Token::new("RBRACE", "}").at_line(4),
        ],
        diagnostics: vec![
            Diagnostic::new(
                "Lexical Error",
                DiagnosticCategory::Lexical,
                "Unrecognized symbol '@'",
            )
            .at_line(2),
            Diagnostic::new(
                "Syntax Error",
                DiagnosticCategory::Syntactic,
                "Unexpected token after expression: expected ';'",
            )
            .at_line(2),
            Diagnostic::new(
                "Semantic Error",
                DiagnosticCategory::Semantic,
                "Mismatched types: cannot add 'i32' and '&str' in declaration of 'y'",
            )
            .at_line(3),
        ],
        tree: Some(SyntaxTree::new(json!({
            "type": "program",
            "items": [{
                "type": "function",
                "name": "main",
                "params": [],
                "body": [
                    {"type": "let", "name": "x", "mutable": false,
                     "value": {"type": "int_literal", "value": 5}},
                    {"type": "let", "name": "y", "mutable": false,
                     "value": {"type": "binary", "op": "+",
                               "left": {"type": "ident", "name": "x"},
                               "right": {"type": "str_literal", "value": "text"}}}
                ]
            }]
        }))),
        log_reference: log_name(AnalysisKind::Full),
        server_status: Some("error".to_string()),
    }
}
