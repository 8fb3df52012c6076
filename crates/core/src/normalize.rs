//! Response Normalization
//!
//! The analysis service answers with heterogeneous shapes: lexical runs carry
//! no tree, semantic runs carry no tokens, clean runs carry no errors. The raw
//! wire types below accept all of them, and `normalize` turns any raw response
//! into a `ResultModel` with documented defaults:
//!
//! - missing `tokens` / `errors` become empty sequences, and so does a
//!   `tokens` / `errors` field that is not a list
//! - list items that are not objects are skipped
//! - a diagnostic without `category` is `Lexical`; a category that is not a
//!   known label (or not a string at all) is `Unclassified`
//! - a diagnostic without a usable `type` is titled `"Error"`
//! - a `line` that is not a positive integer is treated as unknown
//! - `ast` is present only when the field exists and is not `null`
//! - `log_file` is copied verbatim when it is a string
//!
//! Normalization is total. The only failure is a body that is not a JSON
//! object at all, which `decode_response` reports as `ProviderError::Decode`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ProviderError, ProviderResult};
use crate::model::{Diagnostic, DiagnosticCategory, ResultModel, SyntaxTree, Token};

/// Title used for diagnostics whose provider sent no `type`.
pub const DEFAULT_DIAGNOSTIC_TITLE: &str = "Error";

/// Raw token as sent on the wire: `{type, value, line?}`.
///
/// Every field is kept as raw JSON so that a wrongly typed field degrades to
/// a default instead of failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawToken {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<Value>,
    #[serde(default)]
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<Value>,
}

/// Raw diagnostic as sent on the wire: `{type?, category?, message, line?}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDiagnostic {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Value>,
    #[serde(default)]
    pub message: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<Value>,
}

/// Raw analysis response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAnalysisResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    #[serde(
        default,
        deserialize_with = "lenient_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub tokens: Option<Vec<RawToken>>,
    #[serde(
        default,
        deserialize_with = "lenient_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub errors: Option<Vec<RawDiagnostic>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ast: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<Value>,
}

/// A list field: anything but an array is absent, items that do not decode
/// as `T` are dropped.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

/// Parse a response body and normalize it.
pub fn decode_response(body: &str) -> ProviderResult<ResultModel> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ProviderError::decode(format!("invalid JSON body: {}", e)))?;
    decode_value(value)
}

/// Normalize an already-parsed JSON value. Non-objects are rejected.
pub fn decode_value(value: Value) -> ProviderResult<ResultModel> {
    if !value.is_object() {
        return Err(ProviderError::decode(format!(
            "expected a JSON object, got {}",
            json_type_name(&value)
        )));
    }
    let raw: RawAnalysisResponse = serde_json::from_value(value)
        .map_err(|e| ProviderError::decode(format!("unexpected response shape: {}", e)))?;
    Ok(normalize(raw))
}

/// Build a `ResultModel` from a raw response. Never fails.
pub fn normalize(raw: RawAnalysisResponse) -> ResultModel {
    let tokens = raw
        .tokens
        .unwrap_or_default()
        .into_iter()
        .map(normalize_token)
        .collect();

    let diagnostics = raw
        .errors
        .unwrap_or_default()
        .into_iter()
        .map(normalize_diagnostic)
        .collect();

    let tree = match raw.ast {
        None | Some(Value::Null) => None,
        Some(value) => Some(SyntaxTree::new(value)),
    };

    ResultModel {
        tokens,
        diagnostics,
        tree,
        log_reference: raw.log_file.as_ref().and_then(|v| v.as_str().map(str::to_string)),
        server_status: raw.status.as_ref().and_then(scalar_text),
    }
}

fn normalize_token(raw: RawToken) -> Token {
    Token {
        kind: raw.kind.as_ref().and_then(scalar_text).unwrap_or_default(),
        literal_value: value_to_text(&raw.value),
        source_line: raw.line.as_ref().and_then(positive_line),
    }
}

fn normalize_diagnostic(raw: RawDiagnostic) -> Diagnostic {
    Diagnostic {
        title: raw
            .title
            .as_ref()
            .and_then(scalar_text)
            .unwrap_or_else(|| DEFAULT_DIAGNOSTIC_TITLE.to_string()),
        category: match &raw.category {
            None | Some(Value::Null) => DiagnosticCategory::default(),
            Some(Value::String(label)) => DiagnosticCategory::from_label(label),
            Some(_) => DiagnosticCategory::Unclassified,
        },
        source_line: raw.line.as_ref().and_then(positive_line),
        message: value_to_text(&raw.message),
    }
}

/// Accepts `7` and `"7"`; rejects zero, negatives, fractions and anything else.
fn positive_line(value: &Value) -> Option<u32> {
    let line = match value {
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };
    if line == 0 {
        return None;
    }
    u32::try_from(line).ok()
}

/// Strings as-is, numbers and booleans in JSON form, anything else absent.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(_) | Value::Bool(_) => Some(value.to_string()),
        _ => None,
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl ResultModel {
    /// Wire form of this result. Normalizing it yields an equal `ResultModel`.
    pub fn to_raw(&self) -> RawAnalysisResponse {
        RawAnalysisResponse {
            status: self.server_status.clone().map(Value::String),
            tokens: Some(
                self.tokens
                    .iter()
                    .map(|t| RawToken {
                        kind: Some(Value::String(t.kind.clone())),
                        value: Value::String(t.literal_value.clone()),
                        line: t.source_line.map(Value::from),
                    })
                    .collect(),
            ),
            errors: Some(
                self.diagnostics
                    .iter()
                    .map(|d| RawDiagnostic {
                        title: Some(Value::String(d.title.clone())),
                        category: Some(Value::String(d.category.to_string())),
                        message: Value::String(d.message.clone()),
                        line: d.source_line.map(Value::from),
                    })
                    .collect(),
            ),
            ast: self.tree.as_ref().map(|t| t.as_value().clone()),
            log_file: self.log_reference.clone().map(Value::String),
        }
    }
}
