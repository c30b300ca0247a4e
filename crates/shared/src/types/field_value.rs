use std::fmt;

use serde::{Deserialize, Serialize};

/// A body field that may arrive as a JSON number, a JSON boolean or as text
/// (always text for url-encoded forms). Casting to the model's type happens
/// during validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl FieldValue {
    /// Name of the type that was sent, used in cast failure messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Number(_) => "number",
            FieldValue::Bool(_) => "boolean",
            FieldValue::Text(_) => "string",
        }
    }

    /// Casts the value to text, numbers and booleans are rendered as sent
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(s) => s,
            other => other.to_string(),
        }
    }

    /// Empty strings, `false` and zero are treated the same as a missing value
    pub fn is_falsy(&self) -> bool {
        match self {
            FieldValue::Number(n) => *n == 0.0 || n.is_nan(),
            FieldValue::Bool(b) => !b,
            FieldValue::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => n.fmt(f),
            FieldValue::Bool(b) => b.fmt(f),
            FieldValue::Text(s) => s.fmt(f),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}
