//! Field level checks shared by the request payloads. Each returns the failure
//! message without the field path, the caller decides which path to report.

use chrono::{DateTime, Utc};

use crate::{
    model::date::{date_from_millis, parse_date},
    types::FieldValue,
};

pub fn required_message(path: &str) -> String {
    format!("Path `{path}` is required.")
}

fn cast_message(kind: &str, value: &FieldValue, path: &str) -> String {
    format!(
        "Cast to {kind} failed for value \"{value}\" (type {}) at path \"{path}\"",
        value.type_name()
    )
}

/// Numbers and booleans are cast to text. Missing and empty strings both
/// count as absent.
pub fn require_text(value: Option<FieldValue>) -> Option<String> {
    value.map(FieldValue::into_text).filter(|v| !v.is_empty())
}

pub fn cast_duration(value: Option<&FieldValue>) -> Result<f64, String> {
    const PATH: &str = "duration";

    let value = match value {
        Some(FieldValue::Text(text)) if text.trim().is_empty() => {
            return Err(required_message(PATH))
        }
        Some(v) => v,
        None => return Err(required_message(PATH)),
    };

    let duration = match value {
        FieldValue::Number(n) => *n,
        FieldValue::Bool(_) => f64::NAN,
        FieldValue::Text(text) => text.trim().parse::<f64>().unwrap_or(f64::NAN),
    };

    if duration.is_finite() {
        Ok(duration)
    } else {
        Err(cast_message("Number", value, PATH))
    }
}

/// Falsy values fall back to `now`, strings are parsed, numbers are epoch
/// milliseconds
pub fn cast_date(value: Option<&FieldValue>, now: DateTime<Utc>) -> Result<DateTime<Utc>, String> {
    let value = match value {
        Some(v) if !v.is_falsy() => v,
        _ => return Ok(now),
    };

    let date = match value {
        FieldValue::Number(millis) => date_from_millis(*millis),
        FieldValue::Bool(_) => None,
        FieldValue::Text(text) => parse_date(text),
    };

    date.ok_or_else(|| cast_message("date", value, "date"))
}
