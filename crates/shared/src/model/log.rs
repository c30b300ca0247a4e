use chrono::{DateTime, Utc};
use tracing::warn;

use crate::{api::payloads::LogQuery, model::date::parse_date};

/// Which of a user's exercises to return from a log request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogFilter {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub limit: Option<u64>,
}

impl LogFilter {
    /// Bounds that can't be parsed are left off rather than failing the request
    pub fn from_query(query: &LogQuery) -> Self {
        Self {
            from: parse_bound("from", query.from.as_deref()),
            to: parse_bound("to", query.to.as_deref()),
            limit: query.limit.as_deref().and_then(parse_limit),
        }
    }
}

fn parse_bound(name: &str, value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value.filter(|v| !v.is_empty())?;
    let date = parse_date(value);
    if date.is_none() {
        warn!(bound = name, value, "Ignoring unparseable date bound");
    }
    date
}

/// Reads the leading integer like `parseInt`, so `"5abc"` is 5. The sign is
/// dropped. Zero, and anything too large for SQLite's signed 64 bit integers,
/// means no limit.
pub fn parse_limit(value: &str) -> Option<u64> {
    let value = value.trim_start();
    let value = value
        .strip_prefix('-')
        .or_else(|| value.strip_prefix('+'))
        .unwrap_or(value);

    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());

    match value[..end].parse::<u64>() {
        Ok(limit) if limit > 0 && limit <= i64::MAX as u64 => Some(limit),
        _ => None,
    }
}
