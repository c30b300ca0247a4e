//! Parsing for the date strings clients send and the fixed calendar-date
//! format used in every response.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// `Mon Jan 01 1990`
pub const DISPLAY_FORMAT: &str = "%a %b %d %Y";

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", DISPLAY_FORMAT];

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Parses a client supplied date. Anything without an offset is taken to be
/// UTC, dates without a time are midnight.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(value, format) {
            return Some(date.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(midnight(date));
        }
    }

    parse_partial_date(value)
}

/// Milliseconds since the unix epoch
pub fn date_from_millis(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() {
        return None;
    }
    Utc.timestamp_millis_opt(millis as i64).single()
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

// `YYYY-MM` and `YYYY`
fn parse_partial_date(value: &str) -> Option<DateTime<Utc>> {
    let mut parts = value.splitn(2, '-');
    let year = parts.next().filter(|y| y.len() == 4)?.parse::<i32>().ok()?;
    let month = match parts.next() {
        None => 1,
        Some(m) if m.len() == 2 => m.parse::<u32>().ok()?,
        Some(_) => return None,
    };
    NaiveDate::from_ymd_opt(year, month, 1).map(midnight)
}
