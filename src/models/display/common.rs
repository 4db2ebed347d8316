//! Common display helpers

use chrono::{DateTime, NaiveDateTime};

/// Shown for fields the server left out
pub const MISSING: &str = "-";

/// Render an API timestamp as `YYYY-MM-DD HH:MM UTC`.
///
/// Azure DevOps returns RFC 3339 with up to seven fractional digits, and
/// sometimes omits the offset. Unparseable values are shown as-is.
pub fn format_timestamp(timestamp: Option<&str>) -> String {
    let Some(raw) = timestamp else {
        return MISSING.to_string();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.naive_utc().format("%Y-%m-%d %H:%M UTC").to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format("%Y-%m-%d %H:%M UTC").to_string();
    }

    raw.to_string()
}

pub fn or_missing(value: Option<&str>) -> String {
    value.unwrap_or(MISSING).to_string()
}
