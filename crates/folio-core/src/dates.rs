//! Date parsing for content ordering and ISO 8601 checks.
//!
//! Content files carry dates as display strings. Anything a visitor would
//! read as a calendar date is accepted: full RFC 3339 timestamps, naive
//! date-times, `YYYY-MM-DD`, `YYYY-MM`, and bare years.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Sentinel values of `endDate` that mean "still ongoing".
pub const PRESENT_SENTINELS: [&str; 2] = ["present", "current"];

/// Parse a content date string into a calendar date.
///
/// Returns `None` for anything that is not an ISO 8601 date.
#[must_use]
pub fn parse_content_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
            return Some(ts.date());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    // Partial dates: pad to the first day of the month / year.
    match value.len() {
        7 => NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").ok(),
        4 if value.bytes().all(|b| b.is_ascii_digit()) => {
            NaiveDate::parse_from_str(&format!("{value}-01-01"), "%Y-%m-%d").ok()
        }
        _ => None,
    }
}

/// Whether a value is one of the "ongoing" sentinels (case-insensitive).
#[must_use]
pub fn is_present_sentinel(value: &str) -> bool {
    let value = value.trim();
    PRESENT_SENTINELS
        .iter()
        .any(|sentinel| value.eq_ignore_ascii_case(sentinel))
}

/// Sort key for an optional date: newest first, missing or unparseable last.
///
/// Compare two keys with `b.cmp(&a)` style descending order; `None` sorts
/// below every real date.
#[must_use]
pub fn sort_key(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(parse_content_date)
}
