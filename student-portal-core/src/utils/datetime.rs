//! Timestamp display helpers
//!
//! The backend is unknown, so `created_at` is parsed leniently:
//! - RFC 3339 (`2024-03-01T10:00:00Z`)
//! - RFC 2822, which is what Flask's `jsonify` emits (`Fri, 01 Mar 2024 10:00:00 GMT`)
//! - naive `YYYY-MM-DD HH:MM:SS[.f]`, as stored by SQLite
//! - Unix timestamps in seconds or milliseconds

use chrono::{DateTime, NaiveDateTime, Utc};

/// Shown when the server did not send a timestamp
pub const MISSING: &str = "N/A";

/// Parse a server timestamp into UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.parse::<i64>().ok().and_then(parse_unix_timestamp);
    }

    None
}

/// Format `created_at` for the records table.
///
/// Parseable timestamps become `YYYY-MM-DD`; anything else is shown as sent.
pub fn display_date(raw: Option<&str>) -> String {
    match raw {
        None => MISSING.to_string(),
        Some(s) if s.trim().is_empty() => MISSING.to_string(),
        Some(s) => parse_timestamp(s).map_or_else(
            || s.to_string(),
            |dt| dt.format("%Y-%m-%d").to_string(),
        ),
    }
}

/// Seconds or milliseconds, told apart by magnitude
fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}
