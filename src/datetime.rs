//! Date/time utilities for corkboard.
//!
//! Timestamps are stored as UTC TEXT columns in the database. The fixed-width
//! format keeps lexicographic order equal to chronological order.

use chrono::Utc;

/// Storage format for timestamps (microsecond precision, UTC).
const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Current UTC time in the database storage format.
pub fn now_utc_string() -> String {
    Utc::now().format(STORAGE_FORMAT).to_string()
}

/// Convert a database timestamp string to RFC 3339 for API responses.
///
/// The database stores times in UTC, so this replaces the separating space
/// with 'T' and appends 'Z'.
pub fn to_rfc3339(datetime_str: &str) -> String {
    format!("{}Z", datetime_str.replacen(' ', "T", 1))
}
