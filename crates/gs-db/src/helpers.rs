//! Row-to-entity parsing helpers.
//!
//! Timestamps are written with [`format_datetime`] and read back with
//! [`parse_datetime`]. `SQLite`'s own `datetime('now')` format is accepted on
//! read for rows inserted by hand.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::DatabaseError;

/// Render a timestamp for storage: RFC 3339, UTC, microsecond precision.
#[must_use]
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00.123456Z"`) and `SQLite`'s
/// default format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{SubsecRound, TimeZone};

    #[test]
    fn stored_format_round_trips_at_micro_precision() {
        let now = Utc::now().trunc_subsecs(6);
        let text = format_datetime(&now);
        assert!(text.ends_with('Z'));
        assert_eq!(parse_datetime(&text).unwrap(), now);
    }

    #[test]
    fn stored_format_sorts_chronologically() {
        let earlier = Utc.with_ymd_and_hms(2026, 2, 9, 9, 59, 59).unwrap();
        let later = Utc.with_ymd_and_hms(2026, 2, 9, 10, 0, 0).unwrap();
        assert!(format_datetime(&earlier) < format_datetime(&later));
    }

    #[test]
    fn sqlite_default_format_accepted() {
        let dt = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 2, 9, 14, 30, 0).unwrap());
    }

    #[test]
    fn garbage_is_query_error() {
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(DatabaseError::Query(_))
        ));
    }
}
