//! Reporting period keys and month labels
//!
//! Two independently-edited report types are joined by owner and period, so
//! the period key must be a stable string derived the same way from both
//! sides: each ISO date string is truncated to its calendar date (in UTC)
//! and the pair is concatenated. Records with a missing or unparsable date
//! get no key and are excluded from consolidation.
//!
//! Month labels ("SEP2025") are compared through a fixed month-name table,
//! never by string sort.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Fixed month-name table used for both formatting and ordering
pub const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Parse an ISO-8601 date or datetime string to a UTC calendar date
///
/// Accepts full RFC 3339 timestamps ("2025-09-01T00:00:00.000Z") and plain
/// dates ("2025-09-01"). Timestamps are converted to UTC before the date is
/// extracted, so month boundaries never drift with the host timezone.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.with_timezone(&Utc).date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Derive the period key for a start/end date pair
///
/// Returns `None` when either date is missing or unparsable; such records
/// are excluded from consolidation.
pub fn period_key(start: Option<&str>, end: Option<&str>) -> Option<String> {
    let start = parse_iso_date(start?)?;
    let end = parse_iso_date(end?)?;
    Some(format!(
        "{}_{}",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    ))
}

/// Derive the month label ("SEP2025") from a period's start date
pub fn month_key(start: &str) -> Option<String> {
    let date = parse_iso_date(start)?;
    let month = MONTHS[date.month0() as usize];
    Some(format!("{}{:04}", month, date.year()))
}

/// Index of a three-letter month name in the fixed table (0-based)
pub fn month_index(name: &str) -> Option<u32> {
    MONTHS.iter().position(|m| *m == name).map(|i| i as u32)
}

/// Sort key `(year, month index)` for a month label
///
/// Used to order statements most-recent-first via the fixed table rather
/// than lexicographic comparison.
pub fn month_sort_key(label: &str) -> Option<(i32, u32)> {
    if label.len() < 4 || !label.is_char_boundary(3) {
        return None;
    }
    let (name, year) = label.split_at(3);
    Some((year.parse().ok()?, month_index(name)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339() {
        let date = parse_iso_date("2025-09-01T00:00:00.000Z").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
    }

    #[test]
    fn test_parse_plain_date() {
        let date = parse_iso_date("2025-09-30").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 9, 30).unwrap());
    }

    #[test]
    fn test_parse_offset_timestamp_extracts_utc_date() {
        // 23:30 on Aug 31 at UTC-2 is already Sep 1 in UTC.
        let date = parse_iso_date("2025-08-31T23:30:00-02:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
    }

    #[test]
    fn test_parse_garbage_returns_none() {
        assert_eq!(parse_iso_date("not a date"), None);
        assert_eq!(parse_iso_date(""), None);
    }

    #[test]
    fn test_period_key() {
        let key = period_key(
            Some("2025-09-01T00:00:00.000Z"),
            Some("2025-09-30T00:00:00.000Z"),
        );
        assert_eq!(key.as_deref(), Some("2025-09-01_2025-09-30"));
    }

    #[test]
    fn test_period_key_missing_date_returns_none() {
        assert_eq!(period_key(None, Some("2025-09-30T00:00:00.000Z")), None);
        assert_eq!(period_key(Some("2025-09-01"), None), None);
        assert_eq!(period_key(Some("bogus"), Some("2025-09-30")), None);
    }

    #[test]
    fn test_month_key_is_utc() {
        assert_eq!(
            month_key("2025-09-01T00:00:00.000Z").as_deref(),
            Some("SEP2025")
        );
        // Start of the month at a negative offset must not slip into AUG.
        assert_eq!(
            month_key("2025-09-01T01:00:00+02:00").as_deref(),
            Some("AUG2025")
        );
    }

    #[test]
    fn test_month_sort_key() {
        assert_eq!(month_sort_key("SEP2025"), Some((2025, 8)));
        assert_eq!(month_sort_key("JAN2024"), Some((2024, 0)));
        assert_eq!(month_sort_key("XXX2024"), None);
        assert_eq!(month_sort_key(""), None);

        // DEC2024 sorts before JAN2025 despite "D" < "J" lexicographically.
        assert!(month_sort_key("DEC2024").unwrap() < month_sort_key("JAN2025").unwrap());
    }
}
