//! Date detection for string values
//!
//! The permissive mode follows what a browser's `Date.parse` accepts. That
//! includes bare numbers such as `"42"` or `"2024"`, which are read as
//! years, so numeric-looking strings come out tagged as `date-time`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use super::config::DateDetection;
use crate::models::Format;

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

static DATETIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}(:\d{2}(\.\d+)?)?(Z|[+-]\d{2}:?\d{2})?$").unwrap()
});

static NUMERIC_YEAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d{1,6}$").unwrap());

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%b %d %Y %H:%M:%S",
    "%b %d, %Y %H:%M:%S",
    "%d %b %Y %H:%M:%S",
    "%a %b %d %Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%m.%d.%Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%d %b %Y",
    "%d-%b-%Y",
    "%a %b %d %Y",
    "%a, %d %b %Y",
];

/// Detect a date format for a string under the given mode
pub fn detect_date(value: &str, mode: DateDetection) -> Option<Format> {
    let matched = match mode {
        DateDetection::Permissive => is_permissive_date(value),
        DateDetection::Strict => is_strict_date(value),
        DateDetection::Off => false,
    };
    matched.then_some(Format::DateTime)
}

/// Check whether a string is an ISO 8601 / RFC 3339 date or date-time
pub fn is_strict_date(value: &str) -> bool {
    let value = value.trim();
    if DATETIME_REGEX.is_match(value) {
        // Calendar validity of the date part, the regex only checks shape
        return value
            .get(..10)
            .is_some_and(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok());
    }
    DATE_REGEX.is_match(value) && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Check whether a string parses under browser-style date rules
///
/// Known gaps against a browser `Date.parse`: the `Date.prototype.toString()`
/// shape (`Mon Jan 15 2024 10:00:00 GMT+0000 (Coordinated Universal Time)`)
/// and dotted numeric dates other than `m.d.Y` (`2024.01.15`). Such strings
/// are left untagged.
pub fn is_permissive_date(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }

    if is_strict_date(value) || NUMERIC_YEAR_REGEX.is_match(value) {
        return true;
    }

    if DateTime::parse_from_rfc3339(value).is_ok() || DateTime::parse_from_rfc2822(value).is_ok() {
        return true;
    }

    if DATETIME_FORMATS
        .iter()
        .any(|fmt| NaiveDateTime::parse_from_str(value, fmt).is_ok())
    {
        return true;
    }

    if DATE_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(value, fmt).is_ok())
    {
        return true;
    }

    // Year-month forms ("2024-01", "Jan 2024") name no day
    let first_of_month = [
        (format!("{value}-01"), "%Y-%m-%d"),
        (format!("1 {value}"), "%d %b %Y"),
    ];
    first_of_month
        .iter()
        .any(|(candidate, fmt)| NaiveDate::parse_from_str(candidate, fmt).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_dates() {
        assert!(is_strict_date("2024-01-15"));
        assert!(is_strict_date("2024-01-15T10:30:00"));
        assert!(is_strict_date("2024-01-15T10:30:00Z"));
        assert!(is_strict_date("2024-01-15T10:30:00.123+05:00"));
        assert!(is_strict_date("2024-01-15 10:30"));
        assert!(!is_strict_date("2024-13-45"));
        assert!(!is_strict_date("2024-1-15"));
        assert!(!is_strict_date("42"));
        assert!(!is_strict_date("Jan 2 2024"));
    }

    #[test]
    fn test_permissive_accepts_common_shapes() {
        assert!(is_permissive_date("2024-01-01"));
        assert!(is_permissive_date("2024/01/15"));
        assert!(is_permissive_date("1/15/2024"));
        assert!(is_permissive_date("Jan 2 2024"));
        assert!(is_permissive_date("January 2, 2024"));
        assert!(is_permissive_date("2 January 2024"));
        assert!(is_permissive_date("Jan 2024"));
        assert!(is_permissive_date("2024-01"));
        assert!(is_permissive_date("Tue, 1 Jul 2003 10:52:37 +0200"));
    }

    #[test]
    fn test_permissive_reads_numbers_as_years() {
        assert!(is_permissive_date("42"));
        assert!(is_permissive_date("2024"));
        assert!(is_permissive_date("  7 "));
        assert!(!is_permissive_date("1234567"));
    }

    #[test]
    fn test_permissive_rejects_plain_text() {
        assert!(!is_permissive_date(""));
        assert!(!is_permissive_date("   "));
        assert!(!is_permissive_date("Ann"));
        assert!(!is_permissive_date("hello world"));
        assert!(!is_permissive_date("user@example.com"));
    }

    #[test]
    fn test_permissive_known_gaps() {
        assert!(!is_permissive_date(
            "Mon Jan 15 2024 10:00:00 GMT+0000 (Coordinated Universal Time)"
        ));
        assert!(!is_permissive_date("2024.01.15"));
    }

    #[test]
    fn test_detect_date_modes() {
        assert_eq!(
            detect_date("42", DateDetection::Permissive),
            Some(Format::DateTime)
        );
        assert_eq!(detect_date("42", DateDetection::Strict), None);
        assert_eq!(
            detect_date("2024-01-01", DateDetection::Strict),
            Some(Format::DateTime)
        );
        assert_eq!(detect_date("2024-01-01", DateDetection::Off), None);
    }
}
