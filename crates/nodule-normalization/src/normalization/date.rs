//! Exam date parsing.
//!
//! Interval growth needs whole calendar dates. Numeric day/month orders
//! other than year-first are ambiguous (01/02/2024) and are rejected.

use chrono::{NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y%m%d",    // Compact: 20240115
    "%d-%b-%Y",  // 15-Jan-2024
    "%d %b %Y",  // 15 Jan 2024
    "%b %d, %Y", // Jan 15, 2024
];

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parse an exam date. A time component, when present, is discarded.
pub fn parse_exam_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
                .map(|dt| dt.date())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn iso_and_year_first_forms() {
        assert_eq!(parse_exam_date("2024-01-15"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_exam_date(" 2024/01/15 "), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_exam_date("20240115"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn month_names() {
        assert_eq!(parse_exam_date("15-Jan-2024"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_exam_date("Jan 15, 2024"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn datetime_drops_time() {
        assert_eq!(parse_exam_date("2024-01-15T10:30:00"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn rejects_invalid() {
        assert_eq!(parse_exam_date(""), None);
        assert_eq!(parse_exam_date("2024-02-30"), None);
        assert_eq!(parse_exam_date("01/02/2024"), None);
        assert_eq!(parse_exam_date("2024-01"), None);
    }
}
