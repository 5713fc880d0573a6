//! Calendar-date primitives.
//!
//! All planner dates are naive local calendar dates (`chrono::NaiveDate`);
//! the canonical serialized form is zero-padded `YYYY-MM-DD`, which sorts
//! lexicographically in calendar order.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{UrlaubError, UrlaubResult};

/// Serialize a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` string.
///
/// Out-of-range components are rolled forward into the following month or
/// year (day zero rolls back into the previous month), matching the
/// arithmetic the planner's selection data has always been produced with.
/// Only the 10-character shape and numeric fields are validated.
pub fn parse_date(s: &str) -> UrlaubResult<NaiveDate> {
    let bytes = s.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && [0, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|&i| bytes[i].is_ascii_digit());
    if !shape_ok {
        return Err(UrlaubError::Format(format!(
            "invalid date '{s}': expected YYYY-MM-DD"
        )));
    }

    let year: i32 = s[0..4].parse().expect("digits checked above");
    let month: u32 = s[5..7].parse().expect("digits checked above");
    let day: u32 = s[8..10].parse().expect("digits checked above");
    rolled_ymd(year, month, day).ok_or_else(|| UrlaubError::Format(format!("invalid date '{s}'")))
}

/// Parse the leading 8 digits of a compact `YYYYMMDD` value, as used by
/// iCalendar date properties. Trailing content (e.g. `T000000`) is ignored.
pub fn parse_compact_date(s: &str) -> UrlaubResult<NaiveDate> {
    let s = s.trim();
    let bytes = s.as_bytes();
    if bytes.len() < 8 || !bytes[..8].iter().all(u8::is_ascii_digit) {
        return Err(UrlaubError::Format(format!(
            "invalid date value '{s}': expected YYYYMMDD"
        )));
    }

    let year: i32 = s[0..4].parse().expect("digits checked above");
    let month: u32 = s[4..6].parse().expect("digits checked above");
    let day: u32 = s[6..8].parse().expect("digits checked above");
    rolled_ymd(year, month, day).ok_or_else(|| UrlaubError::Format(format!("invalid date '{s}'")))
}

/// Build a date from components, rolling excess months into following years
/// and excess (or zero) days into the neighboring months. Month zero has no
/// sensible roll target and yields `None`.
fn rolled_ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if month == 0 {
        return None;
    }
    let year = year + ((month - 1) / 12) as i32;
    let month = (month - 1) % 12 + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(Duration::days(i64::from(day) - 1))
}

/// Pure day arithmetic; `n` may be negative.
pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    date + Duration::days(n)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_parse_roundtrip() {
        let d = date(2024, 3, 7);
        assert_eq!(format_date(d), "2024-03-07");
        assert_eq!(parse_date("2024-03-07").unwrap(), d);
    }

    #[test]
    fn test_parse_rejects_malformed_strings() {
        for bad in ["", "2024-3-7", "2024/03/07", "20240307", "2024-03-07T", "yyyy-mm-dd"] {
            assert!(parse_date(bad).is_err(), "should reject {bad:?}");
        }
    }

    #[test]
    fn test_parse_rolls_invalid_day_into_next_month() {
        // 2024 is a leap year: Feb 30 rolls to Mar 1
        assert_eq!(parse_date("2024-02-30").unwrap(), date(2024, 3, 1));
        assert_eq!(parse_date("2023-02-30").unwrap(), date(2023, 3, 2));
        assert_eq!(parse_date("2024-04-31").unwrap(), date(2024, 5, 1));
    }

    #[test]
    fn test_parse_rolls_day_zero_backwards() {
        assert_eq!(parse_date("2024-03-00").unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_parse_rolls_month_overflow_into_next_year() {
        assert_eq!(parse_date("2024-13-01").unwrap(), date(2025, 1, 1));
        assert!(parse_date("2024-00-15").is_err());
    }

    #[test]
    fn test_parse_compact_date() {
        assert_eq!(parse_compact_date("20240615").unwrap(), date(2024, 6, 15));
        assert_eq!(
            parse_compact_date("20240615T000000").unwrap(),
            date(2024, 6, 15)
        );
        assert_eq!(parse_compact_date(" 20240615 ").unwrap(), date(2024, 6, 15));
        assert!(parse_compact_date("2024061").is_err());
        assert!(parse_compact_date("2024-06-15").is_err());
    }

    #[test]
    fn test_add_days() {
        let d = date(2024, 12, 31);
        assert_eq!(add_days(d, 1), date(2025, 1, 1));
        assert_eq!(add_days(d, -31), date(2024, 11, 30));
        assert_eq!(add_days(d, 0), d);
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(date(2024, 6, 15))); // Saturday
        assert!(is_weekend(date(2024, 6, 16))); // Sunday
        assert!(!is_weekend(date(2024, 6, 17))); // Monday
    }
}
