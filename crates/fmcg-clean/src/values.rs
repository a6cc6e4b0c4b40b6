//! Cell-level parsing and formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use fmcg_core::DATE_FORMAT;

/// Date layouts tried after ISO `YYYY-MM-DD`, in order. Slash dates are read
/// month-first, falling back to day-first when the month is out of range.
const DATE_LAYOUTS: &[&str] = &[
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%b-%Y",
    "%d %b %Y",
];

/// Parse a date cell, accepting plain dates and timestamps.
///
/// Returns `None` for anything unparseable; callers treat that as an unknown
/// date rather than an error.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| {
            DATE_LAYOUTS
                .iter()
                .find_map(|layout| NaiveDate::parse_from_str(value, layout).ok())
        })
        .or_else(|| parse_timestamp(value).map(|timestamp| timestamp.date()))
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.naive_utc())
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").ok())
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").ok())
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok())
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f").ok())
}

/// Parse a numeric cell. Non-finite values count as missing.
pub fn parse_number(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<f64>().ok().filter(|number| number.is_finite())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Whole-unit value of a count cell. Out-of-range values saturate at the
/// `i64` bounds.
pub fn to_count(value: f64) -> i64 {
    value as i64
}

pub fn format_integer(value: f64) -> String {
    to_count(value).to_string()
}

/// Format a float, keeping one decimal place for whole numbers.
pub fn format_float(value: f64) -> String {
    // -0.0 prints as "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Median of the given values; the mean of the two middle values for an even
/// count. `None` when `values` is empty.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dates_in_common_shapes() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 3);
        assert_eq!(parse_date("2025-01-03"), expected);
        assert_eq!(parse_date(" 2025-01-03 "), expected);
        assert_eq!(parse_date("2025/01/03"), expected);
        assert_eq!(parse_date("2025-01-03 00:00:00"), expected);
        assert_eq!(parse_date("2025-01-03T08:30:00"), expected);
        assert_eq!(parse_date("2025-01-03T08:30:00Z"), expected);
        assert_eq!(parse_date("01/03/2025"), expected);
        assert_eq!(parse_date("03-Jan-2025"), expected);
        assert_eq!(parse_date("3 Jan 2025"), expected);
    }

    #[test]
    fn slash_dates_fall_back_to_day_first() {
        assert_eq!(parse_date("31/01/2025"), NaiveDate::from_ymd_opt(2025, 1, 31));
    }

    #[test]
    fn bad_dates_are_missing() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date("2025-02-30"), None);
        assert_eq!(parse_date("31/31/2025"), None);
    }

    #[test]
    fn parses_numbers_and_rejects_junk() {
        assert_eq!(parse_number("12"), Some(12.0));
        assert_eq!(parse_number(" -3.5 "), Some(-3.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("12 units"), None);
    }

    #[test]
    fn formats_numbers() {
        assert_eq!(format_integer(605.0), "605");
        assert_eq!(format_integer(12.9), "12");
        assert_eq!(format_integer(1e19), i64::MAX.to_string());
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(1.05), "1.05");
        assert_eq!(format_float(-0.0), "0.0");
        assert_eq!(format_float(-20.0), "-20.0");
        assert_eq!(format_float(0.0006), "0.0006");
    }

    #[test]
    fn median_handles_odd_even_and_empty() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[1.0, 1.1, -3.0, 1.4]), Some((1.0 + 1.1) / 2.0));
        assert_eq!(median(&[-3.0]), Some(-3.0));
        assert_eq!(median(&[]), None);
    }
}
