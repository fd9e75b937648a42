//! Dates

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;

use super::Placeholder;
use crate::model::RawValue;

const DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// Formats a date-like value as `dd.MM.yyyy`.
///
/// Accepts RFC 3339 timestamps, plain `yyyy-MM-dd` dates and naive
/// `yyyy-MM-ddTHH:mm:ss[.fff]` timestamps. Anything else, including the
/// `"null"`/`"undefined"` sentinels, yields `placeholder`. Timestamps keep
/// the calendar date they were written with; no timezone conversion happens.
///
/// # Example
///
/// ```
/// use dealflow_lib::format::{format_date, Placeholder};
/// use dealflow_lib::model::RawValue;
///
/// let created = RawValue::from("2024-03-07T09:15:00Z");
/// assert_eq!(format_date(Some(&created), Placeholder::Dash), "07.03.2024");
/// assert_eq!(format_date(None, Placeholder::Dash), "--");
/// ```
pub fn format_date(value: Option<&RawValue>, placeholder: Placeholder) -> String {
    value
        .and_then(RawValue::as_str)
        .and_then(parse_date)
        .map(|date| date.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| placeholder.to_string())
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if crate::model::is_sentinel(s) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> String {
        format_date(Some(&RawValue::from(s)), Placeholder::NotAvailable)
    }

    #[test]
    fn test_accepted_shapes() {
        assert_eq!(date("2023-11-05"), "05.11.2023");
        assert_eq!(date("2023-11-05T23:59:59+02:00"), "05.11.2023");
        assert_eq!(date("2023-11-05T10:00:00.123"), "05.11.2023");
        assert_eq!(date("2023-11-05 10:00:00"), "05.11.2023");
    }

    #[test]
    fn test_placeholder_is_callers_choice() {
        assert_eq!(format_date(None, Placeholder::NotAvailable), "N/A");
        assert_eq!(format_date(None, Placeholder::Dash), "--");
        assert_eq!(format_date(Some(&RawValue::Null), Placeholder::Dash), "--");
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(date("null"), "N/A");
        assert_eq!(date("yesterday"), "N/A");
        assert_eq!(date("2023-13-40"), "N/A");
        assert_eq!(
            format_date(Some(&RawValue::from(20231105)), Placeholder::Dash),
            "--"
        );
    }
}
