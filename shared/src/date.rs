//! Date helpers for form inputs and table cells.
//!
//! The backend stores dates as ISO-8601 timestamps; `<input type="date">`
//! wants `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

pub const INPUT_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%d %b %Y";

pub fn parse_input_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), INPUT_FORMAT).ok()
}

/// Parse any date representation the backend is known to send.
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(text) => {
            let text = text.trim();
            if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
                return Some(dt.with_timezone(&Utc).date_naive());
            }
            if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
                return Some(dt.date());
            }
            parse_input_date(text).or_else(|| text.get(..10).and_then(parse_input_date))
        }
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.date_naive()),
        _ => None,
    }
}

/// `YYYY-MM-DD`, or empty when the value is not a date.
pub fn to_input_date(value: &Value) -> String {
    parse_date(value)
        .map(|d| d.format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// Human readable date for tables, `N/A` when missing.
pub fn display_date(value: Option<&Value>) -> String {
    value
        .and_then(parse_date)
        .map(|d| d.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn iso_timestamps_become_input_dates() {
        assert_eq!(to_input_date(&json!("2024-03-05T00:00:00.000Z")), "2024-03-05");
        assert_eq!(to_input_date(&json!("2024-03-05T23:30:00+05:30")), "2024-03-05");
        assert_eq!(to_input_date(&json!("2024-03-05T10:00:00.123")), "2024-03-05");
        assert_eq!(to_input_date(&json!("2024-03-05")), "2024-03-05");
        assert_eq!(to_input_date(&json!(1_709_596_800_000_i64)), "2024-03-05");
    }

    #[test]
    fn garbage_is_empty() {
        assert_eq!(to_input_date(&json!("not a date")), "");
        assert_eq!(to_input_date(&json!(null)), "");
        assert_eq!(display_date(None), "N/A");
        assert_eq!(display_date(Some(&json!("2024-01-15"))), "15 Jan 2024");
    }
}
