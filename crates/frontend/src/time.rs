//! Conversions between `datetime-local` input values and UTC timestamps.

use chrono::{DateTime, NaiveDateTime, Utc};

const INPUT_MINUTES: &str = "%Y-%m-%dT%H:%M";
const INPUT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a `datetime-local` input value, with or without seconds.
pub fn parse_input(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, INPUT_SECONDS)
        .or_else(|_| NaiveDateTime::parse_from_str(value, INPUT_MINUTES))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Format a timestamp as a `datetime-local` input value (minute precision).
pub fn input_value(at: DateTime<Utc>) -> String {
    at.format(INPUT_MINUTES).to_string()
}

/// Current time as an input value, the default for the reading form.
pub fn now_input_value() -> String {
    input_value(Utc::now())
}

/// Short form for chart labels.
pub fn display(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_minute_precision() {
        assert_eq!(
            parse_input("2025-10-01T12:30"),
            Some(Utc.with_ymd_and_hms(2025, 10, 1, 12, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_second_precision() {
        assert_eq!(
            parse_input("2025-10-01T12:30:45"),
            Some(Utc.with_ymd_and_hms(2025, 10, 1, 12, 30, 45).unwrap())
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_input("yesterday"), None);
        assert_eq!(parse_input(""), None);
    }

    #[test]
    fn test_input_value_roundtrip() {
        let at = Utc.with_ymd_and_hms(2025, 10, 1, 9, 5, 0).unwrap();
        let value = input_value(at);

        assert_eq!(value, "2025-10-01T09:05");
        assert_eq!(parse_input(&value), Some(at));
    }

    #[test]
    fn test_display_format() {
        let at = Utc.with_ymd_and_hms(2025, 10, 1, 9, 5, 0).unwrap();
        assert_eq!(display(at), "2025-10-01 09:05");
    }
}
