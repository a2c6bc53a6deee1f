//! Timestamp display
//!
//! Results are shown as `YYYY-MM-DD HH:MM:SS` with a figure space between
//! date and time so that columns of timestamps line up.

use crate::error::{FormatError, FormatResult};
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDateTime, TimeZone, Timelike, Utc};

/// U+2007, as wide as a digit
pub const FIGURE_SPACE: char = '\u{2007}';

/// Format a date-time as `YYYY-MM-DD<U+2007>HH:MM:SS`.
///
/// Fields are taken as given; no timezone conversion happens. The year is
/// printed at its natural width, every other field is padded to two digits.
pub fn format_timestamp<T: Datelike + Timelike>(t: &T) -> String {
    format!(
        "{}-{:02}-{:02}{}{:02}:{:02}:{:02}",
        t.year(),
        t.month(),
        t.day(),
        FIGURE_SPACE,
        t.hour(),
        t.minute(),
        t.second()
    )
}

/// Fractions up to this many digits are whole milliseconds
const MILLIS_MAX_DIGITS: usize = 4;

/// Split `10:04:05.40Z` into `10:04:05Z` and `40`
fn split_fraction(text: &str) -> Option<(String, &str)> {
    let dot = text.rfind('.')?;
    let rest = &text[dot + 1..];
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    Some((
        format!("{}{}", &text[..dot], &rest[digits_len..]),
        &rest[..digits_len],
    ))
}

fn parse_whole(text: &str, naive_format: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text).ok().or_else(|| {
        NaiveDateTime::parse_from_str(text, naive_format)
            .ok()
            .map(|t| Utc.from_utc_datetime(&t).into())
    })
}

/// Parse an ISO-8601 timestamp as written by the exercise history,
/// e.g. `2019-03-02T10:04:05.123Z`, keeping its offset.
///
/// The history writes milliseconds unpadded, so `.5` is 5 ms and `.1000`
/// rolls over to the next second. Longer fractions are decimal. Text
/// without an offset is read as UTC.
pub fn parse_iso8601_instant(text: &str) -> FormatResult<DateTime<FixedOffset>> {
    let invalid = || FormatError::InvalidTimestamp {
        input: text.to_string(),
    };
    let trimmed = text.trim();

    let (base, millis) = match split_fraction(trimmed) {
        None => (trimmed.to_string(), 0),
        Some((_, digits)) if digits.is_empty() => return Err(invalid()),
        Some((_, digits)) if digits.len() > MILLIS_MAX_DIGITS => {
            return parse_whole(trimmed, "%Y-%m-%dT%H:%M:%S%.f").ok_or_else(invalid);
        }
        Some((base, digits)) => (base, digits.parse::<i64>().map_err(|_| invalid())?),
    };

    let whole = parse_whole(&base, "%Y-%m-%dT%H:%M:%S").ok_or_else(invalid)?;
    Ok(whole + Duration::milliseconds(millis))
}

/// Parse an ISO-8601 timestamp for display.
///
/// The wall-clock fields are kept as written, the offset is dropped.
pub fn parse_iso8601(text: &str) -> FormatResult<NaiveDateTime> {
    parse_iso8601_instant(text).map(|dt| dt.naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_format_pads_fields() {
        let t = datetime(2023, 1, 5, 7, 8, 9);
        assert_eq!(format_timestamp(&t), "2023-01-05\u{2007}07:08:09");
    }

    #[test]
    fn test_format_all_single_digit_fields() {
        let t = datetime(2023, 1, 1, 1, 1, 1);
        assert_eq!(format_timestamp(&t), "2023-01-01\u{2007}01:01:01");
    }

    #[test]
    fn test_format_uses_figure_space() {
        let formatted = format_timestamp(&datetime(2020, 12, 31, 23, 59, 58));
        assert_eq!(formatted, "2020-12-31\u{2007}23:59:58");
        assert!(!formatted.contains(' '));
        assert_eq!(formatted.matches(FIGURE_SPACE).count(), 1);
    }

    #[test]
    fn test_format_year_natural_width() {
        let t = datetime(987, 3, 4, 5, 6, 7);
        assert_eq!(format_timestamp(&t), "987-03-04\u{2007}05:06:07");
    }

    #[test]
    fn test_parse_history_format() {
        let t = parse_iso8601("2019-03-02T10:04:05.123Z").unwrap();
        assert_eq!(t, datetime(2019, 3, 2, 10, 4, 5) + Duration::milliseconds(123));
        assert_eq!(format_timestamp(&t), "2019-03-02\u{2007}10:04:05");
    }

    #[test]
    fn test_parse_keeps_wall_clock_of_offset() {
        let t = parse_iso8601("2019-03-02T10:04:05+02:00").unwrap();
        assert_eq!(format_timestamp(&t), "2019-03-02\u{2007}10:04:05");
    }

    #[test]
    fn test_parse_without_offset() {
        let t = parse_iso8601("2019-03-02T10:04:05").unwrap();
        assert_eq!(t, datetime(2019, 3, 2, 10, 4, 5));
    }

    #[test]
    fn test_parse_unpadded_millis() {
        let five = parse_iso8601("2019-03-02T10:04:05.5Z").unwrap();
        let forty = parse_iso8601("2019-03-02T10:04:05.40Z").unwrap();
        let base = datetime(2019, 3, 2, 10, 4, 5);
        assert_eq!(five, base + Duration::milliseconds(5));
        assert_eq!(forty, base + Duration::milliseconds(40));
        assert!(five < forty);
    }

    #[test]
    fn test_parse_millis_roll_over() {
        let t = parse_iso8601("2019-03-02T10:04:05.1000Z").unwrap();
        assert_eq!(t, datetime(2019, 3, 2, 10, 4, 6));
        assert_eq!(format_timestamp(&t), "2019-03-02\u{2007}10:04:06");
    }

    #[test]
    fn test_parse_long_fraction_is_decimal() {
        let t = parse_iso8601("2019-03-02T10:04:05.123456+02:00").unwrap();
        assert_eq!(t, datetime(2019, 3, 2, 10, 4, 5) + Duration::microseconds(123456));
    }

    #[test]
    fn test_instant_orders_by_offset() {
        let east = parse_iso8601_instant("2019-03-02T10:00:00+02:00").unwrap();
        let utc = parse_iso8601_instant("2019-03-02T09:00:00Z").unwrap();
        assert!(east < utc);
        assert_eq!(
            parse_iso8601_instant("2019-03-02T09:00:00").unwrap(),
            utc
        );
    }

    #[test]
    fn test_parse_empty_fraction() {
        assert!(parse_iso8601("2019-03-02T10:04:05.Z").is_err());
    }

    #[test]
    fn test_parse_invalid() {
        let err = parse_iso8601("yesterday").unwrap_err();
        assert_eq!(
            err,
            FormatError::InvalidTimestamp {
                input: "yesterday".to_string()
            }
        );
    }
}
