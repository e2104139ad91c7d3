//! Fixed-pattern parsing of textual column values.
//!
//! A value that looks like a numeric literal short-circuits to the numeric
//! path and is treated as already canonical. Anything else must match the
//! single pattern its column type prescribes; there are no locale or
//! alternate-format fallbacks, and no partial matches.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rowtime_model::{ClockTime, ColumnType, ConvertError, Result};

/// Pattern for `date` columns.
pub const DATE_PATTERN: &str = "%Y-%m-%d";
/// Pattern for `time` columns.
pub const TIME_PATTERN: &str = "%H:%M:%S%.3f";
/// Pattern for `datetime`, `timestamp` and `datetime2` columns. The
/// trailing `Z` is a literal, not an offset designator: the value is still
/// read in the fixed +09:00 frame.
pub const DATETIME_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Outcome of parsing one textual value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedText {
    /// Numeric literal, already canonical; any fraction was truncated
    /// toward zero.
    Numeric(i64),
    /// Calendar date parsed from [`DATE_PATTERN`].
    Date(NaiveDate),
    /// Time of day parsed from [`TIME_PATTERN`].
    Time(ClockTime),
    /// Civil date-time parsed from [`DATETIME_PATTERN`].
    DateTime(NaiveDateTime),
}

/// Parses a textual value for the given column type.
///
/// The parsed variant always matches the column type: `date` columns yield
/// [`ParsedText::Date`], `time` columns [`ParsedText::Time`], and the
/// combined types [`ParsedText::DateTime`]. The numeric short-circuit can
/// yield [`ParsedText::Numeric`] for any column type.
pub fn parse_text(column: ColumnType, text: &str) -> Result<ParsedText> {
    if is_numeric_literal(text) {
        return parse_numeric_literal(text);
    }
    match column {
        ColumnType::Date => {
            if !has_date_shape(text) {
                return Err(failure(text, DATE_PATTERN));
            }
            NaiveDate::parse_from_str(text, DATE_PATTERN)
                .map(ParsedText::Date)
                .map_err(|_| failure(text, DATE_PATTERN))
        }
        ColumnType::Time => {
            if !has_time_shape(text) {
                return Err(failure(text, TIME_PATTERN));
            }
            let time = NaiveTime::parse_from_str(text, TIME_PATTERN)
                .map_err(|_| failure(text, TIME_PATTERN))?;
            ClockTime::from_naive(time).map(ParsedText::Time)
        }
        ColumnType::DateTime | ColumnType::Timestamp | ColumnType::DateTime2 => {
            if !has_datetime_shape(text) {
                return Err(failure(text, DATETIME_PATTERN));
            }
            NaiveDateTime::parse_from_str(text, DATETIME_PATTERN)
                .map(ParsedText::DateTime)
                .map_err(|_| failure(text, DATETIME_PATTERN))
        }
    }
}

fn failure(input: &str, pattern: &'static str) -> ConvertError {
    ConvertError::ParseFailure {
        input: input.to_string(),
        pattern,
    }
}

/// Numeric-literal shape: optional sign, integer digits, optional decimal
/// fraction with at least one digit.
fn is_numeric_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (integral, fraction) = match unsigned.split_once('.') {
        Some((integral, fraction)) => (integral, Some(fraction)),
        None => (unsigned, None),
    };
    integral.chars().all(|c| c.is_ascii_digit())
        && fraction.is_none_or(|f| !f.is_empty() && f.chars().all(|c| c.is_ascii_digit()))
}

fn parse_numeric_literal(text: &str) -> Result<ParsedText> {
    // Truncate toward zero: drop the fraction, keep the signed integral part.
    let integral = text.split_once('.').map_or(text, |(integral, _)| integral);
    integral
        .parse::<i64>()
        .map(ParsedText::Numeric)
        .map_err(|_| failure(text, "numeric literal"))
}

/// `YYYY-MM-DD`, two-digit fields, nothing more.
fn has_date_shape(text: &str) -> bool {
    date_bytes(text.as_bytes())
}

/// `HH:MM:SS.mmm`, exactly three fraction digits.
fn has_time_shape(text: &str) -> bool {
    time_bytes(text.as_bytes())
}

/// `YYYY-MM-DDTHH:MM:SS.mmmZ`.
fn has_datetime_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 24
        && date_bytes(&bytes[0..10])
        && bytes[10] == b'T'
        && time_bytes(&bytes[11..23])
        && bytes[23] == b'Z'
}

fn date_bytes(bytes: &[u8]) -> bool {
    bytes.len() == 10
        && digits(&bytes[0..4])
        && bytes[4] == b'-'
        && digits(&bytes[5..7])
        && bytes[7] == b'-'
        && digits(&bytes[8..10])
}

fn time_bytes(bytes: &[u8]) -> bool {
    bytes.len() == 12
        && digits(&bytes[0..2])
        && bytes[2] == b':'
        && digits(&bytes[3..5])
        && bytes[5] == b':'
        && digits(&bytes[6..8])
        && bytes[8] == b'.'
        && digits(&bytes[9..12])
}

fn digits(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_literal_shapes() {
        assert!(is_numeric_literal("0"));
        assert!(is_numeric_literal("-42"));
        assert!(is_numeric_literal("+42"));
        assert!(is_numeric_literal("12.9"));
        assert!(is_numeric_literal(""));
        assert!(is_numeric_literal("+"));

        assert!(!is_numeric_literal("12."));
        assert!(!is_numeric_literal("12.3.4"));
        assert!(!is_numeric_literal("1e5"));
        assert!(!is_numeric_literal(" 12"));
        assert!(!is_numeric_literal("2022-08-10"));
    }

    #[test]
    fn shapes_are_exact() {
        assert!(has_date_shape("2022-08-10"));
        assert!(!has_date_shape("2022-8-10"));
        assert!(!has_date_shape("2022/08/10"));
        assert!(!has_date_shape("2022-08-10 "));

        assert!(has_time_shape("12:00:10.123"));
        assert!(!has_time_shape("12:00:10"));
        assert!(!has_time_shape("12:00:10.1234"));

        assert!(has_datetime_shape("2022-08-10T13:52:11.480Z"));
        assert!(!has_datetime_shape("2022-08-10 13:52:11.480Z"));
        assert!(!has_datetime_shape("2022-08-10T13:52:11.480"));
        assert!(!has_datetime_shape("2022-08-10t13:52:11.480Z"));
    }

    #[test]
    fn shape_checks_survive_multibyte_input() {
        assert!(!has_date_shape("２０２２-08-10"));
        assert!(!has_datetime_shape("2022-08-10Ｔ13:52:11.480Z"));
    }
}
