//! Column-type dispatch and the fail-open conversion boundary.

use rowtime_model::{ColumnType, ConvertError, RawTemporalValue, Result};
use rowtime_normalization::{encode, normalize, parse};

/// Converts one native value into its canonical epoch representation.
///
/// Returns `None` both for the source system's absent-value conventions and
/// for any value that fails to normalize; no error escapes this boundary.
/// Dropped values are recorded at debug level.
pub fn convert(column: ColumnType, raw: &RawTemporalValue) -> Option<i64> {
    match try_convert(column, raw) {
        Ok(value) => value,
        Err(error) => {
            tracing::debug!(
                column = %column,
                kind = raw.kind(),
                %error,
                "dropping value that failed conversion"
            );
            None
        }
    }
}

/// Fallible inner conversion; [`convert`] collapses every error to `None`.
///
/// `Ok(None)` is reserved for the zero sentinel: a raw numeric zero is the
/// source system's marker for an absent or zeroed date, never epoch zero.
pub fn try_convert(column: ColumnType, raw: &RawTemporalValue) -> Result<Option<i64>> {
    // Raw numerics bypass every conversion path, sentinel first.
    if let RawTemporalValue::NumericEpoch(value) = raw {
        return Ok(if *value == 0 { None } else { Some(*value) });
    }
    if let RawTemporalValue::Text(text) = raw {
        return Ok(Some(encode_parsed(parse::parse_text(column, text)?)));
    }
    let encoded = match column {
        ColumnType::Date => encode::epoch_day(normalize::to_naive_date(raw)?),
        ColumnType::Time => encode::millis_of_day(normalize::to_clock_time(raw)?),
        ColumnType::DateTime | ColumnType::DateTime2 => {
            encode::epoch_millis(normalize::to_naive_datetime(raw)?)
        }
        ColumnType::Timestamp => timestamp_epoch_millis(raw)?,
    };
    Ok(Some(encoded))
}

/// Timestamp columns follow the datetime encoding except for the legacy
/// wall-clock shape, whose backing millis are shifted forward by the fixed
/// offset before reconstruction, so the offset lands on that one shape
/// twice. String, numeric, and every other native shape never take this
/// path.
fn timestamp_epoch_millis(raw: &RawTemporalValue) -> Result<i64> {
    match raw {
        RawTemporalValue::LegacyTimestamp(value) => {
            let shifted = value
                .epoch_millis
                .checked_add(encode::FIXED_OFFSET_MILLIS)
                .ok_or(ConvertError::EpochOutOfRange {
                    value: value.epoch_millis,
                })?;
            Ok(encode::epoch_millis(encode::civil_from_epoch_millis(
                shifted,
            )?))
        }
        _ => Ok(encode::epoch_millis(normalize::to_naive_datetime(raw)?)),
    }
}

fn encode_parsed(parsed: parse::ParsedText) -> i64 {
    match parsed {
        parse::ParsedText::Numeric(value) => value,
        parse::ParsedText::Date(date) => encode::epoch_day(date),
        parse::ParsedText::Time(time) => encode::millis_of_day(time),
        parse::ParsedText::DateTime(datetime) => encode::epoch_millis(datetime),
    }
}
