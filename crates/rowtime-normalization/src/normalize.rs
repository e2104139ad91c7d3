//! Normalization of native temporal shapes into canonical forms.
//!
//! Each column type requires one canonical form: a calendar date, a clock
//! time, or a civil date-time. The three functions here are total over
//! [`RawTemporalValue`]; a variant with no rule in the requested direction
//! reports [`ConvertError::UnsupportedType`] rather than falling through.
//!
//! Numeric and textual values never reach this module: both are intercepted
//! before normalization (numerics pass through as-is, text goes to the
//! pattern parser).

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use rowtime_model::{
    ClockTime, ConvertError, MILLIS_PER_SECOND, NANOS_PER_MILLI, NANOS_PER_SECOND,
    RawTemporalValue, Result,
};

use crate::encode::{FIXED_OFFSET_SECS, epoch_date};

/// Derives the calendar date a `date` column requires.
pub fn to_naive_date(raw: &RawTemporalValue) -> Result<NaiveDate> {
    match raw {
        RawTemporalValue::NativeDate(date) => Ok(*date),
        RawTemporalValue::NativeDateTime(datetime) => Ok(datetime.date()),
        RawTemporalValue::LegacyFieldDate(value) => {
            legacy_date(value.year, value.month, value.day, raw.kind())
        }
        RawTemporalValue::LegacyTimestamp(value) => {
            legacy_date(value.year, value.month, value.day, raw.kind())
        }
        RawTemporalValue::NativeTime(_) => Err(ConvertError::TypeMismatch {
            requested: "calendar date",
            kind: raw.kind(),
        }),
        _ => Err(ConvertError::UnsupportedType { kind: raw.kind() }),
    }
}

/// Derives the time of day a `time` column requires.
pub fn to_clock_time(raw: &RawTemporalValue) -> Result<ClockTime> {
    match raw {
        RawTemporalValue::NativeTime(time) => ClockTime::from_naive(*time),
        RawTemporalValue::NativeDateTime(datetime) => ClockTime::from_naive(datetime.time()),
        RawTemporalValue::LegacyTimestamp(value) => {
            let time =
                legacy_time(value.hour, value.minute, value.second, value.nanos, raw.kind())?;
            ClockTime::from_naive(time)
        }
        RawTemporalValue::LegacyFieldDate(value) => {
            // No forward fold on the time-only path: a negative remainder
            // is rejected outright.
            let millis = value.epoch_millis % MILLIS_PER_SECOND;
            let nanos = u32::try_from(millis * NANOS_PER_MILLI)
                .map_err(|_| ConvertError::InvalidComponents { kind: raw.kind() })?;
            let time = legacy_time(value.hour, value.minute, value.second, nanos, raw.kind())?;
            ClockTime::from_naive(time)
        }
        RawTemporalValue::DurationNanos(nanos) => ClockTime::from_nanos_of_day(*nanos),
        RawTemporalValue::NativeDate(_) => Err(ConvertError::TypeMismatch {
            requested: "time of day",
            kind: raw.kind(),
        }),
        _ => Err(ConvertError::UnsupportedType { kind: raw.kind() }),
    }
}

/// Derives the civil date-time the combined column types require.
pub fn to_naive_datetime(raw: &RawTemporalValue) -> Result<NaiveDateTime> {
    match raw {
        RawTemporalValue::NativeDateTime(datetime) => Ok(*datetime),
        RawTemporalValue::NativeDate(date) => Ok(date.and_time(NaiveTime::MIN)),
        RawTemporalValue::NativeTime(time) => Ok(epoch_date().and_time(*time)),
        RawTemporalValue::OffsetOrInstant(value) => value
            .naive_utc()
            .checked_add_signed(TimeDelta::seconds(i64::from(FIXED_OFFSET_SECS)))
            .ok_or(ConvertError::EpochOutOfRange {
                value: value.timestamp_millis(),
            }),
        RawTemporalValue::LegacyTimestamp(value) => {
            let date = legacy_date(value.year, value.month, value.day, raw.kind())?;
            let time =
                legacy_time(value.hour, value.minute, value.second, value.nanos, raw.kind())?;
            Ok(date.and_time(time))
        }
        RawTemporalValue::LegacyFieldDate(value) => {
            let date = legacy_date(value.year, value.month, value.day, raw.kind())?;
            // Sub-second precision lives only in the backing millis; a
            // negative remainder folds forward into the following second so
            // the nanosecond field stays non-negative.
            let millis = value.epoch_millis.rem_euclid(MILLIS_PER_SECOND);
            let time = legacy_time(
                value.hour,
                value.minute,
                value.second,
                (millis * NANOS_PER_MILLI) as u32,
                raw.kind(),
            )?;
            Ok(date.and_time(time))
        }
        _ => Err(ConvertError::UnsupportedType { kind: raw.kind() }),
    }
}

/// Rebuilds a calendar date from legacy broad fields (year biased by 1900,
/// zero-based month).
fn legacy_date(year: i32, month: u32, day: u32, kind: &'static str) -> Result<NaiveDate> {
    year.checked_add(1900)
        .zip(month.checked_add(1))
        .and_then(|(year, month)| NaiveDate::from_ymd_opt(year, month, day))
        .ok_or(ConvertError::InvalidComponents { kind })
}

/// Rebuilds a time of day from legacy broad fields. The nanosecond field
/// must stay below one second; `chrono` would otherwise accept it as a
/// leap-second representation.
fn legacy_time(
    hour: u32,
    minute: u32,
    second: u32,
    nanos: u32,
    kind: &'static str,
) -> Result<NaiveTime> {
    if i64::from(nanos) >= NANOS_PER_SECOND {
        return Err(ConvertError::InvalidComponents { kind });
    }
    NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)
        .ok_or(ConvertError::InvalidComponents { kind })
}
