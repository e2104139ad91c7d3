//! Epoch encoding at the pipeline's fixed civil-time offset.
//!
//! Canonical forms become signed 64-bit numbers whose meaning depends on
//! the column type: a day count for dates, a millisecond-of-day for times,
//! and milliseconds since the Unix epoch for civil date-times interpreted
//! at the fixed +09:00 offset.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use rowtime_model::{ClockTime, ConvertError, NANOS_PER_MILLI, Result};

/// The single fixed UTC offset (+09:00) every civil date-time is read in,
/// in seconds.
pub const FIXED_OFFSET_SECS: i32 = 9 * 3_600;

/// The fixed offset in milliseconds.
pub const FIXED_OFFSET_MILLIS: i64 = FIXED_OFFSET_SECS as i64 * 1_000;

/// 1970-01-01, the anchor for day counts and time-only values.
pub(crate) fn epoch_date() -> NaiveDate {
    DateTime::<Utc>::UNIX_EPOCH.date_naive()
}

/// Signed day count from 1970-01-01; negative before the epoch.
pub fn epoch_day(date: NaiveDate) -> i64 {
    date.signed_duration_since(epoch_date()).num_days()
}

/// Millisecond of day. Floor division keeps the result in `0..86_400_000`
/// for every valid clock time.
pub fn millis_of_day(time: ClockTime) -> i64 {
    time.nanos_of_day().div_euclid(NANOS_PER_MILLI)
}

/// Milliseconds since the Unix epoch of a civil date-time read at the fixed
/// +09:00 offset; negative before 1970. Sub-millisecond components floor
/// toward negative infinity.
pub fn epoch_millis(civil: NaiveDateTime) -> i64 {
    civil.and_utc().timestamp_millis() - FIXED_OFFSET_MILLIS
}

/// Rebuilds the calendar date a day count denotes.
pub fn date_from_epoch_day(day: i64) -> Result<NaiveDate> {
    TimeDelta::try_days(day)
        .and_then(|delta| epoch_date().checked_add_signed(delta))
        .ok_or(ConvertError::EpochOutOfRange { value: day })
}

/// Rebuilds the civil date-time an epoch millisecond value denotes in the
/// fixed +09:00 frame.
pub fn civil_from_epoch_millis(millis: i64) -> Result<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis)
        .map(|instant| instant.naive_utc())
        .and_then(|civil| civil.checked_add_signed(TimeDelta::milliseconds(FIXED_OFFSET_MILLIS)))
        .ok_or(ConvertError::EpochOutOfRange { value: millis })
}
