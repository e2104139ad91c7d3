//! Native temporal value shapes and the canonical time-of-day form.
//!
//! The adapter boundary builds exactly one [`RawTemporalValue`] per
//! (row, column) pair from whatever object the host pipeline delivers, and
//! the conversion core consumes it exactly once. Nothing here is cached or
//! mutated after construction.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{ConvertError, Result};

/// Milliseconds in one second.
pub const MILLIS_PER_SECOND: i64 = 1_000;
/// Nanoseconds in one millisecond.
pub const NANOS_PER_MILLI: i64 = 1_000_000;
/// Nanoseconds in one second.
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;
/// Nanoseconds in one day.
pub const NANOS_PER_DAY: i64 = 86_400_000_000_000;

/// A single native temporal value captured for one (row, column) pair.
#[derive(Debug, Clone, PartialEq)]
pub enum RawTemporalValue {
    /// Calendar date with no time component.
    NativeDate(NaiveDate),
    /// Time of day with no date component.
    NativeTime(NaiveTime),
    /// Civil date and time with no offset.
    NativeDateTime(NaiveDateTime),
    /// Instant carrying its own UTC offset. The offset is discarded during
    /// normalization and the instant re-expressed in the single fixed
    /// +09:00 civil frame.
    OffsetOrInstant(DateTime<FixedOffset>),
    /// Legacy broad-field date object (year biased by 1900, zero-based
    /// month, sub-second precision only in the backing epoch millis).
    LegacyFieldDate(LegacyFieldDate),
    /// Legacy wall-clock timestamp object. The one shape subject to the
    /// timestamp pre-shift rule.
    LegacyTimestamp(LegacyTimestamp),
    /// Elapsed time in nanoseconds; convertible to a time of day only.
    DurationNanos(i64),
    /// Value already expressed as a canonical epoch number.
    NumericEpoch(i64),
    /// Free-text value, parsed against the column type's fixed pattern.
    Text(String),
}

impl RawTemporalValue {
    /// Stable name of the native shape, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            RawTemporalValue::NativeDate(_) => "date",
            RawTemporalValue::NativeTime(_) => "time",
            RawTemporalValue::NativeDateTime(_) => "datetime",
            RawTemporalValue::OffsetOrInstant(_) => "offset-datetime",
            RawTemporalValue::LegacyFieldDate(_) => "legacy-field-date",
            RawTemporalValue::LegacyTimestamp(_) => "legacy-timestamp",
            RawTemporalValue::DurationNanos(_) => "duration",
            RawTemporalValue::NumericEpoch(_) => "numeric",
            RawTemporalValue::Text(_) => "text",
        }
    }
}

/// Broad-field state of a legacy date object.
///
/// Mirrors the historical accessor set: the year is stored biased by 1900,
/// the month is zero-based, and sub-second precision exists only in the raw
/// millisecond value the object was constructed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyFieldDate {
    /// Calendar year minus 1900.
    pub year: i32,
    /// Zero-based month (0 = January).
    pub month: u32,
    /// Day of month, 1-based.
    pub day: u32,
    /// Hour of day.
    pub hour: u32,
    /// Minute of hour.
    pub minute: u32,
    /// Second of minute.
    pub second: u32,
    /// Milliseconds since the Unix epoch backing the object.
    pub epoch_millis: i64,
}

/// Broad-field state of a legacy wall-clock timestamp.
///
/// Same accessor set as [`LegacyFieldDate`], plus an explicit
/// nanosecond-of-second field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyTimestamp {
    /// Calendar year minus 1900.
    pub year: i32,
    /// Zero-based month (0 = January).
    pub month: u32,
    /// Day of month, 1-based.
    pub day: u32,
    /// Hour of day.
    pub hour: u32,
    /// Minute of hour.
    pub minute: u32,
    /// Second of minute.
    pub second: u32,
    /// Nanosecond of second.
    pub nanos: u32,
    /// Milliseconds since the Unix epoch backing the object.
    pub epoch_millis: i64,
}

/// Time of day as a nanosecond count from midnight.
///
/// The valid range is `0..=86_399_999_999_999`. Construction enforces it,
/// which also rejects `chrono`'s leap-second representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    nanos: i64,
}

impl ClockTime {
    /// Largest representable nanosecond-of-day.
    pub const MAX_NANOS: i64 = NANOS_PER_DAY - 1;

    /// Builds a clock time from a nanosecond-of-day count.
    pub fn from_nanos_of_day(nanos: i64) -> Result<Self> {
        if (0..=Self::MAX_NANOS).contains(&nanos) {
            Ok(ClockTime { nanos })
        } else {
            Err(ConvertError::InvalidDuration { nanos })
        }
    }

    /// Builds a clock time from a `chrono` time of day.
    ///
    /// `chrono` represents a leap second as an extra second's worth of
    /// nanoseconds; such values have no canonical nanosecond-of-day and are
    /// rejected.
    pub fn from_naive(time: NaiveTime) -> Result<Self> {
        let nanos = i64::from(time.num_seconds_from_midnight()) * NANOS_PER_SECOND
            + i64::from(time.nanosecond());
        if i64::from(time.nanosecond()) >= NANOS_PER_SECOND {
            return Err(ConvertError::InvalidDuration { nanos });
        }
        Self::from_nanos_of_day(nanos)
    }

    /// Nanoseconds elapsed since midnight.
    pub fn nanos_of_day(&self) -> i64 {
        self.nanos
    }
}
