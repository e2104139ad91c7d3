//! Data model for temporal column normalization.
//!
//! A change-data-capture pipeline delivers temporal column values in many
//! native shapes. This crate defines the bounded set of shapes the
//! conversion core accepts ([`RawTemporalValue`]), the column types it
//! registers for ([`ColumnType`]), the invariant-carrying time-of-day form
//! ([`ClockTime`]), and the conversion failure taxonomy ([`ConvertError`]).

pub mod column;
pub mod error;
pub mod value;

pub use column::{ColumnType, SUPPORTED_TYPE_NAMES};
pub use error::{ConvertError, Result};
pub use value::{
    ClockTime, LegacyFieldDate, LegacyTimestamp, MILLIS_PER_SECOND, NANOS_PER_DAY,
    NANOS_PER_MILLI, NANOS_PER_SECOND, RawTemporalValue,
};
