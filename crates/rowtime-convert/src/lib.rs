//! Fail-open conversion boundary for temporal column values.
//!
//! The host pipeline registers this converter once per supported column
//! (see [`ColumnType::from_type_name`]) and calls [`convert`] once per
//! (row, column) value. Conversion is stateless and fail-open: a value that
//! cannot be normalized becomes "no value" instead of an error, keeping the
//! pipeline moving.
//!
//! # Example
//!
//! ```
//! use rowtime_convert::{ColumnType, RawTemporalValue, convert};
//!
//! let raw = RawTemporalValue::Text("2022-08-10".to_string());
//! assert_eq!(convert(ColumnType::Date, &raw), Some(19214));
//!
//! let raw = RawTemporalValue::Text("not-a-date".to_string());
//! assert_eq!(convert(ColumnType::Date, &raw), None);
//! ```

mod converter;

pub use converter::{convert, try_convert};
pub use rowtime_model::{
    ClockTime, ColumnType, ConvertError, LegacyFieldDate, LegacyTimestamp, RawTemporalValue,
    SUPPORTED_TYPE_NAMES,
};
