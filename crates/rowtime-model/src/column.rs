//! Supported temporal column types.
//!
//! The conversion core registers only for columns whose declared type name
//! matches one of [`SUPPORTED_TYPE_NAMES`], case-insensitively. Columns with
//! any other declared type pass through the pipeline untouched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared type names the conversion core registers for.
pub const SUPPORTED_TYPE_NAMES: [&str; 5] = ["date", "time", "datetime", "timestamp", "datetime2"];

/// Temporal column type as declared by the source schema.
///
/// The variant determines which canonical form a value is normalized into
/// and what the encoded 64-bit number means: a day count for [`Date`],
/// a millisecond-of-day for [`Time`], and epoch milliseconds for the
/// combined date-time types.
///
/// [`Date`]: ColumnType::Date
/// [`Time`]: ColumnType::Time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    /// Calendar date without a time of day.
    Date,
    /// Time of day without a date.
    Time,
    /// Combined civil date and time.
    DateTime,
    /// Combined civil date and time, delivered by the source as a
    /// wall-clock timestamp.
    Timestamp,
    /// High-precision combined civil date and time.
    DateTime2,
}

impl ColumnType {
    /// Matches a declared schema type name, case-insensitively.
    ///
    /// Returns `None` for names outside [`SUPPORTED_TYPE_NAMES`]; such
    /// columns are not normalized. The supported set is fixed at build time
    /// and never reconfigured.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "date" => Some(ColumnType::Date),
            "time" => Some(ColumnType::Time),
            "datetime" => Some(ColumnType::DateTime),
            "timestamp" => Some(ColumnType::Timestamp),
            "datetime2" => Some(ColumnType::DateTime2),
            _ => None,
        }
    }

    /// Returns the declared name in its schema spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Date => "date",
            ColumnType::Time => "time",
            ColumnType::DateTime => "datetime",
            ColumnType::Timestamp => "timestamp",
            ColumnType::DateTime2 => "datetime2",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_type_name(s).ok_or_else(|| format!("unsupported column type: {s}"))
    }
}
