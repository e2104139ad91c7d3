//! Conversion failure taxonomy.

use thiserror::Error;

/// Failure modes of a single value conversion.
///
/// Every kind is collapsed to "no value" at the public boundary; the typed
/// taxonomy exists so that each failure path stays individually testable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The canonical form a column requires cannot be derived from this
    /// native shape (a date-only value asked for a time of day, or the
    /// reverse).
    #[error("cannot derive a {requested} from a {kind} value")]
    TypeMismatch {
        /// What the column type asked for.
        requested: &'static str,
        /// Kind name of the native value.
        kind: &'static str,
    },

    /// No conversion rule exists for this native shape in the requested
    /// direction.
    #[error("no conversion rule for a {kind} value")]
    UnsupportedType {
        /// Kind name of the native value.
        kind: &'static str,
    },

    /// Text did not match the single fixed pattern for its column type.
    #[error("{input:?} does not match pattern {pattern}")]
    ParseFailure {
        /// The offending input, verbatim.
        input: String,
        /// The pattern it was required to match.
        pattern: &'static str,
    },

    /// A nanosecond-of-day value outside `0..=86_399_999_999_999`.
    #[error("{nanos} ns is outside the nanosecond-of-day range")]
    InvalidDuration {
        /// The out-of-range nanosecond count.
        nanos: i64,
    },

    /// Legacy broad fields denote no valid calendar date or clock time.
    #[error("invalid date or time components in a {kind} value")]
    InvalidComponents {
        /// Kind name of the native value.
        kind: &'static str,
    },

    /// An epoch-based value outside the representable date-time range.
    #[error("epoch value {value} is outside the representable range")]
    EpochOutOfRange {
        /// The out-of-range epoch value.
        value: i64,
    },
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
