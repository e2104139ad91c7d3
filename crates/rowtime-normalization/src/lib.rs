//! Conversion engine for temporal column values.
//!
//! Three stages, each usable on its own:
//!
//! - **normalize**: native shapes into the canonical form a column requires
//! - **parse**: fixed-pattern parsing of textual values
//! - **encode**: canonical forms into signed 64-bit epoch numbers

pub mod encode;
pub mod normalize;
pub mod parse;

pub use encode::{
    FIXED_OFFSET_MILLIS, FIXED_OFFSET_SECS, civil_from_epoch_millis, date_from_epoch_day,
    epoch_day, epoch_millis, millis_of_day,
};
pub use normalize::{to_clock_time, to_naive_date, to_naive_datetime};
pub use parse::{DATE_PATTERN, DATETIME_PATTERN, ParsedText, TIME_PATTERN, parse_text};
