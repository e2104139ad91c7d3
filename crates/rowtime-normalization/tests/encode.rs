//! Tests for epoch encoding and decoding.

use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;
use rowtime_model::{ClockTime, ConvertError};
use rowtime_normalization::{
    civil_from_epoch_millis, date_from_epoch_day, epoch_day, epoch_millis, millis_of_day,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn epoch_day_counts_from_1970() {
    assert_eq!(epoch_day(date(1970, 1, 1)), 0);
    assert_eq!(epoch_day(date(2022, 8, 10)), 19_214);
    assert_eq!(epoch_day(date(1969, 12, 31)), -1);
}

#[test]
fn millis_of_day_floors_nanoseconds() {
    let clock = ClockTime::from_nanos_of_day(43_210_123_000_000).unwrap();
    assert_eq!(millis_of_day(clock), 43_210_123);

    let clock = ClockTime::from_nanos_of_day(999_999).unwrap();
    assert_eq!(millis_of_day(clock), 0);

    let clock = ClockTime::from_nanos_of_day(ClockTime::MAX_NANOS).unwrap();
    assert_eq!(millis_of_day(clock), 86_399_999);
}

#[test]
fn epoch_millis_reads_civil_time_at_fixed_offset() {
    let civil = date(2022, 8, 10).and_time(NaiveTime::from_hms_milli_opt(13, 52, 11, 480).unwrap());
    assert_eq!(epoch_millis(civil), 1_660_107_131_480);

    // Civil midnight at +09:00 is 9 hours before the UTC epoch.
    let civil = date(1970, 1, 1).and_time(NaiveTime::MIN);
    assert_eq!(epoch_millis(civil), -32_400_000);
}

#[test]
fn date_decoding_round_trips_fixtures() {
    assert_eq!(date_from_epoch_day(0), Ok(date(1970, 1, 1)));
    assert_eq!(date_from_epoch_day(19_214), Ok(date(2022, 8, 10)));
    assert_eq!(date_from_epoch_day(-1), Ok(date(1969, 12, 31)));
}

#[test]
fn date_decoding_rejects_out_of_range_counts() {
    assert_eq!(
        date_from_epoch_day(i64::MAX),
        Err(ConvertError::EpochOutOfRange { value: i64::MAX })
    );
}

#[test]
fn civil_decoding_lands_in_the_fixed_frame() {
    assert_eq!(
        civil_from_epoch_millis(0),
        Ok(date(1970, 1, 1).and_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap()))
    );
    assert_eq!(
        civil_from_epoch_millis(i64::MAX),
        Err(ConvertError::EpochOutOfRange { value: i64::MAX })
    );
}

#[test]
fn civil_decode_then_encode_is_identity() {
    for millis in [-1_000_000_000_000_i64, -1, 0, 1, 1_660_107_131_480] {
        let civil = civil_from_epoch_millis(millis).unwrap();
        assert_eq!(epoch_millis(civil), millis);
    }
}

proptest! {
    #[test]
    fn epoch_day_round_trips(day in -100_000_i64..100_000) {
        let decoded = date_from_epoch_day(day).unwrap();
        prop_assert_eq!(epoch_day(decoded), day);
    }
}
