//! Daylight-saving calculators for the two hard-coded DST regimes.
//!
//! Deliberately not backed by a timezone database: the published calendar
//! only distinguishes the US/Canada and EU transition rules, evaluated
//! against a naive instant in the publisher's reference zone.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// A daylight-saving regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DstRegion {
    /// Second Sunday of March through first Sunday of November.
    UsCanada,
    /// Last Sunday of March through last Sunday of October.
    Eu,
}

/// Whether daylight-saving time is in effect for `region` at `at`.
///
/// The transition window is half-open: the starting midnight is inside DST,
/// the ending midnight is not.
pub fn is_dst(region: DstRegion, at: NaiveDateTime) -> bool {
    let year = at.year();
    let (start, end) = match region {
        DstRegion::UsCanada => (nth_sunday(year, 3, 2), nth_sunday(year, 11, 1)),
        DstRegion::Eu => (last_sunday(year, 3), last_sunday(year, 10)),
    };
    start.and_time(NaiveTime::MIN) <= at && at < end.and_time(NaiveTime::MIN)
}

/// The `n`th Sunday (1-based) of the given month.
fn nth_sunday(year: i32, month: u32, n: u32) -> NaiveDate {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is valid");
    let to_first_sunday = (7 - first.weekday().num_days_from_sunday()) % 7;
    first + Duration::days(i64::from(to_first_sunday + (n - 1) * 7))
}

/// The last Sunday of the given month. Only called for March and October,
/// which both have 31 days.
fn last_sunday(year: i32, month: u32) -> NaiveDate {
    let last = NaiveDate::from_ymd_opt(year, month, 31).expect("31st is valid here");
    last - Duration::days(i64::from(last.weekday().num_days_from_sunday()))
}
