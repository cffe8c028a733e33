//! Tests for the hard-coded daylight-saving calculators.

use chrono::{NaiveDate, NaiveDateTime};
use slotcast_engine::{is_dst, DstRegion};

fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

#[test]
fn us_dst_starts_second_sunday_of_march() {
    // 2024: March 1 is a Friday, so the second Sunday is March 10.
    assert!(is_dst(DstRegion::UsCanada, dt(2024, 3, 10, 0, 0, 0)));
    assert!(!is_dst(DstRegion::UsCanada, dt(2024, 3, 9, 23, 59, 59)));
}

#[test]
fn us_dst_ends_first_sunday_of_november() {
    // 2024: November 1 is a Friday, so the first Sunday is November 3.
    // The ending midnight is outside DST (half-open window).
    assert!(is_dst(DstRegion::UsCanada, dt(2024, 11, 2, 23, 59, 59)));
    assert!(!is_dst(DstRegion::UsCanada, dt(2024, 11, 3, 0, 0, 0)));
}

#[test]
fn us_dst_2025_transitions() {
    // 2025: second Sunday of March is March 9, first Sunday of November is
    // November 2.
    assert!(!is_dst(DstRegion::UsCanada, dt(2025, 3, 8, 12, 0, 0)));
    assert!(is_dst(DstRegion::UsCanada, dt(2025, 3, 9, 0, 0, 0)));
    assert!(is_dst(DstRegion::UsCanada, dt(2025, 11, 1, 12, 0, 0)));
    assert!(!is_dst(DstRegion::UsCanada, dt(2025, 11, 2, 0, 0, 0)));
}

#[test]
fn us_midseason_dates() {
    assert!(is_dst(DstRegion::UsCanada, dt(2024, 7, 15, 12, 0, 0)));
    assert!(!is_dst(DstRegion::UsCanada, dt(2024, 1, 15, 12, 0, 0)));
    assert!(!is_dst(DstRegion::UsCanada, dt(2024, 12, 15, 12, 0, 0)));
}

#[test]
fn eu_dst_starts_last_sunday_of_march() {
    // 2024: March 31 is itself a Sunday.
    assert!(is_dst(DstRegion::Eu, dt(2024, 3, 31, 0, 0, 0)));
    assert!(!is_dst(DstRegion::Eu, dt(2024, 3, 30, 23, 59, 59)));
    // 2025: March 31 is a Monday, so the last Sunday is March 30.
    assert!(is_dst(DstRegion::Eu, dt(2025, 3, 30, 0, 0, 0)));
    assert!(!is_dst(DstRegion::Eu, dt(2025, 3, 29, 23, 59, 59)));
}

#[test]
fn eu_dst_ends_last_sunday_of_october() {
    // 2024: October 31 is a Thursday, so the last Sunday is October 27.
    assert!(is_dst(DstRegion::Eu, dt(2024, 10, 26, 23, 59, 59)));
    assert!(!is_dst(DstRegion::Eu, dt(2024, 10, 27, 0, 0, 0)));
    // 2025: October 31 is a Friday, so the last Sunday is October 26.
    assert!(is_dst(DstRegion::Eu, dt(2025, 10, 25, 12, 0, 0)));
    assert!(!is_dst(DstRegion::Eu, dt(2025, 10, 26, 0, 0, 0)));
}

#[test]
fn regions_differ_in_the_shoulder_weeks() {
    // Between the US start (March 10) and the EU start (March 31) only the
    // US regime is active.
    let shoulder = dt(2024, 3, 20, 12, 0, 0);
    assert!(is_dst(DstRegion::UsCanada, shoulder));
    assert!(!is_dst(DstRegion::Eu, shoulder));

    // Between the EU end (October 27) and the US end (November 3) only the
    // US regime is active.
    let autumn = dt(2024, 10, 30, 12, 0, 0);
    assert!(is_dst(DstRegion::UsCanada, autumn));
    assert!(!is_dst(DstRegion::Eu, autumn));
}
