//! Tests for the fixed-point UTC offset type.

use chrono::Duration;
use slotcast_engine::UtcOffset;

#[test]
fn utc_strings_match_the_published_form() {
    assert_eq!(UtcOffset::from_hours(0).utc_string(), "UTC+0");
    assert_eq!(UtcOffset::from_hours(14).utc_string(), "UTC+14");
    assert_eq!(UtcOffset::from_hours(-8).utc_string(), "UTC-8");
    assert_eq!(UtcOffset::from_hours_minutes(5, 30).utc_string(), "UTC+5.5");
    assert_eq!(
        UtcOffset::from_hours_minutes(-3, 30).utc_string(),
        "UTC-3.5"
    );
    assert_eq!(
        UtcOffset::from_hours_minutes(5, 45).utc_string(),
        "UTC+5.75"
    );
}

#[test]
fn file_ids_strip_the_plus() {
    assert_eq!(UtcOffset::from_hours(5).file_id(), "UTC5");
    assert_eq!(UtcOffset::from_hours(-5).file_id(), "UTC-5");
    assert_eq!(UtcOffset::from_hours_minutes(10, 30).file_id(), "UTC10.5");
}

#[test]
fn negative_fractions_carry_the_hour_sign() {
    assert_eq!(UtcOffset::from_hours_minutes(-2, 30).minutes(), -150);
    assert_eq!(UtcOffset::from_hours_minutes(9, 30).minutes(), 570);
}

#[test]
fn ordering_is_numeric_not_textual() {
    let mut offsets = vec![
        UtcOffset::from_hours(2),
        UtcOffset::from_hours(-10),
        UtcOffset::from_hours_minutes(-2, 30),
        UtcOffset::from_hours(0),
    ];
    offsets.sort();
    assert_eq!(
        offsets,
        vec![
            UtcOffset::from_hours(-10),
            UtcOffset::from_hours_minutes(-2, 30),
            UtcOffset::from_hours(0),
            UtcOffset::from_hours(2),
        ]
    );
}

#[test]
fn shift_between_zones() {
    let home = UtcOffset::from_hours(-8);
    let india = UtcOffset::from_hours_minutes(5, 30);
    assert_eq!(india.shift_from(home), Duration::minutes(13 * 60 + 30));
    assert_eq!(home.shift_from(home), Duration::zero());
    assert_eq!(home.shift_from(india), Duration::minutes(-(13 * 60 + 30)));
}

#[test]
fn whole_hour_detection() {
    assert!(UtcOffset::from_hours(-12).is_whole_hour());
    assert!(!UtcOffset::from_hours_minutes(9, 30).is_whole_hour());
}
