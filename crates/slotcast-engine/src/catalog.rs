//! Timezone catalog construction.
//!
//! Builds the full set of zone descriptors the publisher emits pages for:
//! named zones for UTC-10 through UTC+13 plus a handful of fractional-offset
//! zones, with generic `UTC±N` descriptors filling every remaining integer
//! offset in [-12, 14]. The catalog is rebuilt from scratch on every run
//! because the DST-dependent entries change with the date.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::dst::{is_dst, DstRegion};
use crate::offset::UtcOffset;

/// One publishable timezone: offset, display strings, and the token naming
/// its output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneDescriptor {
    pub offset: UtcOffset,
    /// Full display name, always carrying the offset string as a
    /// parenthetical suffix (e.g. `"Pacific Standard Time (UTC-8)"`).
    pub name: String,
    pub abbrev: String,
    /// Filename-safe token, unique per offset key.
    pub file_id: String,
}

/// Integer offsets that always get a descriptor, named or generic.
const GENERIC_HOURS: std::ops::RangeInclusive<i32> = -12..=14;

/// Build the per-offset descriptor table for the given instant.
///
/// Fully deterministic for a fixed `now`; iteration order is ascending
/// offset. Zones observing DST appear under their seasonal offset and
/// name, so the key set itself shifts with the date (e.g. Newfoundland is
/// -2.5 in summer and -3.5 in winter).
pub fn build_catalog(now: NaiveDateTime) -> BTreeMap<UtcOffset, ZoneDescriptor> {
    let mut named: BTreeMap<UtcOffset, (&'static str, &'static str)> = BTreeMap::new();
    let mut put = |key: UtcOffset, long: &'static str, short: &'static str| {
        named.insert(key, (long, short));
    };

    // New Zealand and Australian east coast. Both the daylight and standard
    // variants stay listed year-round so every offset in 10..=13 is covered.
    put(UtcOffset::from_hours(13), "New Zealand Daylight Time", "NZDT");
    put(UtcOffset::from_hours(12), "New Zealand Standard Time", "NZST");
    put(UtcOffset::from_hours(11), "Australian E. Daylight Time", "AEDT");
    put(UtcOffset::from_hours(10), "Australian E. Standard Time", "AEST");

    // Asian year-round zones.
    put(UtcOffset::from_hours(9), "Japan Standard Time", "JST");
    put(UtcOffset::from_hours(8), "Singapore Time", "SGT");
    put(UtcOffset::from_hours(7), "Indochina Standard Time", "ICT");
    put(UtcOffset::from_hours(6), "Bangladesh Standard Time", "BST");
    put(UtcOffset::from_hours(5), "Pakistan Standard Time", "PKT");
    put(UtcOffset::from_hours(4), "Gulf Standard Time", "GST");
    put(UtcOffset::from_hours(3), "Saudi Arabia Standard Time", "SAST");

    // EU block. Under summer time the block shifts up one hour: EEST
    // displaces Saudi Arabia at +3 and nothing named is left at +0.
    if is_dst(DstRegion::Eu, now) {
        put(UtcOffset::from_hours(3), "Eastern European Summer Time", "EEST");
        put(UtcOffset::from_hours(2), "Central European Summer Time", "CEST");
        put(UtcOffset::from_hours(1), "British Summer Time", "BST");
    } else {
        put(UtcOffset::from_hours(2), "Eastern European Time", "EET");
        put(UtcOffset::from_hours(1), "Central European Time", "CET");
        put(UtcOffset::from_hours(0), "Greenwich Mean Time", "GMT");
    }

    // US/Canada block, including Newfoundland's half-hour offset.
    if is_dst(DstRegion::UsCanada, now) {
        put(UtcOffset::from_hours_minutes(-2, 30), "Newfoundland Daylight Time", "NDT");
        put(UtcOffset::from_hours(-3), "Atlantic Daylight Time", "ADT");
        put(UtcOffset::from_hours(-4), "Eastern Daylight Time", "EDT");
        put(UtcOffset::from_hours(-5), "Central Daylight Time", "CDT");
        put(UtcOffset::from_hours(-6), "Mountain Daylight Time", "MDT");
        put(UtcOffset::from_hours(-7), "Pacific Daylight Time", "PDT");
        put(UtcOffset::from_hours(-8), "Alaska Daylight Time", "AKDT");
    } else {
        put(UtcOffset::from_hours_minutes(-3, 30), "Newfoundland Standard Time", "NST");
        put(UtcOffset::from_hours(-4), "Atlantic Standard Time", "AST");
        put(UtcOffset::from_hours(-5), "Eastern Standard Time", "EST");
        put(UtcOffset::from_hours(-6), "Central Standard Time", "CST");
        put(UtcOffset::from_hours(-7), "Mountain Standard Time", "MST");
        put(UtcOffset::from_hours(-8), "Pacific Standard Time", "PST");
        put(UtcOffset::from_hours(-9), "Alaska Standard Time", "AKST");
    }

    put(UtcOffset::from_hours(-10), "Hawaii Standard Time", "HST");

    // Fractional oddballs with no DST handling. Each must carry a custom
    // name and abbreviation; nothing generic is synthesized off the integer
    // lattice.
    put(UtcOffset::from_hours_minutes(10, 30), "Australia Central Daylight Time", "ACDT");
    put(UtcOffset::from_hours_minutes(9, 30), "Australia Central Standard Time", "ACST");
    put(UtcOffset::from_hours_minutes(5, 30), "Indian Standard Time", "IST");

    let mut catalog = BTreeMap::new();
    for hours in GENERIC_HOURS {
        let key = UtcOffset::from_hours(hours);
        let utc = key.utc_string();
        let (name, abbrev) = match named.get(&key) {
            Some((long, short)) => (format!("{long} ({utc})"), (*short).to_string()),
            None => (utc.clone(), utc.clone()),
        };
        catalog.insert(
            key,
            ZoneDescriptor {
                offset: key,
                name,
                abbrev,
                file_id: key.file_id(),
            },
        );
    }
    for (key, (long, short)) in &named {
        if catalog.contains_key(key) {
            continue;
        }
        let utc = key.utc_string();
        catalog.insert(
            *key,
            ZoneDescriptor {
                offset: *key,
                name: format!("{long} ({utc})"),
                abbrev: (*short).to_string(),
                file_id: key.file_id(),
            },
        );
    }

    catalog
}

/// The publisher's own zone: US Pacific, in the seasonal variant for `now`.
pub fn home_zone(now: NaiveDateTime) -> ZoneDescriptor {
    let (offset, long, short) = if is_dst(DstRegion::UsCanada, now) {
        (UtcOffset::from_hours(-7), "Pacific Daylight Time", "PDT")
    } else {
        (UtcOffset::from_hours(-8), "Pacific Standard Time", "PST")
    };
    ZoneDescriptor {
        offset,
        name: format!("{long} ({})", offset.utc_string()),
        abbrev: short.to_string(),
        file_id: offset.file_id(),
    }
}
