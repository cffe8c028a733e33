//! Fixed-point UTC offsets.
//!
//! Offsets are stored as whole minutes east of UTC so that fractional-hour
//! zones (UTC+5.5, UTC-3.5) compare and order exactly. Binary floating point
//! never enters date-boundary math.

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A UTC offset in whole minutes east of UTC.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    pub const fn from_hours(hours: i32) -> Self {
        Self { minutes: hours * 60 }
    }

    /// Whole hours plus extra minutes; the minutes carry the sign of the
    /// hours component, so `from_hours_minutes(-3, 30)` is UTC-3.5.
    pub const fn from_hours_minutes(hours: i32, minutes: i32) -> Self {
        let extra = if hours < 0 { -minutes } else { minutes };
        Self {
            minutes: hours * 60 + extra,
        }
    }

    pub const fn minutes(self) -> i32 {
        self.minutes
    }

    pub const fn is_whole_hour(self) -> bool {
        self.minutes % 60 == 0
    }

    /// The shift to apply when re-expressing an instant from the `from`
    /// zone's clock on this zone's clock.
    pub fn shift_from(self, from: UtcOffset) -> Duration {
        Duration::minutes(i64::from(self.minutes - from.minutes))
    }

    /// The `"UTC+N"`/`"UTC-N"` form, fractional hours as decimals
    /// (`UTC+5.5`, `UTC-3.5`).
    pub fn utc_string(self) -> String {
        format!("UTC{}", self)
    }

    /// Filename-safe token for this offset: the `utc_string` with the `+`
    /// stripped (`UTC-8`, `UTC14`, `UTC5.5`).
    pub fn file_id(self) -> String {
        self.utc_string().replace('+', "")
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let abs = self.minutes.abs();
        let (hours, rem) = (abs / 60, abs % 60);
        match rem {
            0 => write!(f, "{sign}{hours}"),
            15 => write!(f, "{sign}{hours}.25"),
            30 => write!(f, "{sign}{hours}.5"),
            45 => write!(f, "{sign}{hours}.75"),
            // Not a quarter-hour offset; fall back to hh:mm.
            _ => write!(f, "{sign}{hours}:{rem:02}"),
        }
    }
}
