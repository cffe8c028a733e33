//! Free-slot computation and per-zone projection.
//!
//! Inverts the busy marker timeline into free intervals bounded below by
//! "now" and above by the last known appointment, then re-expresses those
//! intervals on a target zone's local clock, splitting any interval that
//! crosses local midnight.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::error::{Result, ScheduleError};
use crate::offset::UtcOffset;
use crate::schedule::{verify_alternation, Marker, MarkerKind};

/// A free interval on the publisher's reference clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FreeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// A free interval on a target zone's local clock. Never crosses local
/// midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalFreeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// The free slots of one local calendar day, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySlots {
    pub date: NaiveDate,
    pub slots: Vec<LocalFreeSlot>,
}

/// Invert the busy timeline into the free intervals from `now` onward.
///
/// Markers strictly before `now` are discarded. A trailing End (free time
/// with no known upper bound) is dropped; a leading Start (a free interval
/// already in progress) is closed by a synthetic End at `now`. The
/// remaining markers pair up as (End, Start) — the complement of the busy
/// alternation — and each pair yields one free slot.
pub fn free_slots(markers: &[Marker], now: NaiveDateTime) -> Result<Vec<FreeSlot>> {
    verify_alternation(markers)?;

    let mut future: Vec<Marker> = markers.iter().copied().filter(|m| m.at >= now).collect();

    if matches!(future.last(), Some(m) if m.kind == MarkerKind::End) {
        future.pop();
    }
    if matches!(future.first(), Some(m) if m.kind == MarkerKind::Start) {
        future.insert(
            0,
            Marker {
                at: now,
                kind: MarkerKind::End,
            },
        );
    }

    if future.len() % 2 != 0 {
        let odd = future[future.len() - 1];
        return Err(ScheduleError::AlternationViolation {
            at: odd.at,
            expected: "a paired marker",
        });
    }

    let mut slots = Vec::with_capacity(future.len() / 2);
    for pair in future.chunks_exact(2) {
        let (open, close) = (pair[0], pair[1]);
        if open.kind != MarkerKind::End {
            return Err(ScheduleError::AlternationViolation {
                at: open.at,
                expected: "End",
            });
        }
        if close.kind != MarkerKind::Start {
            return Err(ScheduleError::AlternationViolation {
                at: close.at,
                expected: "Start",
            });
        }
        // A busy Start exactly at `now` closes the synthetic slot
        // immediately; skip the empty interval.
        if open.at < close.at {
            slots.push(FreeSlot {
                start: open.at,
                end: close.at,
            });
        }
    }

    Ok(slots)
}

/// Shift free slots from the `from` zone's clock onto the `to` zone's
/// clock, splitting any slot that lands across a local midnight into
/// `[start, 23:59:59]` and `[00:00:00, end]` pieces. The second piece is
/// dropped when the shifted end is exactly midnight.
pub fn project(slots: &[FreeSlot], from: UtcOffset, to: UtcOffset) -> Vec<LocalFreeSlot> {
    let shift = to.shift_from(from);
    let mut local = Vec::with_capacity(slots.len());

    for slot in slots {
        let start = slot.start + shift;
        let end = slot.end + shift;
        if start.date() == end.date() {
            local.push(LocalFreeSlot { start, end });
        } else {
            local.push(LocalFreeSlot {
                start,
                end: start.date().and_time(day_last_second()),
            });
            let resumed = end.date().and_time(NaiveTime::MIN);
            if resumed != end {
                local.push(LocalFreeSlot {
                    start: resumed,
                    end,
                });
            }
        }
    }

    local
}

fn day_last_second() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).expect("23:59:59 is valid")
}

/// Group projected slots by local calendar date, preserving order. Purely a
/// presentation shaping step.
pub fn group_by_day(slots: &[LocalFreeSlot]) -> Vec<DaySlots> {
    let mut days: Vec<DaySlots> = Vec::new();
    for slot in slots {
        let date = slot.start.date();
        match days.last_mut() {
            Some(day) if day.date == date => day.slots.push(*slot),
            _ => days.push(DaySlots {
                date,
                slots: vec![*slot],
            }),
        }
    }
    days
}
