//! Schedule parsing and busy-marker construction.
//!
//! The input is a TSV of appointment rows (`start<TAB>end`, both in
//! `YYYY/MM/DD HH:MM:SS` form) in roughly chronological file order, with an
//! optional `Written<TAB>timestamp` sentinel recording when the file was
//! last edited. Appointments fold into an ordered marker timeline on which
//! busy Start/End tags strictly alternate; abutting and overlapping
//! appointments merge into a single busy span.

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::warn;

use crate::error::{Result, ScheduleError};

/// Timestamp format used throughout the schedule file.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

const WRITTEN_SENTINEL: &str = "Written";

/// One appointment row: a single period of unavailability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appointment {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Whether a marker opens or closes a busy span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarkerKind {
    Start,
    End,
}

/// A timestamped Start/End tag on the busy timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub at: NaiveDateTime,
    pub kind: MarkerKind,
}

/// A consolidated busy span with no gaps at its edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BusyInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// A parsed schedule file: appointments in file order plus the optional
/// last-updated timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub appointments: Vec<Appointment>,
    pub written: Option<NaiveDateTime>,
}

/// Parse the TSV schedule format. Blank lines are skipped; a later
/// `Written` row replaces an earlier one.
pub fn parse_schedule(input: &str) -> Result<Schedule> {
    let mut appointments = Vec::new();
    let mut written = None;

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        let (Some(first), Some(second)) = (fields.next(), fields.next()) else {
            return Err(ScheduleError::MalformedRow { line: line_no });
        };
        if first == WRITTEN_SENTINEL {
            written = Some(parse_timestamp(second, line_no)?);
        } else {
            appointments.push(Appointment {
                start: parse_timestamp(first, line_no)?,
                end: parse_timestamp(second, line_no)?,
            });
        }
    }

    Ok(Schedule {
        appointments,
        written,
    })
}

fn parse_timestamp(field: &str, line: usize) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(field.trim(), TIMESTAMP_FORMAT)
        .map_err(|source| ScheduleError::BadTimestamp { line, source })
}

/// Fold appointments into an ordered, strictly alternating marker timeline.
///
/// Each appointment is compared against the one before it in file order:
/// starts and ends must both advance strictly, and an appointment starting
/// at or before the previous end merges into the previous busy span instead
/// of opening a new one. A true overlap (start strictly before the previous
/// end) additionally logs a warning; the data is suspect but still
/// renderable.
pub fn build_markers(appointments: &[Appointment]) -> Result<Vec<Marker>> {
    let mut markers: Vec<Marker> = Vec::with_capacity(appointments.len() * 2);
    let mut previous: Option<Appointment> = None;

    for appt in appointments {
        if appt.start >= appt.end {
            return Err(ScheduleError::InvertedAppointment {
                start: appt.start,
                end: appt.end,
            });
        }

        match previous {
            Some(prev) if appt.start <= prev.start => {
                return Err(ScheduleError::NonMonotonicStart {
                    prev: prev.start,
                    next: appt.start,
                });
            }
            Some(prev) if appt.end <= prev.end => {
                return Err(ScheduleError::NonMonotonicEnd {
                    prev: prev.end,
                    next: appt.end,
                });
            }
            Some(prev) if appt.start <= prev.end => {
                if appt.start < prev.end {
                    warn!(
                        prev_end = %prev.end,
                        next_start = %appt.start,
                        "overlapping appointments, merging into one busy span"
                    );
                }
                // Merge: the previous span's End moves out to this end.
                let closed = markers.pop();
                debug_assert!(matches!(
                    closed,
                    Some(Marker {
                        kind: MarkerKind::End,
                        ..
                    })
                ));
                markers.push(Marker {
                    at: appt.end,
                    kind: MarkerKind::End,
                });
            }
            _ => {
                markers.push(Marker {
                    at: appt.start,
                    kind: MarkerKind::Start,
                });
                markers.push(Marker {
                    at: appt.end,
                    kind: MarkerKind::End,
                });
            }
        }

        previous = Some(*appt);
    }

    Ok(markers)
}

/// The two states of the alternation walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    Start,
    End,
}

/// Check the core timeline invariant: markers strictly increase in time and
/// alternate Start, End, Start, End, ..., closing with an End. An empty
/// timeline is valid.
pub fn verify_alternation(markers: &[Marker]) -> Result<()> {
    let mut expect = Expect::Start;
    let mut last_at: Option<NaiveDateTime> = None;

    for marker in markers {
        if let Some(last) = last_at {
            if marker.at <= last {
                return Err(ScheduleError::AlternationViolation {
                    at: marker.at,
                    expected: "a strictly later instant",
                });
            }
        }
        expect = match (expect, marker.kind) {
            (Expect::Start, MarkerKind::Start) => Expect::End,
            (Expect::End, MarkerKind::End) => Expect::Start,
            (Expect::Start, MarkerKind::End) => {
                return Err(ScheduleError::AlternationViolation {
                    at: marker.at,
                    expected: "Start",
                });
            }
            (Expect::End, MarkerKind::Start) => {
                return Err(ScheduleError::AlternationViolation {
                    at: marker.at,
                    expected: "End",
                });
            }
        };
        last_at = Some(marker.at);
    }

    if expect == Expect::End {
        // A Start was left open with no closing End.
        let last = markers[markers.len() - 1];
        return Err(ScheduleError::AlternationViolation {
            at: last.at,
            expected: "a closing End",
        });
    }

    Ok(())
}

/// View the marker timeline as typed busy intervals. The alternation makes
/// the two representations equivalent.
pub fn busy_intervals(markers: &[Marker]) -> Result<Vec<BusyInterval>> {
    verify_alternation(markers)?;
    Ok(markers
        .chunks_exact(2)
        .map(|pair| BusyInterval {
            start: pair[0].at,
            end: pair[1].at,
        })
        .collect())
}
