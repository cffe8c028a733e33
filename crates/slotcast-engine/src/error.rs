//! Error types for schedule parsing and interval computation.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Malformed schedule row {line}: expected two tab-separated fields")]
    MalformedRow { line: usize },

    #[error("Bad timestamp in schedule row {line}: {source}")]
    BadTimestamp {
        line: usize,
        source: chrono::ParseError,
    },

    #[error("Appointment does not end after it starts: {start} >= {end}")]
    InvertedAppointment {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Non-monotonic start: {next} is not after previous start {prev}")]
    NonMonotonicStart {
        prev: NaiveDateTime,
        next: NaiveDateTime,
    },

    #[error("Non-monotonic end: {next} is not after previous end {prev}")]
    NonMonotonicEnd {
        prev: NaiveDateTime,
        next: NaiveDateTime,
    },

    #[error("Marker alternation violated at {at}: expected {expected}")]
    AlternationViolation {
        at: NaiveDateTime,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
