//! # slotcast-engine
//!
//! Converts a personal appointment schedule into per-timezone free-time
//! listings ready for static publication.
//!
//! Two independent inputs meet in the projector: the schedule file becomes a
//! validated busy marker timeline, the current date becomes a catalog of
//! timezone descriptors, and every catalog entry gets the free intervals
//! re-expressed on its local clock (split at local midnight) for rendering.
//!
//! ## Modules
//!
//! - [`schedule`] — TSV parsing and busy-marker timeline construction
//! - [`freeslot`] — free-interval inversion and per-zone projection
//! - [`catalog`] — timezone descriptors, rebuilt per run from the date
//! - [`dst`] — hard-coded US/Canada and EU daylight-saving calculators
//! - [`offset`] — fixed-point UTC offsets
//! - [`render`] — static HTML assembly for the index and zone pages
//! - [`manifest`] — local-path to remote-name upload mapping
//! - [`error`] — error types

pub mod catalog;
pub mod dst;
pub mod error;
pub mod freeslot;
pub mod manifest;
pub mod offset;
pub mod render;
pub mod schedule;

pub use catalog::{build_catalog, home_zone, ZoneDescriptor};
pub use dst::{is_dst, DstRegion};
pub use error::ScheduleError;
pub use freeslot::{free_slots, group_by_day, project, DaySlots, FreeSlot, LocalFreeSlot};
pub use manifest::UploadManifest;
pub use offset::UtcOffset;
pub use schedule::{
    build_markers, busy_intervals, parse_schedule, verify_alternation, Appointment, BusyInterval,
    Marker, MarkerKind, Schedule,
};
