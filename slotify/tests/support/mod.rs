//! Shared helpers for integration tests.
//!
//! Instants are expressed as whole-hour offsets from a fixed reference point,
//! so `block(1, 5)` is busy from one to five hours after [`now`].

#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};
use slotify::{Block, Instant, Slot, Span};

/// Fixed reference instant all offsets are relative to.
pub fn now() -> Instant {
    Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap()
}

pub fn at(hours: i64) -> Instant {
    now() + Duration::hours(hours)
}

pub fn block(start: i64, end: i64) -> Block {
    Block::new_unchecked(at(start), at(end))
}

pub fn span(start: i64, end: i64) -> Span {
    Span::new(at(start), at(end)).expect("test span must be ordered")
}

pub fn slot(start: i64, end: i64) -> Slot {
    Slot::new(at(start), at(end)).expect("test slot must be ordered")
}

/// One-hour blocks starting every other hour: `[start, start+1)`, `[start+2, start+3)`, ...
pub fn alternating_blocks(start: i64, end: i64) -> Vec<Block> {
    (start..end).step_by(2).map(|i| block(i, i + 1)).collect()
}

/// The one-hour slots left free by [`alternating_blocks`] shifted one hour earlier.
pub fn alternating_slots(start: i64, end: i64) -> Vec<Slot> {
    (start..end).step_by(2).map(|i| slot(i, i + 1)).collect()
}
