//! Search window and sweep cursor.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::block::Block;
use super::period::{Instant, Period, RawPeriod};
use super::slot::Slot;
use crate::error::{Error, Result};

/// The window to search for free time.
///
/// A `Span` doubles as the cursor of a sweep: the finder clones the caller's
/// span and moves the clone's start forward as busy blocks are consumed. The
/// start only ever moves forward, and never past the end.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct Span {
    start: Instant,
    end: Instant,
}

impl Span {
    /// Create a search window, rejecting `start > end`.
    pub fn new(start: Instant, end: Instant) -> Result<Self> {
        if start > end {
            return Err(Error::invalid_range(start, end));
        }
        Ok(Self { start, end })
    }

    /// Whether any unclaimed time is left.
    pub fn remains(&self) -> bool {
        self.start < self.end
    }

    /// Move the start to the end of `block`.
    ///
    /// The block must not end before the current start; any free time between
    /// the current start and the block has to be taken (see
    /// [`Span::gap_before`]) before shortening.
    pub fn shorten(&mut self, block: &Block) {
        debug_assert!(block.end() >= self.start, "cursor must only move forward");
        self.start = block.end().min(self.end);
    }

    /// Claim everything that is left.
    pub fn exhaust(&mut self) {
        self.start = self.end;
    }

    /// Snapshot of what is left as a result slot.
    pub fn to_slot(&self) -> Slot {
        Slot::new_unchecked(self.start, self.end)
    }

    /// Free time between the current start and the start of `block`.
    pub(crate) fn gap_before(&self, block: &Block) -> Slot {
        Slot::new_unchecked(self.start, block.start())
    }
}

impl Period for Span {
    fn start(&self) -> Instant {
        self.start
    }

    fn end(&self) -> Instant {
        self.end
    }
}

impl TryFrom<RawPeriod> for Span {
    type Error = Error;

    fn try_from(raw: RawPeriod) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
