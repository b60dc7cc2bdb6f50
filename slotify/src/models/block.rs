//! Busy intervals.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::period::{Instant, Period, RawPeriod};
use crate::error::{Error, Result};

/// An already scheduled, immovable interval.
///
/// Blocks never change after construction. During a search they are tested
/// against the remaining part of the search window with the four relation
/// predicates below. The predicates overlap at their boundaries on purpose:
/// a block equal to the target satisfies both [`Block::contains`] and
/// [`Block::is_contained_in`], and the sweep settles such cases by the order
/// in which it asks.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use slotify::Block;
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
///
/// assert!(Block::new(start, end).is_ok());
/// assert!(Block::new(end, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct Block {
    start: Instant,
    end: Instant,
}

impl Block {
    /// Create a block, rejecting `start > end`.
    pub fn new(start: Instant, end: Instant) -> Result<Self> {
        if start > end {
            return Err(Error::invalid_range(start, end));
        }
        Ok(Self::new_unchecked(start, end))
    }

    /// Create a block without checking the order of `start` and `end`.
    ///
    /// Only use this when the caller already guarantees `start <= end`, for
    /// example when bulk-loading trusted, pre-validated data.
    pub fn new_unchecked(start: Instant, end: Instant) -> Self {
        Self { start, end }
    }

    /// Validated conversion from any other period.
    pub fn from_period<P: Period + ?Sized>(period: &P) -> Result<Self> {
        Self::new(period.start(), period.end())
    }

    /// Map caller items into blocks, stopping at the first failure.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{DateTime, TimeZone, Utc};
    /// use slotify::Block;
    ///
    /// struct Event {
    ///     from: DateTime<Utc>,
    ///     to: DateTime<Utc>,
    /// }
    ///
    /// let day = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    /// let events = vec![Event { from: day, to: day + chrono::Duration::hours(1) }];
    ///
    /// let blocks = Block::from_items(&events, |e| Block::new(e.from, e.to))?;
    /// assert_eq!(blocks.len(), 1);
    /// # Ok::<(), slotify::Error>(())
    /// ```
    pub fn from_items<T, E, F>(items: &[T], mut mapper: F) -> std::result::Result<Vec<Self>, E>
    where
        F: FnMut(&T) -> std::result::Result<Self, E>,
    {
        items.iter().map(|item| mapper(item)).collect()
    }

    /// The block covers the whole target.
    pub fn contains<P: Period + ?Sized>(&self, target: &P) -> bool {
        self.start <= target.start() && target.end() <= self.end
    }

    /// The block lies entirely inside the target.
    pub fn is_contained_in<P: Period + ?Sized>(&self, target: &P) -> bool {
        target.start() <= self.start && self.end <= target.end()
    }

    /// The block covers the target's start edge and ends no later than the
    /// target, sharing some interior with it.
    pub fn overlap_at_start<P: Period + ?Sized>(&self, target: &P) -> bool {
        self.start <= target.start() && self.end <= target.end() && target.start() < self.end
    }

    /// The block starts inside the target and covers its end edge.
    pub fn overlap_at_end<P: Period + ?Sized>(&self, target: &P) -> bool {
        target.start() <= self.start && target.end() <= self.end && self.start < target.end()
    }
}

impl Period for Block {
    fn start(&self) -> Instant {
        self.start
    }

    fn end(&self) -> Instant {
        self.end
    }
}

impl TryFrom<RawPeriod> for Block {
    type Error = Error;

    fn try_from(raw: RawPeriod) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
