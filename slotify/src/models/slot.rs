//! Free-time results.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::period::{Instant, Period, RawPeriod};
use crate::error::{Error, Result};

/// A free interval found by the finder.
///
/// Slots order by start, then by end, so a sorted list of slots is in
/// chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct Slot {
    start: Instant,
    end: Instant,
}

impl Slot {
    /// Create a slot, rejecting `start > end`.
    pub fn new(start: Instant, end: Instant) -> Result<Self> {
        if start > end {
            return Err(Error::invalid_range(start, end));
        }
        Ok(Self::new_unchecked(start, end))
    }

    pub(crate) fn new_unchecked(start: Instant, end: Instant) -> Self {
        Self { start, end }
    }

    /// Whether this slot has no length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl Period for Slot {
    fn start(&self) -> Instant {
        self.start
    }

    fn end(&self) -> Instant {
        self.end
    }
}

impl Ord for Slot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<RawPeriod> for Slot {
    type Error = Error;

    fn try_from(raw: RawPeriod) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn h(offset: i64) -> Instant {
        Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap() + Duration::hours(offset)
    }

    #[test]
    fn test_new_validates_order() {
        assert!(Slot::new(h(0), h(1)).is_ok());
        assert!(Slot::new(h(1), h(0)).is_err());
    }

    #[test]
    fn test_equality() {
        let a = Slot::new(h(0), h(1)).unwrap();
        let b = Slot::new(h(0), h(1)).unwrap();
        let c = Slot::new(h(0), h(2)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_ordering_by_start_then_end() {
        let mut slots = vec![
            Slot::new(h(5), h(8)).unwrap(),
            Slot::new(h(0), h(2)).unwrap(),
            Slot::new(h(0), h(1)).unwrap(),
        ];
        slots.sort();
        assert_eq!(
            slots,
            vec![
                Slot::new(h(0), h(1)).unwrap(),
                Slot::new(h(0), h(2)).unwrap(),
                Slot::new(h(5), h(8)).unwrap(),
            ]
        );
    }

    #[test]
    fn test_serde_roundtrip_through_validation() {
        let slot = Slot::new(h(1), h(3)).unwrap();
        let json = serde_json::to_string(&slot).unwrap();
        assert_eq!(
            json,
            r#"{"start":"2024-01-15T01:00:00Z","end":"2024-01-15T03:00:00Z"}"#
        );
        let back: Slot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slot);
    }

    #[test]
    fn test_is_empty() {
        assert!(Slot::new(h(1), h(1)).unwrap().is_empty());
        assert!(!Slot::new(h(1), h(2)).unwrap().is_empty());
    }
}
