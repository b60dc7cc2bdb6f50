//! The start/end contract shared by every interval type.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::Deserialize;

/// Point in time used by every period.
pub type Instant = DateTime<Utc>;

/// Anything that has a start and an end instant.
///
/// [`Block`](crate::Block), [`Span`](crate::Span) and [`Slot`](crate::Slot)
/// implement it, and caller types can implement it too so they can be fed to
/// [`find_periods`](crate::find_periods) directly.
pub trait Period {
    fn start(&self) -> Instant;

    fn end(&self) -> Instant;

    /// Length of the period.
    fn duration(&self) -> Duration {
        self.end() - self.start()
    }

    /// Whether both periods cover exactly the same range.
    fn same_range<P: Period + ?Sized>(&self, other: &P) -> bool
    where
        Self: Sized,
    {
        self.start() == other.start() && self.end() == other.end()
    }

    /// Canonical `"<start>, <end>"` rendering, see [`format_instant`].
    fn render(&self) -> String {
        format!(
            "{}, {}",
            format_instant(&self.start()),
            format_instant(&self.end())
        )
    }
}

impl<T: Period + ?Sized> Period for &T {
    fn start(&self) -> Instant {
        (**self).start()
    }

    fn end(&self) -> Instant {
        (**self).end()
    }
}

impl<T: Period + ?Sized> Period for Box<T> {
    fn start(&self) -> Instant {
        (**self).start()
    }

    fn end(&self) -> Instant {
        (**self).end()
    }
}

/// Unvalidated `{start, end}` record that deserialization goes through
/// before hitting a validating constructor.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct RawPeriod {
    pub start: Instant,
    pub end: Instant,
}

/// Render an instant as RFC 3339 with a `Z` suffix.
///
/// Sub-second digits only appear when the instant has them, so
/// `2024-01-15T09:00:00Z` and `2024-01-15T09:00:00.250Z` are both possible.
pub fn format_instant(instant: &Instant) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Render each period on its own line, every line terminated by `\n`.
///
/// An empty slice renders as the empty string.
pub fn format_periods<P: Period>(periods: &[P]) -> String {
    periods.iter().map(|p| p.render() + "\n").collect()
}
