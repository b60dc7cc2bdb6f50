//! Interval types: the [`Period`] contract and the three periods built on it.

pub mod block;
pub mod period;
pub mod slot;
pub mod span;

pub use block::Block;
pub use period::{format_instant, format_periods, Instant, Period};
pub use slot::Slot;
pub use span::Span;
