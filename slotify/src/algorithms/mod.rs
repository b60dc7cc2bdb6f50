//! Search algorithms over periods.

pub mod finder;

pub use finder::{by_start, find, find_periods, find_with_mapper, FindOptions};
