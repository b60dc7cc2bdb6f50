//! # slotify
//!
//! Find available time slots around existing bookings.
//!
//! Given a search window and the busy intervals already committed inside or
//! around it, slotify returns the largest free intervals of the window in
//! chronological order, in a single sweep over the bookings.
//!
//! ## Features
//!
//! - **Periods**: [`Block`] (busy), [`Span`] (search window) and [`Slot`]
//!   (free) share the [`Period`] contract, which caller types can implement
//! - **Search**: [`find`] over plain blocks, [`find_periods`] over any
//!   [`Period`], and [`find_with_mapper`] for caller-defined input and output
//!   types with an optional result filter
//! - **Input**: JSON booking lists via [`parsing`]
//! - **Configuration**: TOML settings via [`config`]
//!
//! ## Time handling
//!
//! Instants are `chrono::DateTime<Utc>`. Periods render as
//! `"<start>, <end>"` with both instants in RFC 3339 form and a `Z` suffix,
//! for example `2024-01-15T09:00:00Z, 2024-01-15T10:00:00Z`.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use slotify::{find, format_periods, Block, Span};
//!
//! let day = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
//! let span = Span::new(day, day + Duration::hours(8))?;
//! let blocks = vec![
//!     Block::new(day + Duration::hours(1), day + Duration::hours(2))?,
//!     Block::new(day + Duration::hours(4), day + Duration::hours(5))?,
//! ];
//!
//! let slots = find(&blocks, Some(&span));
//! assert_eq!(slots.len(), 3);
//! print!("{}", format_periods(&slots));
//! # Ok::<(), slotify::Error>(())
//! ```
//!
//! ## Logging
//!
//! The library logs through the `log` facade and never installs a logger.
//!
//! ## I/O
//!
//! The library never touches the filesystem. Reading booking and
//! configuration files is left to the caller, as the `slotify` binary does.

pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;

pub use algorithms::{by_start, find, find_periods, find_with_mapper, FindOptions};
pub use config::{OutputFormat, SlotifyConfig};
pub use error::{Error, Result};
pub use models::{format_instant, format_periods, Block, Instant, Period, Slot, Span};
pub use parsing::parse_blocks_json;
