//! Parsers for booking input.
//!
//! # Example
//!
//! ```
//! use slotify::parsing::json_parser::parse_blocks_json;
//!
//! let json = r#"{"blocks": [{"start": "2024-01-15T09:00:00Z", "end": "2024-01-15T10:00:00Z"}]}"#;
//! let blocks = parse_blocks_json(json).expect("Failed to parse bookings");
//! assert_eq!(blocks.len(), 1);
//! ```

pub mod json_parser;


pub use json_parser::parse_blocks_json;
