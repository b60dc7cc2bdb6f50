//! Slotify command-line front end
//!
//! Prints the free slots of a search window around the bookings in a JSON file.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin slotify --features cli -- \
//!   bookings.json 2024-01-15T09:00:00Z 2024-01-15T17:00:00Z
//! ```
//!
//! `bookings.json` holds either an array of `{"start": ..., "end": ...}` records
//! or an object with such an array under `blocks`.
//!
//! # Environment Variables
//!
//! - `SLOTIFY_CONFIG`: Path to a TOML configuration file (default: `slotify.toml`
//!   in the standard locations, built-in defaults when none exists)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use slotify::config::CONFIG_FILE_NAME;
use slotify::{
    by_start, find_with_mapper, format_periods, parse_blocks_json, Block, OutputFormat, Slot,
    SlotifyConfig, Span,
};

const USAGE: &str = "usage: slotify <bookings.json> <span-start> <span-end>";

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let [bookings_path, start, end] = args.as_slice() else {
        bail!(USAGE);
    };

    let config = load_config()?;
    let span = Span::new(parse_instant(start)?, parse_instant(end)?)
        .context("Invalid search span")?;
    let blocks = load_blocks(Path::new(bookings_path))?;

    info!(
        "Searching {} around {} bookings (min slot {} min)",
        span,
        blocks.len(),
        config.search.min_slot_minutes
    );

    let slots: Vec<Slot> = find_with_mapper(
        &blocks,
        Some(&span),
        by_start,
        |block| Ok::<_, slotify::Error>(*block),
        Ok,
        &config.search.options(),
    )
    .context("Search failed")?;

    info!("Found {} free slots", slots.len());

    match config.output.format {
        OutputFormat::Text => {
            println!("Search span:\n{}\n", span);
            println!("Bookings:\n{}", format_periods(&blocks));
            print!("Free slots:\n{}", format_periods(&slots));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&slots)?);
        }
    }

    Ok(())
}

fn load_blocks(path: &Path) -> anyhow::Result<Vec<Block>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read bookings from {}", path.display()))?;
    parse_blocks_json(&content)
        .with_context(|| format!("Failed to parse bookings from {}", path.display()))
}

fn load_config() -> anyhow::Result<SlotifyConfig> {
    let path = match env::var("SLOTIFY_CONFIG") {
        Ok(path) => Some(PathBuf::from(path)),
        Err(_) => first_existing(&default_config_candidates()),
    };

    match path {
        Some(path) => read_config(&path),
        None => {
            warn!("No configuration file found, using defaults");
            Ok(SlotifyConfig::default())
        }
    }
}

fn read_config(path: &Path) -> anyhow::Result<SlotifyConfig> {
    debug!("Loading configuration from {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration from {}", path.display()))?;
    SlotifyConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

/// Standard configuration locations, in lookup order.
fn default_config_candidates() -> [PathBuf; 3] {
    [
        PathBuf::from(CONFIG_FILE_NAME),
        Path::new("slotify").join(CONFIG_FILE_NAME),
        Path::new("..").join(CONFIG_FILE_NAME),
    ]
}

fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|path| path.exists()).cloned()
}

fn parse_instant(raw: &str) -> anyhow::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("'{}' is not an RFC 3339 instant", raw))
}
