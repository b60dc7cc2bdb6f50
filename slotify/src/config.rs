//! Configuration file support.
//!
//! Settings are read from a TOML file such as:
//!
//! ```toml
//! [search]
//! min_slot_minutes = 30
//!
//! [output]
//! format = "json"
//! ```
//!
//! Every section and key is optional. Finding and reading the file is up to
//! the caller; [`CONFIG_FILE_NAME`] is the conventional name.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::algorithms::FindOptions;
use crate::error::{Error, Result};
use crate::models::{Period, Slot};

/// Conventional configuration file name.
pub const CONFIG_FILE_NAME: &str = "slotify.toml";

/// Slotify configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotifyConfig {
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

/// Search settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Slots shorter than this many minutes are not reported.
    #[serde(default)]
    pub min_slot_minutes: u32,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `"<start>, <end>"` line per period
    #[default]
    Text,
    /// JSON array of `{start, end}` objects
    Json,
}

impl SearchSettings {
    /// Shortest slot worth reporting.
    pub fn min_slot(&self) -> Duration {
        Duration::minutes(i64::from(self.min_slot_minutes))
    }

    /// Finder options applying these settings to plain [`Slot`] results.
    pub fn options(&self) -> FindOptions<Slot> {
        if self.min_slot_minutes == 0 {
            return FindOptions::default();
        }
        let min = self.min_slot();
        FindOptions::with_filter(move |slot: &Slot| slot.duration() >= min)
    }
}

impl SlotifyConfig {
    /// Parse configuration from TOML text.
    ///
    /// # Returns
    /// * `Ok(SlotifyConfig)` if successful
    /// * `Err(Error::Config)` if the text is not valid configuration
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
    }
}
