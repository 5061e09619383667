//! Run defaults configuration.
//!
//! The knobs that used to be hard-coded constants — the default hashtag
//! list, the rotation epoch, the queue's civil-time offset, the id prefix,
//! the fallback cover image, the long template's mentions line — live in a
//! [`Defaults`] struct. Stock values match the original deployment; an
//! optional TOML file overrides them field by field, and CLI flags override
//! both.
//!
//! ```toml
//! # All fields are optional - stock values shown
//!
//! tags = ["whyenglish", "linguistics", "etymology"]
//! id_prefix = "pick"
//! cover_fallback = "../lib/front_cover_small.jpg"
//! epoch = "2025-01-01"           # rotation day zero (UTC)
//! utc_offset_minutes = 540       # queue civil time, +09:00
//! mentions = "@whyenglish @hel_press"
//! ```

use chrono::{FixedOffset, NaiveDate};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("utc_offset_minutes {0} is out of range (must be within ±24h)")]
    InvalidOffset(i32),
}

/// Stock-overridable run defaults. Every field has a stock value, so a
/// config file only needs the fields it changes.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    /// Base hashtags, always included before any `--tag` extras.
    pub tags: Vec<String>,
    /// Prefix for row ids and text-artifact filenames.
    pub id_prefix: String,
    /// Fallback image, relative to the landing-page document's directory.
    pub cover_fallback: String,
    /// Rotation day zero, a UTC calendar date.
    pub epoch: NaiveDate,
    /// Fixed civil-time offset for every timestamp the tool writes.
    pub utc_offset_minutes: i32,
    /// Account-mentions line used by the long template only.
    pub mentions: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            tags: vec![
                "whyenglish".to_string(),
                "linguistics".to_string(),
                "etymology".to_string(),
            ],
            id_prefix: "pick".to_string(),
            cover_fallback: "../lib/front_cover_small.jpg".to_string(),
            epoch: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid stock epoch"),
            utc_offset_minutes: 9 * 60,
            mentions: "@whyenglish @hel_press".to_string(),
        }
    }
}

impl Defaults {
    /// Load defaults from a TOML file, erroring if it is missing or
    /// malformed — an explicitly named config file that doesn't apply must
    /// not be silently ignored.
    pub fn load(path: &Path) -> Result<Defaults, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let defaults: Defaults = toml::from_str(&text)?;
        defaults.offset()?;
        Ok(defaults)
    }

    /// The civil-time offset as a chrono [`FixedOffset`].
    pub fn offset(&self) -> Result<FixedOffset, ConfigError> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(ConfigError::InvalidOffset(self.utc_offset_minutes))
    }
}
