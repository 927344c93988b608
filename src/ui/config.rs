//! # Configuration
//!
//! Per-installation settings stored in `~/.config/hotel-tv/config.json`.
//!
//! ## Overview
//!
//! The [`Config`] struct is deserialized from a JSON file in the platform
//! config directory. Every field has a default, so an empty object (or no
//! file at all) yields a working setup:
//!
//! ```json
//! {
//!   "theme": "Tolteka Night",
//!   "language": "es",
//!   "room": "1",
//!   "airport": "SAL",
//!   "default_service": 0
//! }
//! ```
//!
//! The `directories` crate is used to resolve the platform-appropriate config
//! directory.

use crate::clock::Language;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Installation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The name of the color theme (must match a built-in theme name).
    #[serde(default = "default_theme_name")]
    pub theme: String,
    /// Greeting, date and widget language.
    #[serde(default)]
    pub language: Language,
    /// Room label shown in the dashboard header.
    #[serde(default = "default_room")]
    pub room: String,
    /// IATA code of the airport shown on the flight board.
    #[serde(default = "default_airport")]
    pub airport: String,
    /// Dashboard service focused when the home screen mounts.
    #[serde(default)]
    pub default_service: usize,
}

fn default_theme_name() -> String {
    "Tolteka Night".to_string()
}

fn default_room() -> String {
    "1".to_string()
}

fn default_airport() -> String {
    "SAL".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            language: Language::default(),
            room: default_room(),
            airport: default_airport(),
            default_service: 0,
        }
    }
}

impl Config {
    /// Load configuration from the default location. Returns
    /// `Config::default()` if the file does not exist or cannot be parsed.
    pub fn load() -> Self {
        match Self::config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("using default config: {e:#}");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Return the path to the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "hotel-tv")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}
