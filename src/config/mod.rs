// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's settings, loading and saving them to a
//! `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use topsnack::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Slow down the default slide animation
//! config.animation_duration_ms = Some(600);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::domain::diagnostics::BufferCapacity;
use crate::domain::snackbar::AnimationMillis;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::{
    DEFAULT_ANIMATION_DURATION_MS, DEFAULT_ANNOUNCEMENTS, DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY,
};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "TopSnack";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub animation_duration_ms: Option<u32>,
    #[serde(default)]
    pub announcements: Option<bool>,
    #[serde(default)]
    pub diagnostics_buffer_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animation_duration_ms: Some(DEFAULT_ANIMATION_DURATION_MS),
            announcements: Some(DEFAULT_ANNOUNCEMENTS),
            diagnostics_buffer_capacity: Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        }
    }
}

impl Config {
    /// Default animation duration, clamped to its valid range.
    #[must_use]
    pub fn animation_duration(&self) -> AnimationMillis {
        self.animation_duration_ms
            .map_or_else(AnimationMillis::default, AnimationMillis::new)
    }

    #[must_use]
    pub fn announcements_enabled(&self) -> bool {
        self.announcements.unwrap_or(DEFAULT_ANNOUNCEMENTS)
    }

    /// Lifecycle event log capacity, clamped to its valid range.
    #[must_use]
    pub fn diagnostics_capacity(&self) -> BufferCapacity {
        self.diagnostics_buffer_capacity
            .map_or_else(BufferCapacity::default, BufferCapacity::new)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads settings from the platform config directory, or defaults when the
/// file does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads settings from `path`. Unparseable content yields the defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), %err, "invalid settings file, using defaults");
        Config::default()
    }))
}

/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
