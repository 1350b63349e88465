// SPDX-License-Identifier: MPL-2.0
//! Scheduler-wide settings derived from the settings file.

use crate::config::Config;
use crate::domain::snackbar::AnimationMillis;

/// Knobs that apply to every banner the scheduler presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerSettings {
    /// Length of the built-in slide animation.
    pub default_animation: AnimationMillis,
    /// Whether text banners are announced through the host.
    pub announcements: bool,
}

impl SchedulerSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            default_animation: config.animation_duration(),
            announcements: config.announcements_enabled(),
        }
    }
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
