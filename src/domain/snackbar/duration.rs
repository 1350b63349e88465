// SPDX-License-Identifier: MPL-2.0
//! Display duration value type and the duration policy.
//!
//! The policy is a pure function computing the on-screen window of a banner
//! from its configuration and the measured animation lengths. The auto-hide
//! timer armed when the enter animation starts uses this window, and so does
//! the re-check wait when the view tree drifted from the queue.

use super::configuration::SnackbarConfiguration;
use std::time::Duration;

// =============================================================================
// Duration Constants
// =============================================================================

/// Named duration values in milliseconds.
pub mod duration_bounds {
    /// Short display duration.
    pub const SHORT_MS: u32 = 3000;
    /// Long display duration.
    pub const LONG_MS: u32 = 5000;
    /// Raw sentinel used by integer-based settings for "never auto-hide".
    pub const INFINITE_RAW: i64 = -1;
}

// =============================================================================
// SnackbarDuration
// =============================================================================

/// How long a banner stays on screen once its enter animation started,
/// excluding animation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SnackbarDuration {
    /// 3 seconds.
    #[default]
    Short,
    /// 5 seconds.
    Long,
    /// Never auto-hides; only an explicit hide removes the banner.
    Infinite,
    /// Explicit duration in milliseconds. Zero hides right after the
    /// enter animation.
    Millis(u32),
}

impl SnackbarDuration {
    /// Builds a duration from the integer encoding where any negative value
    /// means infinite.
    #[must_use]
    pub fn from_raw_millis(raw: i64) -> Self {
        if raw < 0 {
            return Self::Infinite;
        }
        match u32::try_from(raw) {
            Ok(ms) if ms == duration_bounds::SHORT_MS => Self::Short,
            Ok(ms) if ms == duration_bounds::LONG_MS => Self::Long,
            Ok(ms) => Self::Millis(ms),
            Err(_) => Self::Millis(u32::MAX),
        }
    }

    /// Returns the integer encoding, with [`duration_bounds::INFINITE_RAW`]
    /// for infinite.
    #[must_use]
    pub fn to_raw_millis(self) -> i64 {
        self.as_duration()
            .map_or(duration_bounds::INFINITE_RAW, |d| {
                i64::try_from(d.as_millis()).unwrap_or(i64::MAX)
            })
    }

    /// Returns the configured time, or `None` for [`SnackbarDuration::Infinite`].
    #[must_use]
    pub fn as_duration(self) -> Option<Duration> {
        match self {
            Self::Short => Some(Duration::from_millis(u64::from(duration_bounds::SHORT_MS))),
            Self::Long => Some(Duration::from_millis(u64::from(duration_bounds::LONG_MS))),
            Self::Infinite => None,
            Self::Millis(ms) => Some(Duration::from_millis(u64::from(ms))),
        }
    }

    #[must_use]
    pub fn is_infinite(self) -> bool {
        matches!(self, Self::Infinite)
    }
}

// =============================================================================
// Duration Policy
// =============================================================================

/// Total on-screen window of a banner: configured duration plus both
/// animations. `None` when the duration is infinite, meaning no timer must
/// be scheduled at all.
#[must_use]
pub fn compute_auto_hide_delay(
    config: &SnackbarConfiguration,
    enter: Duration,
    exit: Duration,
) -> Option<Duration> {
    config
        .duration()
        .as_duration()
        .map(|configured| configured.saturating_add(enter).saturating_add(exit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn named_durations_resolve_to_expected_values() {
        assert_eq!(SnackbarDuration::Short.as_duration(), Some(ms(3000)));
        assert_eq!(SnackbarDuration::Long.as_duration(), Some(ms(5000)));
        assert_eq!(SnackbarDuration::Infinite.as_duration(), None);
        assert_eq!(SnackbarDuration::Millis(1234).as_duration(), Some(ms(1234)));
    }

    #[test]
    fn raw_negative_values_mean_infinite() {
        assert_eq!(SnackbarDuration::from_raw_millis(-1), SnackbarDuration::Infinite);
        assert_eq!(SnackbarDuration::from_raw_millis(-500), SnackbarDuration::Infinite);
        assert_eq!(SnackbarDuration::Infinite.to_raw_millis(), -1);
    }

    #[test]
    fn raw_values_map_back_to_named_durations() {
        assert_eq!(SnackbarDuration::from_raw_millis(3000), SnackbarDuration::Short);
        assert_eq!(SnackbarDuration::from_raw_millis(5000), SnackbarDuration::Long);
        assert_eq!(SnackbarDuration::from_raw_millis(0), SnackbarDuration::Millis(0));
        assert_eq!(SnackbarDuration::Long.to_raw_millis(), 5000);
    }

    #[test]
    fn auto_hide_delay_sums_configured_and_animations() {
        let config = SnackbarConfiguration::new().with_duration(SnackbarDuration::Short);
        assert_eq!(compute_auto_hide_delay(&config, ms(400), ms(400)), Some(ms(3800)));
    }

    #[test]
    fn auto_hide_delay_is_none_for_infinite() {
        let config = SnackbarConfiguration::new().with_duration(SnackbarDuration::Infinite);
        assert_eq!(compute_auto_hide_delay(&config, ms(400), ms(400)), None);
    }

    #[test]
    fn zero_duration_only_waits_for_animations() {
        let config = SnackbarConfiguration::new().with_duration(SnackbarDuration::Millis(0));
        assert_eq!(compute_auto_hide_delay(&config, ms(250), ms(300)), Some(ms(550)));
    }
}
