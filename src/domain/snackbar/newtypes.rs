// SPDX-License-Identifier: MPL-2.0
//! Snackbar newtypes.

use std::time::Duration;

/// Bounds of the built-in slide animation length (0 to 5000 ms).
pub mod animation_bounds {
    /// Minimum length; zero disables the slide visually.
    pub const MIN_MS: u32 = 0;
    /// Maximum length.
    pub const MAX_MS: u32 = 5000;
    /// Default length of the slide in/out animations.
    pub const DEFAULT_MS: u32 = 400;
}

/// Length of the built-in slide animation, clamped to
/// [`animation_bounds::MIN_MS`]..=[`animation_bounds::MAX_MS`].
///
/// ```
/// use topsnack::domain::snackbar::AnimationMillis;
///
/// assert_eq!(AnimationMillis::default().value(), 400);
/// assert_eq!(AnimationMillis::new(60_000).value(), 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationMillis(u32);

impl AnimationMillis {
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(animation_bounds::MIN_MS, animation_bounds::MAX_MS))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }

    /// Caps a host-measured animation length at [`animation_bounds::MAX_MS`].
    #[must_use]
    pub fn cap(duration: Duration) -> Duration {
        duration.min(Self(animation_bounds::MAX_MS).as_duration())
    }
}

impl Default for AnimationMillis {
    fn default() -> Self {
        Self(animation_bounds::DEFAULT_MS)
    }
}
