// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! Bounds live next to the newtypes that enforce them; this module re-states
//! the defaults that the settings file falls back to.

use crate::domain::diagnostics::buffer_capacity_bounds;
use crate::domain::snackbar::animation_bounds;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default duration of the built-in slide animation (in milliseconds).
pub const DEFAULT_ANIMATION_DURATION_MS: u32 = animation_bounds::DEFAULT_MS;

// ==========================================================================
// Accessibility Defaults
// ==========================================================================

/// Whether text banners are announced when they appear.
pub const DEFAULT_ANNOUNCEMENTS: bool = true;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default lifecycle event log capacity.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_lie_within_bounds() {
        assert!(DEFAULT_ANIMATION_DURATION_MS <= animation_bounds::MAX_MS);
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= buffer_capacity_bounds::MIN);
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= buffer_capacity_bounds::MAX);
    }
}
