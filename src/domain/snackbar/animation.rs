// SPDX-License-Identifier: MPL-2.0
//! Enter/exit animation selectors and resolved animations.
//!
//! The curves themselves belong to the host; the scheduler only needs to
//! know which animation to ask for and how long it lasts.

use super::newtypes::AnimationMillis;
use std::time::Duration;

/// Opaque reference to a host-provided animation resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationRef(u32);

impl AnimationRef {
    /// Wraps a host resource identifier.
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn id(self) -> u32 {
        self.0
    }
}

/// Which animation a banner asks for when entering or leaving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationSelector {
    /// Built-in slide in from the top / slide out to the top.
    #[default]
    Default,
    /// A host resource, resolved through the host binding.
    Custom(AnimationRef),
}

impl AnimationSelector {
    /// Maps a raw resource id where `0` (or less) means "use the default".
    #[must_use]
    pub fn from_resource_id(id: i64) -> Self {
        match u32::try_from(id) {
            Ok(0) | Err(_) => Self::Default,
            Ok(id) => Self::Custom(AnimationRef::new(id)),
        }
    }
}

/// Whether an animation brings a banner in or takes it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Enter,
    Exit,
}

/// An animation resolved for a specific banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    direction: Direction,
    selector: AnimationSelector,
    duration: Duration,
}

impl Animation {
    /// The built-in slide animation for `direction`.
    #[must_use]
    pub fn slide(direction: Direction, duration: Duration) -> Self {
        Self {
            direction,
            selector: AnimationSelector::Default,
            duration,
        }
    }

    /// A host animation resource with its measured duration.
    #[must_use]
    pub fn custom(direction: Direction, resource: AnimationRef, duration: Duration) -> Self {
        Self {
            direction,
            selector: AnimationSelector::Custom(resource),
            duration,
        }
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn selector(&self) -> AnimationSelector {
        self.selector
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The same animation with its length capped by [`AnimationMillis::cap`].
    #[must_use]
    pub fn capped(self) -> Self {
        Self {
            duration: AnimationMillis::cap(self.duration),
            ..self
        }
    }
}

/// The enter/exit pair memoized on a banner once its owner is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAnimations {
    pub enter: Animation,
    pub exit: Animation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_resource_ids_select_default() {
        assert_eq!(AnimationSelector::from_resource_id(0), AnimationSelector::Default);
        assert_eq!(AnimationSelector::from_resource_id(-3), AnimationSelector::Default);
    }

    #[test]
    fn positive_resource_ids_select_custom() {
        assert_eq!(
            AnimationSelector::from_resource_id(42),
            AnimationSelector::Custom(AnimationRef::new(42))
        );
    }

    #[test]
    fn slide_keeps_direction_and_duration() {
        let animation = Animation::slide(Direction::Exit, Duration::from_millis(400));
        assert_eq!(animation.direction(), Direction::Exit);
        assert_eq!(animation.selector(), AnimationSelector::Default);
        assert_eq!(animation.duration(), Duration::from_millis(400));
    }

    #[test]
    fn capped_keeps_resource_and_limits_length() {
        let resource = AnimationRef::new(9);
        let animation = Animation::custom(Direction::Enter, resource, Duration::MAX).capped();
        assert_eq!(animation.selector(), AnimationSelector::Custom(resource));
        assert_eq!(animation.duration(), Duration::from_millis(5000));
    }
}
