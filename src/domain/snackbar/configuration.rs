// SPDX-License-Identifier: MPL-2.0
//! Per-banner display configuration and style presets.

use super::animation::AnimationSelector;
use super::duration::SnackbarDuration;

// =============================================================================
// SnackbarConfiguration
// =============================================================================

/// Duration and animation choices for one banner.
///
/// # Example
///
/// ```
/// use topsnack::domain::snackbar::{AnimationSelector, SnackbarConfiguration, SnackbarDuration};
///
/// let config = SnackbarConfiguration::new()
///     .with_duration(SnackbarDuration::Long)
///     .with_exit_animation(AnimationSelector::from_resource_id(7));
///
/// assert_eq!(config.duration(), SnackbarDuration::Long);
/// assert_eq!(config.enter_animation(), AnimationSelector::Default);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SnackbarConfiguration {
    duration: SnackbarDuration,
    enter_animation: AnimationSelector,
    exit_animation: AnimationSelector,
}

impl SnackbarConfiguration {
    /// Short duration with the default slide animations.
    pub const DEFAULT: Self = Self {
        duration: SnackbarDuration::Short,
        enter_animation: AnimationSelector::Default,
        exit_animation: AnimationSelector::Default,
    };

    #[must_use]
    pub fn new() -> Self {
        Self::DEFAULT
    }

    #[must_use]
    pub fn with_duration(mut self, duration: SnackbarDuration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_enter_animation(mut self, selector: AnimationSelector) -> Self {
        self.enter_animation = selector;
        self
    }

    #[must_use]
    pub fn with_exit_animation(mut self, selector: AnimationSelector) -> Self {
        self.exit_animation = selector;
        self
    }

    #[must_use]
    pub fn duration(&self) -> SnackbarDuration {
        self.duration
    }

    #[must_use]
    pub fn enter_animation(&self) -> AnimationSelector {
        self.enter_animation
    }

    #[must_use]
    pub fn exit_animation(&self) -> AnimationSelector {
        self.exit_animation
    }
}

// =============================================================================
// Style
// =============================================================================

/// Visual intent of a banner. Rendering is up to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StylePreset {
    /// Something went wrong.
    Alert,
    /// An action succeeded.
    Confirm,
    /// General information.
    Info,
    /// No preset; used for custom-view banners.
    #[default]
    Plain,
}

/// A style preset plus the display configuration it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    preset: StylePreset,
    configuration: SnackbarConfiguration,
}

impl Style {
    #[must_use]
    pub fn new(preset: StylePreset) -> Self {
        Self {
            preset,
            configuration: SnackbarConfiguration::DEFAULT,
        }
    }

    #[must_use]
    pub fn alert() -> Self {
        Self::new(StylePreset::Alert)
    }

    #[must_use]
    pub fn confirm() -> Self {
        Self::new(StylePreset::Confirm)
    }

    #[must_use]
    pub fn info() -> Self {
        Self::new(StylePreset::Info)
    }

    /// Returns a copy of this style using `configuration`.
    #[must_use]
    pub fn with_configuration(mut self, configuration: SnackbarConfiguration) -> Self {
        self.configuration = configuration;
        self
    }

    #[must_use]
    pub fn preset(&self) -> StylePreset {
        self.preset
    }

    #[must_use]
    pub fn configuration(&self) -> SnackbarConfiguration {
        self.configuration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::snackbar::AnimationRef;

    #[test]
    fn default_configuration_is_short_with_default_animations() {
        let config = SnackbarConfiguration::default();
        assert_eq!(config, SnackbarConfiguration::DEFAULT);
        assert_eq!(config.duration(), SnackbarDuration::Short);
        assert_eq!(config.enter_animation(), AnimationSelector::Default);
        assert_eq!(config.exit_animation(), AnimationSelector::Default);
    }

    #[test]
    fn builder_methods_override_single_fields() {
        let custom = AnimationSelector::Custom(AnimationRef::new(3));
        let config = SnackbarConfiguration::new()
            .with_duration(SnackbarDuration::Infinite)
            .with_enter_animation(custom);

        assert!(config.duration().is_infinite());
        assert_eq!(config.enter_animation(), custom);
        assert_eq!(config.exit_animation(), AnimationSelector::Default);
    }

    #[test]
    fn presets_share_the_default_configuration() {
        for style in [Style::alert(), Style::confirm(), Style::info()] {
            assert_eq!(style.configuration(), SnackbarConfiguration::DEFAULT);
        }
        assert_ne!(Style::alert(), Style::info());
    }

    #[test]
    fn with_configuration_keeps_preset() {
        let style = Style::confirm()
            .with_configuration(SnackbarConfiguration::new().with_duration(SnackbarDuration::Long));
        assert_eq!(style.preset(), StylePreset::Confirm);
        assert_eq!(style.configuration().duration(), SnackbarDuration::Long);
    }
}
