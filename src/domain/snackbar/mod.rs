// SPDX-License-Identifier: MPL-2.0
//! Snackbar domain types.
//!
//! - [`SnackbarDuration`] and the duration policy ([`compute_auto_hide_delay`])
//! - [`SnackbarConfiguration`] and [`Style`] value types
//! - [`AnimationSelector`], [`Animation`] and [`ResolvedAnimations`]
//! - [`AnimationMillis`]: clamped length of the built-in slide animation
//! - [`OwnerId`], [`ViewRef`], [`ContainerRef`], [`Content`]: opaque handles
//!   into the host

mod animation;
mod configuration;
mod duration;
mod newtypes;
mod target;

pub use animation::{Animation, AnimationRef, AnimationSelector, Direction, ResolvedAnimations};
pub use configuration::{SnackbarConfiguration, Style, StylePreset};
pub use duration::{compute_auto_hide_delay, duration_bounds, SnackbarDuration};
pub use newtypes::{animation_bounds, AnimationMillis};
pub use target::{Content, ContainerKind, ContainerRef, CustomViewId, OwnerId, ViewRef};
