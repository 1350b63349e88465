// SPDX-License-Identifier: MPL-2.0
//! Host binding port definition.
//!
//! This module defines the [`HostBinding`] trait through which the scheduler
//! reaches the view tree it does not own. A UI toolkit adapter implements it
//! by building the banner view, inserting it, measuring it and running the
//! animations.
//!
//! # Design Notes
//!
//! - Every call is best-effort. The scheduler checks
//!   [`HostBinding::is_owner_valid`] first and treats a dead owner as
//!   "drop the banner and move on", never as an error
//! - Layout is asynchronous in most toolkits: [`HostBinding::request_layout`]
//!   may answer [`LayoutStatus::Pending`], in which case the host later calls
//!   `layout_ready` on the scheduler (or on the service handle)
//! - Methods are not `async`: the scheduler runs on a single task and must
//!   return immediately
//! - Animation lengths returned by the host are capped at
//!   [`crate::domain::snackbar::animation_bounds::MAX_MS`]

use crate::domain::snackbar::{
    Animation, AnimationRef, ContainerRef, Direction, OwnerId, ViewRef,
};
use crate::ui::snackbar::Banner;
use std::time::Duration;

// =============================================================================
// Placement
// =============================================================================

/// Where in the target parent the banner view goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// After all existing children.
    Append,
    /// At index 0, so the banner renders first.
    Front,
}

/// The parent a banner view is inserted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachTarget {
    /// The owner's content root.
    OwnerContent(OwnerId),
    /// A sub-view of the owner standing in for its content root.
    OwnerView(ViewRef),
    /// A caller-supplied container inside the owner.
    Container(ContainerRef),
}

/// Parent plus position, decided by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub target: AttachTarget,
    pub position: InsertPosition,
}

impl Placement {
    /// Placement policy: a caller container whose kind ignores child order
    /// gets the banner appended and any other container gets it first.
    /// Without a container the banner is appended to the owner sub-view, or
    /// to the owner's content root when there is none.
    #[must_use]
    pub fn for_target(
        owner: OwnerId,
        owner_view: Option<ViewRef>,
        container: Option<ContainerRef>,
    ) -> Self {
        match container {
            Some(container) if container.kind().ignores_child_order() => Self {
                target: AttachTarget::Container(container),
                position: InsertPosition::Append,
            },
            Some(container) => Self {
                target: AttachTarget::Container(container),
                position: InsertPosition::Front,
            },
            None => Self {
                target: owner_view
                    .map_or(AttachTarget::OwnerContent(owner), AttachTarget::OwnerView),
                position: InsertPosition::Append,
            },
        }
    }
}

/// Answer to a layout request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutStatus {
    /// The view is already measured; entry can start right away.
    Ready,
    /// The host will report `layout_ready` once measured.
    Pending,
}

// =============================================================================
// HostBinding Trait
// =============================================================================

/// Port to the host view tree.
///
/// # Thread Safety
///
/// Implementations must be `Send` to be moved into the scheduler service
/// task. They are never shared: the scheduler holds the only reference and
/// calls them from one task at a time.
pub trait HostBinding: Send {
    /// Whether the owner can still present anything.
    fn is_owner_valid(&self, owner: OwnerId) -> bool;

    /// Inserts the banner view at `placement`. Returns whether it was
    /// inserted.
    fn attach(&mut self, banner: &Banner, placement: Placement) -> bool;

    /// Whether the banner view currently has a parent.
    fn is_attached(&self, banner: &Banner) -> bool;

    /// Asks for the banner view to be measured.
    fn request_layout(&mut self, banner: &Banner) -> LayoutStatus;

    /// Resolves a custom animation resource. `None` falls back to the
    /// built-in slide.
    fn resolve_custom_animation(
        &mut self,
        _owner: OwnerId,
        _resource: AnimationRef,
        _direction: Direction,
    ) -> Option<Animation> {
        None
    }

    /// Starts the enter animation and returns how long it runs.
    fn play_enter_animation(&mut self, _banner: &Banner, animation: &Animation) -> Duration {
        animation.duration()
    }

    /// Starts the exit animation and returns how long it runs.
    fn play_exit_animation(&mut self, _banner: &Banner, animation: &Animation) -> Duration {
        animation.duration()
    }

    /// Removes the banner view from its parent, if it has one.
    fn detach(&mut self, banner: &Banner);

    /// Speaks `text` through the platform's accessibility service.
    fn announce(&mut self, _owner: OwnerId, _text: &str) {}
}
