// SPDX-License-Identifier: MPL-2.0
//! Test utilities: a host binding double that records every call.

use crate::application::port::{HostBinding, LayoutStatus, Placement};
use crate::domain::snackbar::{Animation, AnimationRef, Direction, OwnerId};
use crate::ui::snackbar::{Banner, BannerId, LifecycleListener};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// A call the scheduler made on the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Attach(BannerId, Placement),
    RequestLayout(BannerId),
    Enter(BannerId, Duration),
    Exit(BannerId, Duration),
    Detach(BannerId),
    Announce(OwnerId, String),
}

/// In-memory view tree.
#[derive(Debug)]
pub struct RecordingHost {
    pub invalid_owners: HashSet<OwnerId>,
    pub attached: HashSet<BannerId>,
    pub layout: LayoutStatus,
    pub refuse_attach: bool,
    /// Duration returned for custom animation resources; `None` means
    /// unresolvable.
    pub custom_animation: Option<Duration>,
    /// Length reported back from `play_*_animation` instead of the
    /// requested one.
    pub reported_animation: Option<Duration>,
    pub calls: Vec<HostCall>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            invalid_owners: HashSet::new(),
            attached: HashSet::new(),
            layout: LayoutStatus::Ready,
            refuse_attach: false,
            custom_animation: None,
            reported_animation: None,
            calls: Vec::new(),
        }
    }
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pending_layout() -> Self {
        Self {
            layout: LayoutStatus::Pending,
            ..Self::default()
        }
    }

    pub fn invalidate(&mut self, owner: OwnerId) {
        self.invalid_owners.insert(owner);
    }

    /// Banner ids passed to `attach`, in order.
    pub fn attach_order(&self) -> Vec<BannerId> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Attach(id, _) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, matches: impl Fn(&HostCall) -> bool) -> usize {
        self.calls.iter().filter(|call| matches(call)).count()
    }
}

impl HostBinding for RecordingHost {
    fn is_owner_valid(&self, owner: OwnerId) -> bool {
        !self.invalid_owners.contains(&owner)
    }

    fn attach(&mut self, banner: &Banner, placement: Placement) -> bool {
        self.calls.push(HostCall::Attach(banner.id(), placement));
        if self.refuse_attach {
            return false;
        }
        self.attached.insert(banner.id());
        true
    }

    fn is_attached(&self, banner: &Banner) -> bool {
        self.attached.contains(&banner.id())
    }

    fn request_layout(&mut self, banner: &Banner) -> LayoutStatus {
        self.calls.push(HostCall::RequestLayout(banner.id()));
        self.layout
    }

    fn resolve_custom_animation(
        &mut self,
        _owner: OwnerId,
        resource: AnimationRef,
        direction: Direction,
    ) -> Option<Animation> {
        self.custom_animation
            .map(|duration| Animation::custom(direction, resource, duration))
    }

    fn play_enter_animation(&mut self, banner: &Banner, animation: &Animation) -> Duration {
        self.calls.push(HostCall::Enter(banner.id(), animation.duration()));
        self.reported_animation.unwrap_or(animation.duration())
    }

    fn play_exit_animation(&mut self, banner: &Banner, animation: &Animation) -> Duration {
        self.calls.push(HostCall::Exit(banner.id(), animation.duration()));
        self.reported_animation.unwrap_or(animation.duration())
    }

    fn detach(&mut self, banner: &Banner) {
        self.calls.push(HostCall::Detach(banner.id()));
        self.attached.remove(&banner.id());
    }

    fn announce(&mut self, owner: OwnerId, text: &str) {
        self.calls.push(HostCall::Announce(owner, text.to_string()));
    }
}

/// Listener counting its callbacks.
#[derive(Debug, Default)]
pub struct CountingListener {
    pub displayed: AtomicUsize,
    pub removed: AtomicUsize,
}

impl CountingListener {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn displayed(&self) -> usize {
        self.displayed.load(Ordering::SeqCst)
    }

    pub fn removed(&self) -> usize {
        self.removed.load(Ordering::SeqCst)
    }
}

impl LifecycleListener for CountingListener {
    fn on_displayed(&self) {
        self.displayed.fetch_add(1, Ordering::SeqCst);
    }

    fn on_removed(&self) {
        self.removed.fetch_add(1, Ordering::SeqCst);
    }
}
