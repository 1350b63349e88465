// SPDX-License-Identifier: MPL-2.0
//! Single-slot presentation scheduler.
//!
//! The [`Scheduler`] owns the FIFO of pending banners and guarantees that at
//! most one of them is on screen at a time. It is a plain synchronous state
//! machine: every entry point takes the current instant, and delayed work is
//! posted to a [`MessageQueue`] that the caller drains with
//! [`Scheduler::run_due`]. [`crate::ui::snackbar::SnackbarService`] wraps it
//! in a tokio task for real use.
//!
//! # Lifecycle of the head banner
//!
//! ```text
//! Idle ─enqueue─▶ AwaitingAttach ─layout ready─▶ Entering ─EnterFinished─▶ Visible
//!                                                    │                       │
//!                                                    └──── Remove / hide ────┤
//!                                                                            ▼
//!                                 Idle ◀──────────── Advance ──────────── Exiting
//! ```
//!
//! Anomalies (dead owners, refused inserts, double shows, a view that left
//! its parent behind the scheduler's back) are never errors. They are
//! logged, recorded in the diagnostics log, and the queue moves on.

use super::banner::{Banner, BannerId, BannerState};
use super::messages::{Message, MessageKind, MessageQueue, MessageTarget};
use super::settings::SchedulerSettings;
use crate::application::port::{HostBinding, LayoutStatus, Placement};
use crate::diagnostics::{DiagnosticsHandle, DropReason, IgnoreReason, LifecycleEventKind};
use crate::domain::snackbar::{
    compute_auto_hide_delay, Animation, AnimationMillis, AnimationSelector, Direction, OwnerId,
    ResolvedAnimations,
};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// What occupies the presentation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulerState {
    #[default]
    Idle,
    /// Head attached (or about to be), waiting for layout.
    AwaitingAttach(BannerId),
    Entering(BannerId),
    Visible(BannerId),
    /// Exit animation running. The banner already left the queue.
    Exiting(BannerId),
}

impl SchedulerState {
    /// The banner at the head of the queue that owns the slot, if any.
    /// An exiting banner is no longer part of the queue and is not reported.
    #[must_use]
    pub fn active(self) -> Option<BannerId> {
        match self {
            Self::AwaitingAttach(id) | Self::Entering(id) | Self::Visible(id) => Some(id),
            Self::Idle | Self::Exiting(_) => None,
        }
    }
}

/// Presents queued banners one at a time through a [`HostBinding`].
pub struct Scheduler<H: HostBinding> {
    host: H,
    settings: SchedulerSettings,
    queue: VecDeque<Banner>,
    messages: MessageQueue,
    state: SchedulerState,
    exiting: Option<Banner>,
    diagnostics: DiagnosticsHandle,
}

impl<H: HostBinding> Scheduler<H> {
    #[must_use]
    pub fn new(host: H, settings: SchedulerSettings, diagnostics: DiagnosticsHandle) -> Self {
        Self {
            host,
            settings,
            queue: VecDeque::new(),
            messages: MessageQueue::new(),
            state: SchedulerState::Idle,
            exiting: None,
            diagnostics,
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    #[must_use]
    pub fn settings(&self) -> SchedulerSettings {
        self.settings
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the scheduler, handing the host back.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Banners waiting or presenting, head first.
    pub fn queued(&self) -> impl Iterator<Item = &Banner> {
        self.queue.iter()
    }

    #[must_use]
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn pending_messages(&self) -> usize {
        self.messages.len()
    }

    /// When [`Scheduler::run_due`] next has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.messages.next_deadline()
    }

    // =========================================================================
    // Producer operations
    // =========================================================================

    /// Appends `banner` to the queue. Presents it right away when nothing
    /// else is on screen.
    ///
    /// A banner can be enqueued once; later calls are ignored.
    pub fn enqueue(&mut self, banner: Banner, now: Instant) {
        let id = banner.id();
        if !banner.mark_queued() {
            tracing::debug!(banner = %id, state = ?banner.state(), "show ignored, banner already shown");
            self.record(LifecycleEventKind::Ignored {
                banner: id.raw(),
                reason: IgnoreReason::AlreadyShown,
            });
            return;
        }

        self.queue.push_back(banner);
        tracing::debug!(banner = %id, queue_len = self.queue.len(), "enqueued");
        self.record(LifecycleEventKind::Enqueued {
            banner: id.raw(),
            queue_len: self.queue.len(),
        });

        if self.state == SchedulerState::Idle {
            self.display_next(now);
        }
    }

    /// The host measured the banner's view; start its entry.
    ///
    /// Ignored unless `banner` is the head the scheduler attached itself. A
    /// head found attached out of band is waiting for its re-check and
    /// does not qualify.
    pub fn layout_ready(&mut self, banner: &Banner, now: Instant) {
        let id = banner.id();
        if self.state != SchedulerState::AwaitingAttach(id)
            || !self.is_head(id)
            || self.is_rechecking(id)
        {
            tracing::debug!(banner = %id, state = ?self.state, "unexpected layout notification");
            self.record(LifecycleEventKind::Ignored {
                banner: id.raw(),
                reason: IgnoreReason::UnexpectedLayout,
            });
            return;
        }
        if !self.owner_alive(banner) {
            self.discard_head(banner, DropReason::StaleOwner);
            self.display_next(now);
            return;
        }
        self.begin_entry(banner, now);
    }

    /// Hides `banner`: animates it out when on screen, withdraws it silently
    /// when still waiting.
    pub fn hide(&mut self, banner: &Banner, now: Instant) {
        let id = banner.id();
        match self.state {
            SchedulerState::Entering(active) | SchedulerState::Visible(active) if active == id => {
                self.handle_remove(id, now);
            }
            _ => self.cancel(banner, now),
        }
    }

    /// Withdraws `banner` immediately, without exit animation.
    pub fn cancel(&mut self, banner: &Banner, now: Instant) {
        let id = banner.id();
        let Some(position) = self.queue.iter().position(|b| b.id() == id) else {
            tracing::trace!(banner = %id, "cancel ignored, banner not queued");
            self.record(LifecycleEventKind::Ignored {
                banner: id.raw(),
                reason: IgnoreReason::NotQueued,
            });
            return;
        };
        let was_active = self.state.active() == Some(id);

        if let Some(banner) = self.queue.remove(position) {
            if self.owner_alive(&banner) && self.host.is_attached(&banner) {
                self.host.detach(&banner);
            }
            self.messages.remove_for(MessageTarget::Banner(id));
            Self::finish(&banner);
        }
        tracing::debug!(banner = %id, was_active, "cancelled");
        self.record(LifecycleEventKind::Cancelled { banner: id.raw() });

        if was_active {
            self.display_next(now);
        }
    }

    /// Cancels every banner belonging to `owner`. Used when the owner is
    /// torn down.
    pub fn clear_owner(&mut self, owner: OwnerId, now: Instant) {
        let active = self.state.active();
        let (mut doomed, active_doomed): (Vec<Banner>, Vec<Banner>) = self
            .queue
            .iter()
            .filter(|b| b.owner() == Some(owner))
            .cloned()
            .partition(|b| Some(b.id()) != active);

        // The active banner goes last so advancing never picks a banner of
        // the same owner.
        doomed.extend(active_doomed);
        tracing::debug!(owner = owner.raw(), count = doomed.len(), "clearing owner");
        for banner in &doomed {
            self.cancel(banner, now);
        }
    }

    /// Drops every banner and every pending timer at once.
    pub fn clear_all(&mut self) {
        self.messages.clear();

        if let Some(head) = self.active_head() {
            if self.owner_alive(&head) && self.host.is_attached(&head) {
                self.host.detach(&head);
            }
        }
        let discarded = self.queue.len();
        for banner in self.queue.drain(..) {
            Self::finish(&banner);
        }
        if let Some(exiting) = self.exiting.take() {
            exiting.set_state(BannerState::Detached);
        }
        self.state = SchedulerState::Idle;

        tracing::debug!(discarded, "queue cleared");
        self.record(LifecycleEventKind::QueueCleared { discarded });
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// Dispatches every message due at `now`. Each message runs with its own
    /// due time as the current instant, so follow-up timers do not drift.
    ///
    /// Returns how many messages were dispatched.
    pub fn run_due(&mut self, now: Instant) -> usize {
        let mut dispatched = 0;
        while let Some(message) = self.messages.pop_due(now) {
            self.dispatch(message);
            dispatched += 1;
        }
        dispatched
    }

    fn dispatch(&mut self, message: Message) {
        tracing::trace!(target = ?message.target, kind = ?message.kind, "dispatching message");
        let now = message.due;
        match (message.target, message.kind) {
            (MessageTarget::Banner(id), MessageKind::AddToView) => {
                if self.state == SchedulerState::AwaitingAttach(id) && self.is_head(id) {
                    self.display_next(now);
                }
            }
            (MessageTarget::Banner(id), MessageKind::EnterFinished) => {
                if self.state == SchedulerState::Entering(id) {
                    if let Some(head) = self.active_head() {
                        head.set_state(BannerState::Visible);
                    }
                    self.state = SchedulerState::Visible(id);
                    tracing::debug!(banner = %id, "visible");
                }
            }
            (MessageTarget::Banner(id), MessageKind::Remove) => self.handle_remove(id, now),
            (MessageTarget::Scheduler, MessageKind::Advance) => {
                if let SchedulerState::Exiting(_) = self.state {
                    if let Some(exiting) = self.exiting.take() {
                        exiting.set_state(BannerState::Detached);
                    }
                    self.display_next(now);
                }
            }
            (target, kind) => {
                tracing::warn!(?target, ?kind, "message with no handler");
            }
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    fn display_next(&mut self, now: Instant) {
        loop {
            self.state = SchedulerState::Idle;
            let Some(head) = self.queue.front().cloned() else {
                tracing::trace!("queue drained");
                return;
            };
            let id = head.id();
            self.state = SchedulerState::AwaitingAttach(id);

            if self.host.is_attached(&head) {
                let wait = self.full_window(&head);
                tracing::warn!(banner = %id, ?wait, "head already attached, rechecking later");
                self.record_recheck(id, wait);
                self.post_after(now, wait, MessageTarget::Banner(id), MessageKind::AddToView);
                return;
            }

            match self.add_to_view(&head, now) {
                Ok(()) => return,
                Err(reason) => self.discard_head(&head, reason),
            }
        }
    }

    fn add_to_view(&mut self, head: &Banner, now: Instant) -> Result<(), DropReason> {
        let owner = match head.owner() {
            Some(owner) if self.host.is_owner_valid(owner) => owner,
            _ => return Err(DropReason::StaleOwner),
        };

        let placement = Placement::for_target(owner, head.owner_view(), head.container());
        if !self.host.attach(head, placement) {
            return Err(DropReason::AttachRefused);
        }
        tracing::debug!(banner = %head.id(), ?placement, "attached");
        self.record(LifecycleEventKind::Attached {
            banner: head.id().raw(),
        });

        match self.host.request_layout(head) {
            LayoutStatus::Ready => self.begin_entry(head, now),
            LayoutStatus::Pending => tracing::trace!(banner = %head.id(), "waiting for layout"),
        }
        Ok(())
    }

    fn discard_head(&mut self, head: &Banner, reason: DropReason) {
        let id = head.id();
        if self.is_head(id) {
            self.queue.pop_front();
        }
        self.messages.remove_for(MessageTarget::Banner(id));
        Self::finish(head);
        tracing::warn!(banner = %id, ?reason, "dropped");
        self.record(LifecycleEventKind::Dropped {
            banner: id.raw(),
            reason,
        });
    }

    fn begin_entry(&mut self, head: &Banner, now: Instant) {
        let id = head.id();
        let animations = self.animations_for(head);
        let enter = AnimationMillis::cap(self.host.play_enter_animation(head, &animations.enter));
        head.set_state(BannerState::Entering);
        self.state = SchedulerState::Entering(id);

        if self.settings.announcements {
            if let (Some(owner), Some(text)) = (head.owner(), head.text_content()) {
                self.host.announce(owner, text);
            }
        }
        head.notify_displayed();
        tracing::debug!(banner = %id, ?enter, "displayed");
        self.record(LifecycleEventKind::Displayed { banner: id.raw() });

        self.post_after(now, enter, MessageTarget::Banner(id), MessageKind::EnterFinished);
        if let Some(delay) =
            compute_auto_hide_delay(&head.configuration(), enter, animations.exit.duration())
        {
            self.post_after(now, delay, MessageTarget::Banner(id), MessageKind::Remove);
        }
    }

    fn handle_remove(&mut self, id: BannerId, now: Instant) {
        let presenting = matches!(
            self.state,
            SchedulerState::Entering(active) | SchedulerState::Visible(active) if active == id
        );
        let Some(head) = self.active_head().filter(|_| presenting) else {
            tracing::trace!(banner = %id, state = ?self.state, "stale remove");
            return;
        };

        // A dead owner gets no exit animation and no further host calls.
        if !self.owner_alive(&head) {
            self.discard_head(&head, DropReason::StaleOwner);
            self.display_next(now);
            return;
        }

        if !self.host.is_attached(&head) {
            if head.take_recheck() {
                let wait = self.full_window(&head);
                tracing::warn!(banner = %id, ?wait, "head lost its parent, rechecking");
                self.record_recheck(id, wait);
                self.post_after(now, wait, MessageTarget::Banner(id), MessageKind::Remove);
                return;
            }

            tracing::warn!(banner = %id, "head still detached, finalizing");
            self.queue.pop_front();
            self.messages.remove_for(MessageTarget::Banner(id));
            Self::finish(&head);
            self.record(LifecycleEventKind::Removed { banner: id.raw() });
            self.display_next(now);
            return;
        }

        self.begin_exit(head, now);
    }

    fn begin_exit(&mut self, head: Banner, now: Instant) {
        let id = head.id();
        self.messages.remove_for(MessageTarget::Banner(id));
        let animations = self.animations_for(&head);

        head.set_state(BannerState::Exiting);
        self.state = SchedulerState::Exiting(id);
        let exit = AnimationMillis::cap(self.host.play_exit_animation(&head, &animations.exit));

        self.queue.pop_front();
        self.host.detach(&head);
        head.notify_removed();
        head.detach_references();
        tracing::debug!(banner = %id, ?exit, "removed");
        self.record(LifecycleEventKind::Removed { banner: id.raw() });

        self.exiting = Some(head);
        self.post_after(now, exit, MessageTarget::Scheduler, MessageKind::Advance);
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn is_head(&self, id: BannerId) -> bool {
        self.queue.front().is_some_and(|b| b.id() == id)
    }

    fn owner_alive(&self, banner: &Banner) -> bool {
        banner
            .owner()
            .is_some_and(|owner| self.host.is_owner_valid(owner))
    }

    /// Whether `id` sits out an out-of-band attachment before the next
    /// attach attempt.
    fn is_rechecking(&self, id: BannerId) -> bool {
        self.messages
            .pending_for(MessageTarget::Banner(id))
            .any(|message| message.kind == MessageKind::AddToView)
    }

    /// Posts `kind` once `delay` elapsed. A deadline past the clock's range
    /// can never come due, so nothing is posted for it.
    fn post_after(
        &mut self,
        now: Instant,
        delay: Duration,
        target: MessageTarget,
        kind: MessageKind,
    ) {
        match now.checked_add(delay) {
            Some(due) => self.messages.post(due, target, kind),
            None => {
                tracing::warn!(?target, ?kind, ?delay, "deadline out of range, not scheduled");
            }
        }
    }

    fn active_head(&self) -> Option<Banner> {
        let active = self.state.active()?;
        self.queue.front().filter(|b| b.id() == active).cloned()
    }

    /// Delivers `on_removed` (when owed) and drops the host references.
    fn finish(banner: &Banner) {
        banner.notify_removed();
        banner.detach_references();
        banner.set_state(BannerState::Detached);
    }

    fn animations_for(&mut self, banner: &Banner) -> ResolvedAnimations {
        let fallback = self.settings.default_animation.as_duration();
        let host = &mut self.host;
        banner
            .resolve_animations(|owner, configuration| ResolvedAnimations {
                enter: resolve_animation(
                    &mut *host,
                    owner,
                    configuration.enter_animation(),
                    Direction::Enter,
                    fallback,
                ),
                exit: resolve_animation(
                    &mut *host,
                    owner,
                    configuration.exit_animation(),
                    Direction::Exit,
                    fallback,
                ),
            })
            .unwrap_or(ResolvedAnimations {
                enter: Animation::slide(Direction::Enter, fallback),
                exit: Animation::slide(Direction::Exit, fallback),
            })
    }

    /// Configured duration plus both animations; animations only for
    /// infinite banners.
    fn full_window(&mut self, banner: &Banner) -> Duration {
        let animations = self.animations_for(banner);
        let enter = animations.enter.duration();
        let exit = animations.exit.duration();
        compute_auto_hide_delay(&banner.configuration(), enter, exit)
            .unwrap_or_else(|| enter.saturating_add(exit))
    }

    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    fn record_recheck(&self, id: BannerId, wait: Duration) {
        self.record(LifecycleEventKind::Rechecked {
            banner: id.raw(),
            wait_ms: wait.as_millis() as u64,
        });
    }

    fn record(&self, kind: LifecycleEventKind) {
        self.diagnostics.record(kind);
    }
}

fn resolve_animation<H: HostBinding>(
    host: &mut H,
    owner: OwnerId,
    selector: AnimationSelector,
    direction: Direction,
    fallback: Duration,
) -> Animation {
    match selector {
        AnimationSelector::Default => Animation::slide(direction, fallback),
        AnimationSelector::Custom(_) if !host.is_owner_valid(owner) => {
            Animation::slide(direction, fallback)
        }
        AnimationSelector::Custom(resource) => host
            .resolve_custom_animation(owner, resource, direction)
            .map(Animation::capped)
            .unwrap_or_else(|| {
                tracing::debug!(resource = resource.id(), ?direction, "custom animation unavailable, using slide");
                Animation::slide(direction, fallback)
            }),
    }
}
