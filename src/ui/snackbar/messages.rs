// SPDX-License-Identifier: MPL-2.0
//! Delayed messages driving the scheduler.
//!
//! Every timer the scheduler arms is an entry here: a due instant, a post
//! sequence number for stable ordering, the target it belongs to and what to
//! do. Cancelling a banner removes exactly the entries targeted at it.

use super::banner::BannerId;
use std::time::Instant;

/// Who a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageTarget {
    Banner(BannerId),
    /// The scheduler itself. Never removed by banner cancellation.
    Scheduler,
}

/// What a message does when it comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Attach the head banner.
    AddToView,
    /// Enter animation done.
    EnterFinished,
    /// Auto-hide timer fired.
    Remove,
    /// Exit finished; present the next banner.
    Advance,
}

/// A pending message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub due: Instant,
    pub seq: u64,
    pub target: MessageTarget,
    pub kind: MessageKind,
}

/// Pending messages ordered by due time, then post order.
#[derive(Debug, Default)]
pub struct MessageQueue {
    // Kept sorted by (due, seq); the queue rarely holds more than a handful.
    pending: Vec<Message>,
    next_seq: u64,
}

impl MessageQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `kind` for `target` at `due`.
    pub fn post(&mut self, due: Instant, target: MessageTarget, kind: MessageKind) {
        let message = Message {
            due,
            seq: self.next_seq,
            target,
            kind,
        };
        self.next_seq += 1;

        let index = self
            .pending
            .partition_point(|m| (m.due, m.seq) <= (message.due, message.seq));
        self.pending.insert(index, message);
    }

    /// Removes every message targeted at `target`. Returns how many.
    pub fn remove_for(&mut self, target: MessageTarget) -> usize {
        let before = self.pending.len();
        self.pending.retain(|m| m.target != target);
        before - self.pending.len()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Due time of the earliest message.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.first().map(|m| m.due)
    }

    /// Takes the earliest message if it is due at `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<Message> {
        match self.pending.first() {
            Some(first) if first.due <= now => Some(self.pending.remove(0)),
            _ => None,
        }
    }

    /// Pending messages targeted at `target`, earliest first.
    pub fn pending_for(&self, target: MessageTarget) -> impl Iterator<Item = &Message> {
        self.pending.iter().filter(move |m| m.target == target)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::snackbar::OwnerId;
    use crate::domain::snackbar::Style;
    use crate::ui::snackbar::Banner;
    use std::time::Duration;

    fn banner_id() -> BannerId {
        Banner::text(OwnerId::new(1), "x", Style::default()).id()
    }

    #[test]
    fn messages_pop_in_due_order() {
        let start = Instant::now();
        let id = banner_id();
        let mut queue = MessageQueue::new();
        queue.post(start + Duration::from_millis(300), MessageTarget::Banner(id), MessageKind::Remove);
        queue.post(start + Duration::from_millis(100), MessageTarget::Banner(id), MessageKind::EnterFinished);

        assert_eq!(queue.next_deadline(), Some(start + Duration::from_millis(100)));
        assert_eq!(queue.pop_due(start + Duration::from_millis(50)), None);

        let later = start + Duration::from_secs(1);
        assert_eq!(queue.pop_due(later).map(|m| m.kind), Some(MessageKind::EnterFinished));
        assert_eq!(queue.pop_due(later).map(|m| m.kind), Some(MessageKind::Remove));
        assert!(queue.is_empty());
    }

    #[test]
    fn equal_due_times_keep_post_order() {
        let due = Instant::now();
        let mut queue = MessageQueue::new();
        queue.post(due, MessageTarget::Scheduler, MessageKind::Advance);
        queue.post(due, MessageTarget::Scheduler, MessageKind::AddToView);

        assert_eq!(queue.pop_due(due).map(|m| m.kind), Some(MessageKind::Advance));
        assert_eq!(queue.pop_due(due).map(|m| m.kind), Some(MessageKind::AddToView));
    }

    #[test]
    fn remove_for_banner_spares_scheduler_messages() {
        let now = Instant::now();
        let id = banner_id();
        let other = banner_id();
        let mut queue = MessageQueue::new();
        queue.post(now, MessageTarget::Banner(id), MessageKind::EnterFinished);
        queue.post(now, MessageTarget::Banner(id), MessageKind::Remove);
        queue.post(now, MessageTarget::Banner(other), MessageKind::Remove);
        queue.post(now, MessageTarget::Scheduler, MessageKind::Advance);

        assert_eq!(queue.remove_for(MessageTarget::Banner(id)), 2);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pending_for(MessageTarget::Banner(id)).count(), 0);
        assert_eq!(queue.pending_for(MessageTarget::Scheduler).count(), 1);
    }

    #[test]
    fn clear_drops_everything() {
        let mut queue = MessageQueue::new();
        queue.post(Instant::now(), MessageTarget::Scheduler, MessageKind::Advance);
        queue.clear();
        assert_eq!(queue.next_deadline(), None);
    }
}
