// SPDX-License-Identifier: MPL-2.0
//! Lifecycle event types recorded by the scheduler.
//!
//! Anomalies the scheduler absorbs silently (stale owners, double shows,
//! timer races) never surface as errors; they show up here instead.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Why a banner was discarded without being presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// The owner was gone when the banner reached the head of the queue.
    StaleOwner,
    /// The host refused to insert the view.
    AttachRefused,
}

/// Why a request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The banner was enqueued before or already shown.
    AlreadyShown,
    /// A layout notification arrived for a banner not awaiting one.
    UnexpectedLayout,
    /// A hide or cancel targeted a banner no longer queued.
    NotQueued,
}

/// What happened to a banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LifecycleEventKind {
    /// Banner appended to the queue.
    Enqueued {
        banner: u64,
        /// Queue length after the append.
        queue_len: usize,
    },
    /// View inserted into the host tree.
    Attached { banner: u64 },
    /// Enter animation started.
    Displayed { banner: u64 },
    /// Banner left the view tree through the hide path.
    Removed { banner: u64 },
    /// Banner discarded without presentation.
    Dropped { banner: u64, reason: DropReason },
    /// Banner withdrawn through the immediate cancellation path.
    Cancelled { banner: u64 },
    /// Every banner and timer discarded at once.
    QueueCleared { discarded: usize },
    /// View tree and queue disagreed; the wait was re-derived.
    Rechecked { banner: u64, wait_ms: u64 },
    /// Request ignored without side effects.
    Ignored { banner: u64, reason: IgnoreReason },
}

impl LifecycleEventKind {
    /// Short stable name of the event kind.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Enqueued { .. } => "enqueued",
            Self::Attached { .. } => "attached",
            Self::Displayed { .. } => "displayed",
            Self::Removed { .. } => "removed",
            Self::Dropped { .. } => "dropped",
            Self::Cancelled { .. } => "cancelled",
            Self::QueueCleared { .. } => "queue_cleared",
            Self::Rechecked { .. } => "rechecked",
            Self::Ignored { .. } => "ignored",
        }
    }
}

/// A lifecycle event with timestamps.
#[derive(Debug, Clone)]
pub struct LifecycleEvent {
    /// Monotonic time of the event, for ordering and relative offsets.
    pub timestamp: Instant,
    /// Wall-clock time of the event, for reports.
    pub recorded_at: DateTime<Utc>,
    pub kind: LifecycleEventKind,
}

impl LifecycleEvent {
    /// Creates a new event stamped with the current time.
    #[must_use]
    pub fn new(kind: LifecycleEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            recorded_at: Utc::now(),
            kind,
        }
    }
}
