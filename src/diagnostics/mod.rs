// SPDX-License-Identifier: MPL-2.0
//! Lifecycle event log for the snackbar scheduler.
//!
//! The scheduler swallows anomalies (stale owners, double shows, timer
//! races) instead of returning errors. This module keeps a memory-bounded
//! record of them, together with the regular lifecycle transitions, so
//! that a host can inspect or export what happened.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`LifecycleEvent`]: One recorded transition or anomaly
//! - [`DiagnosticsCollector`]: Owns the buffer, hands out [`DiagnosticsHandle`]s

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DropReason, IgnoreReason, LifecycleEvent, LifecycleEventKind};
pub use report::{LifecycleReport, ReportedEvent};
