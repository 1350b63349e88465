// SPDX-License-Identifier: MPL-2.0
//! Serializable lifecycle report.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::events::{LifecycleEvent, LifecycleEventKind};

/// Event with its time expressed relative to the start of collection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportedEvent {
    /// Milliseconds since collection started.
    pub offset_ms: u64,
    pub recorded_at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: LifecycleEventKind,
}

impl ReportedEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(event: &LifecycleEvent, collection_start: Instant) -> Self {
        Self {
            offset_ms: event
                .timestamp
                .saturating_duration_since(collection_start)
                .as_millis() as u64,
            recorded_at: event.recorded_at,
            kind: event.kind.clone(),
        }
    }
}

/// Full export of the event log.
#[derive(Debug, Clone, Serialize)]
pub struct LifecycleReport {
    pub crate_version: &'static str,
    pub collection_started_at: DateTime<Utc>,
    pub collection_duration_ms: u64,
    pub event_count: usize,
    /// Number of events per [`LifecycleEventKind::label`].
    pub summary: BTreeMap<&'static str, usize>,
    pub events: Vec<ReportedEvent>,
}

/// Counts events per kind label.
#[must_use]
pub fn summarize<'a>(
    events: impl Iterator<Item = &'a LifecycleEvent>,
) -> BTreeMap<&'static str, usize> {
    let mut summary = BTreeMap::new();
    for event in events {
        *summary.entry(event.kind.label()).or_insert(0) += 1;
    }
    summary
}
