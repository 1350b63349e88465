// SPDX-License-Identifier: MPL-2.0
//! Collector for snackbar lifecycle events.
//!
//! The scheduler records through a [`DiagnosticsHandle`]; the owner of the
//! [`DiagnosticsCollector`] drains the channel into a bounded buffer and
//! exports it on demand.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::report::{summarize, LifecycleReport, ReportedEvent};
use super::{BufferCapacity, CircularBuffer, LifecycleEvent, LifecycleEventKind};
use crate::error::Result;

/// Handle for recording lifecycle events.
///
/// Cheap to clone and usable from any thread. Recording never blocks: when
/// the channel is full the event is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<LifecycleEvent>,
}

impl DiagnosticsHandle {
    pub fn record(&self, kind: LifecycleEventKind) {
        let _ = self.event_tx.try_send(LifecycleEvent::new(kind));
    }

    /// A handle connected to nothing. Every record is discarded.
    #[must_use]
    pub fn disabled() -> Self {
        let (event_tx, _) = bounded(0);
        Self { event_tx }
    }
}

/// Central store of lifecycle events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<LifecycleEvent>,
    event_rx: Receiver<LifecycleEvent>,
    event_tx: Sender<LifecycleEvent>,
    collection_started_at: Instant,
    collection_started_at_utc: DateTime<Utc>,
}

const DEFAULT_CHANNEL_CAPACITY: usize = 256;

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LifecycleEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Number of buffered events per kind label.
    #[must_use]
    pub fn summary(&self) -> BTreeMap<&'static str, usize> {
        summarize(self.buffer.iter())
    }

    /// Builds a report from the buffered events.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn report(&self) -> LifecycleReport {
        let events: Vec<ReportedEvent> = self
            .buffer
            .iter()
            .map(|event| ReportedEvent::new(event, self.collection_started_at))
            .collect();

        LifecycleReport {
            crate_version: env!("CARGO_PKG_VERSION"),
            collection_started_at: self.collection_started_at_utc,
            collection_duration_ms: self.collection_started_at.elapsed().as_millis() as u64,
            event_count: events.len(),
            summary: self.summary(),
            events,
        }
    }

    /// Exports the buffered events as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.report())
    }

    /// Writes the JSON report to `path`, atomically.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Io`] if writing fails.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let json = self
            .export_json()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        write_atomic(path, &json)?;
        Ok(path.to_path_buf())
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DropReason;

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.record(LifecycleEventKind::Attached { banner: 1 });
        handle.record(LifecycleEventKind::Displayed { banner: 1 });
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn cloned_handles_share_the_collector() {
        let mut collector = DiagnosticsCollector::default();
        let first = collector.handle();
        let second = first.clone();

        first.record(LifecycleEventKind::Cancelled { banner: 1 });
        second.record(LifecycleEventKind::Cancelled { banner: 2 });
        collector.process_pending();

        assert_eq!(collector.summary().get("cancelled"), Some(&2));
    }

    #[test]
    fn disabled_handle_discards_silently() {
        let handle = DiagnosticsHandle::disabled();
        handle.record(LifecycleEventKind::QueueCleared { discarded: 3 });
    }

    #[test]
    fn buffer_is_bounded() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(16));
        let handle = collector.handle();
        for banner in 0..40 {
            handle.record(LifecycleEventKind::Attached { banner });
            collector.process_pending();
        }
        assert_eq!(collector.len(), 16);
        assert_eq!(collector.capacity(), 16);
    }

    #[test]
    fn export_json_contains_summary_and_events() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        handle.record(LifecycleEventKind::Dropped {
            banner: 9,
            reason: DropReason::AttachRefused,
        });
        collector.process_pending();

        let json = collector.export_json().expect("export should succeed");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

        assert_eq!(value["event_count"], 1);
        assert_eq!(value["summary"]["dropped"], 1);
        assert_eq!(value["events"][0]["event"], "dropped");
        assert_eq!(value["events"][0]["reason"], "attach_refused");
    }

    #[test]
    fn export_to_file_writes_report() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("snackbars.json");
        let mut collector = DiagnosticsCollector::default();
        collector.handle().record(LifecycleEventKind::Removed { banner: 2 });
        collector.process_pending();

        let written = collector.export_to_file(&path).expect("export");
        assert_eq!(written, path);
        let content = fs::read_to_string(&path).expect("readable");
        assert!(content.contains("\"removed\""));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn clear_empties_buffer() {
        let mut collector = DiagnosticsCollector::default();
        collector.handle().record(LifecycleEventKind::Attached { banner: 1 });
        collector.process_pending();
        collector.clear();
        assert!(collector.is_empty());
    }
}
