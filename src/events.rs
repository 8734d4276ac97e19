//! Job progress events
//!
//! Each mix job publishes its state on a `tokio::sync::watch` channel so a
//! UI can surface stage and percent without polling logs. The record is the
//! job's only externally visible mutable state; it is owned by exactly one
//! in-flight job and receivers see a consistent snapshot per update.
//!
//! Percent is a coarse estimate, not a measured stream: it advances through
//! fixed checkpoints around fetch, render, and encode, and is enforced to be
//! monotonically non-decreasing. On failure it freezes wherever it stopped.

use serde::Serialize;
use tokio::sync::watch;
use uuid::Uuid;

/// Pipeline stage of a mix job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MixStage {
    /// Job created, nothing acquired yet
    Idle,

    /// Fetching and decoding the background music bed
    FetchingMusic,

    /// Fetching and decoding speech segments, in list order
    FetchingSegments,

    /// Offline render of the composed timeline
    Rendering,

    /// Serializing the rendered buffer into the WAV container
    Encoding,

    /// Finished, blob available
    Complete,

    /// Finished with a fatal error
    Failed,
}

/// Snapshot of one mix job's progress
#[derive(Debug, Clone, Serialize)]
pub struct MixProgress {
    /// Job identifier (also appears in log lines)
    pub job_id: Uuid,

    /// Current pipeline stage
    pub stage: MixStage,

    /// Estimated completion, 0-100, monotonically non-decreasing
    pub percent: u8,

    /// True while the job is running
    pub is_processing: bool,

    /// Last fatal failure, if any. Dropped segments are logged, not recorded
    /// here.
    pub error: Option<String>,
}

impl MixProgress {
    fn idle(job_id: Uuid) -> Self {
        Self {
            job_id,
            stage: MixStage::Idle,
            percent: 0,
            is_processing: false,
            error: None,
        }
    }
}

/// Publishes progress snapshots for a single job.
///
/// Wraps the watch sender and enforces the percent monotonicity invariant:
/// an update with a lower percent keeps the previous value.
pub(crate) struct ProgressTracker {
    tx: watch::Sender<MixProgress>,
}

impl ProgressTracker {
    pub(crate) fn new(job_id: Uuid) -> (Self, watch::Receiver<MixProgress>) {
        let (tx, rx) = watch::channel(MixProgress::idle(job_id));
        (Self { tx }, rx)
    }

    /// Advance to `stage` at `percent` (clamped to 100, never decreasing).
    pub(crate) fn update(&self, stage: MixStage, percent: u8) {
        self.tx.send_modify(|state| {
            state.stage = stage;
            state.percent = state.percent.max(percent.min(100));
            state.is_processing = true;
        });
    }

    /// Mark the job complete at 100%.
    pub(crate) fn complete(&self) {
        self.tx.send_modify(|state| {
            state.stage = MixStage::Complete;
            state.percent = 100;
            state.is_processing = false;
        });
    }

    /// Record a fatal failure. Percent stays frozen where it stopped.
    pub(crate) fn fail(&self, message: &str) {
        self.tx.send_modify(|state| {
            state.stage = MixStage::Failed;
            state.is_processing = false;
            state.error = Some(message.to_string());
        });
    }
}
