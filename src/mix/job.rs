//! Mix job orchestration
//!
//! One [`MixJob`] per mix invocation. The job owns everything mutable about
//! the run — its HTTP client, decoded buffers, render target, and progress
//! channel — so concurrent jobs are fully independent: simultaneous mixes
//! cannot corrupt each other's output. There is no cancellation; a started
//! job runs to completion or failure.
//!
//! Acquisition is awaited sequentially in list order, which makes both the
//! scheduling order and the progress checkpoints deterministic.
//!
//! Failure policy:
//! - music unavailable -> fatal ([`Error::MusicUnavailable`])
//! - a speech segment unavailable -> logged and dropped, job continues
//! - zero segments survive -> fatal ([`Error::NoSegments`]), render never runs
//! - render task failure -> fatal ([`Error::Render`]), no partial output

use crate::config::MixerConfig;
use crate::error::{Error, Result};
use crate::events::{MixProgress, MixStage, ProgressTracker};
use crate::mix::fetch::SourceFetcher;
use crate::mix::renderer;
use crate::mix::source::MixRequest;
use crate::mix::timeline::MixTimeline;
use crate::mix::wav::WavBlob;
use tokio::sync::watch;
use tracing::{info, warn};
use uuid::Uuid;

// Progress checkpoints. Coarse estimates for UI feedback: the render call is
// atomic from the job's perspective, so there is nothing finer to measure.
const PCT_FETCH_MUSIC: u8 = 5;
const PCT_MUSIC_READY: u8 = 15;
const PCT_SEGMENTS_DONE: u8 = 55;
const PCT_RENDER_START: u8 = 60;
const PCT_RENDER_DONE: u8 = 85;
const PCT_ENCODE_START: u8 = 90;

/// A single mixing operation.
pub struct MixJob {
    job_id: Uuid,
    fetcher: SourceFetcher,
    progress: ProgressTracker,
}

impl MixJob {
    /// Create a job and the watch receiver observing its progress.
    pub fn new(config: &MixerConfig) -> Result<(Self, watch::Receiver<MixProgress>)> {
        config.validate()?;

        let job_id = Uuid::new_v4();
        let (progress, rx) = ProgressTracker::new(job_id);
        let fetcher = SourceFetcher::new(config)?;

        Ok((
            Self {
                job_id,
                fetcher,
                progress,
            },
            rx,
        ))
    }

    /// Job identifier, as it appears in log lines and progress events.
    pub fn job_id(&self) -> Uuid {
        self.job_id
    }

    /// Run the job to completion.
    ///
    /// Consumes the job: each [`MixJob`] performs exactly one mix. The
    /// progress receiver keeps the final state after the job finishes.
    pub async fn run(self, request: &MixRequest) -> Result<WavBlob> {
        match self.execute(request).await {
            Ok(blob) => {
                self.progress.complete();
                info!(job_id = %self.job_id, bytes = blob.len(), "Mix complete");
                Ok(blob)
            }
            Err(e) => {
                self.progress.fail(&e.to_string());
                warn!(job_id = %self.job_id, error = %e, "Mix failed");
                Err(e)
            }
        }
    }

    async fn execute(&self, request: &MixRequest) -> Result<WavBlob> {
        request.validate()?;

        info!(
            job_id = %self.job_id,
            segments = request.segments.len(),
            music_gain = request.music_gain,
            gap_seconds = request.gap_seconds,
            "Starting mix"
        );

        // Music bed first: it sizes the timeline, so its loss is fatal
        self.progress.update(MixStage::FetchingMusic, PCT_FETCH_MUSIC);
        let music = self
            .fetcher
            .acquire(&request.music)
            .await
            .map_err(|e| Error::MusicUnavailable(e.to_string()))?;
        self.progress.update(MixStage::FetchingSegments, PCT_MUSIC_READY);

        // Speech segments, sequentially, in list order. A failed segment
        // shortens the narration; it does not sink the job.
        let mut speech = Vec::with_capacity(request.segments.len());
        let total = request.segments.len().max(1);
        for (index, segment) in request.segments.iter().enumerate() {
            match segment.source() {
                Some(source) => match self.fetcher.acquire(&source).await {
                    Ok(buffer) => speech.push(buffer),
                    Err(e) => {
                        warn!(
                            job_id = %self.job_id,
                            segment = index,
                            error = %e,
                            "Segment unavailable, dropping"
                        );
                    }
                },
                None => {
                    warn!(
                        job_id = %self.job_id,
                        segment = index,
                        "Segment has neither URL nor inline data, skipping"
                    );
                }
            }

            let span = (PCT_SEGMENTS_DONE - PCT_MUSIC_READY) as usize;
            let percent = PCT_MUSIC_READY + ((index + 1) * span / total) as u8;
            self.progress.update(MixStage::FetchingSegments, percent);
        }

        let timeline = MixTimeline::plan(music, speech, request.gap_seconds, request.music_gain)?;

        self.progress.update(MixStage::Rendering, PCT_RENDER_START);
        let mix = tokio::task::spawn_blocking(move || renderer::render(&timeline))
            .await
            .map_err(|e| Error::Render(format!("Offline render failed: {}", e)))?;
        self.progress.update(MixStage::Rendering, PCT_RENDER_DONE);

        self.progress.update(MixStage::Encoding, PCT_ENCODE_START);
        let blob = mix.encode_wav();

        info!(
            job_id = %self.job_id,
            duration_seconds = mix.duration_seconds(),
            "Rendered and encoded"
        );

        Ok(blob)
    }
}

/// One-shot convenience wrapper: build a job, run it, discard progress.
pub async fn render_mix(config: &MixerConfig, request: &MixRequest) -> Result<WavBlob> {
    let (job, _progress) = MixJob::new(config)?;
    job.run(request).await
}
