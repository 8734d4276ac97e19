//! Offline rendering
//!
//! Executes a [`MixTimeline`] into a single interleaved stereo buffer. Pure
//! summation: the music bed is written first at its gain, looping via modulo
//! indexing, then each speech segment is added at full gain at its scheduled
//! offset. No realtime constraints and no clamping here — quantization to
//! the output range happens in the WAV encoder, as in any mixing graph that
//! keeps float headroom until the final stage.

use crate::audio::RENDER_SAMPLE_RATE;
use crate::mix::timeline::MixTimeline;
use crate::mix::wav::{self, WavBlob};
use tracing::debug;

/// The rendered mix: one immutable interleaved stereo buffer.
#[derive(Debug, Clone)]
pub struct RenderedMix {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl RenderedMix {
    /// Interleaved stereo samples.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of stereo frames.
    pub fn frames(&self) -> usize {
        self.samples.len() / 2
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }

    /// Serialize into a WAV blob. Pure and infallible; encoding the same
    /// mix twice yields byte-identical output.
    pub fn encode_wav(&self) -> WavBlob {
        wav::encode_wav(&self.samples, self.sample_rate, 2)
    }
}

/// Render the timeline to a stereo buffer.
pub fn render(timeline: &MixTimeline) -> RenderedMix {
    let total_frames = timeline.total_frames;
    let mut samples = vec![0.0f32; total_frames * 2];

    // Music bed: full span, looped, attenuated
    let music = timeline.music.samples();
    let music_frames = timeline.music.frames();
    let gain = timeline.music_gain;
    if music_frames > 0 && gain != 0.0 {
        for frame in 0..total_frames {
            let src = (frame % music_frames) * 2;
            samples[frame * 2] += music[src] * gain;
            samples[frame * 2 + 1] += music[src + 1] * gain;
        }
    }

    // Speech: sequential, full gain, summed over the bed
    for segment in &timeline.segments {
        let offset = segment.start_frame * 2;
        for (i, &sample) in segment.buffer.samples().iter().enumerate() {
            samples[offset + i] += sample;
        }
    }

    debug!(
        "Rendered {} frames ({:.2}s) from {} segments",
        total_frames,
        total_frames as f64 / RENDER_SAMPLE_RATE as f64,
        timeline.segments.len()
    );

    RenderedMix {
        samples,
        sample_rate: RENDER_SAMPLE_RATE,
    }
}
