//! Core audio data types
//!
//! Buffers move through the pipeline in two shapes: [`DecodedAudio`] is
//! whatever the decoder produced (any rate, any channel count), and
//! [`PcmBuffer`] is the normalized working format every later stage assumes.

use crate::error::{Error, Result};

/// Raw decoder output: interleaved f32 samples in the source's native
/// format, before resampling or channel normalization.
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Interleaved samples, `channels` values per frame
    pub samples: Vec<f32>,

    /// Native sample rate of the source
    pub sample_rate: u32,

    /// Channel count of the source (1=mono, 2=stereo, ...)
    pub channels: u16,
}

impl DecodedAudio {
    /// Number of frames (samples per channel).
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / self.channels as usize
        }
    }
}

/// Decoded and normalized audio, ready for timeline composition.
///
/// **Format:**
/// - Samples are f32 (nominal -1.0 to 1.0)
/// - Stereo interleaved: [L, R, L, R, ...]
/// - Sample rate always 44100 Hz after normalization
#[derive(Debug, Clone)]
pub struct PcmBuffer {
    /// PCM audio samples (interleaved stereo)
    samples: Vec<f32>,

    /// Sample rate (always 44100 after normalization)
    sample_rate: u32,
}

impl PcmBuffer {
    /// Create a buffer from interleaved stereo samples.
    ///
    /// Rejects odd-length sample vectors (stereo frames come in pairs) and
    /// empty buffers, which would otherwise produce zero-length schedule
    /// entries downstream.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self> {
        if samples.len() % 2 != 0 {
            return Err(Error::Decode(format!(
                "Stereo buffer has odd sample count: {}",
                samples.len()
            )));
        }
        if samples.is_empty() {
            return Err(Error::Decode("Decoded buffer contains no frames".to_string()));
        }
        Ok(Self { samples, sample_rate })
    }

    /// Interleaved stereo samples.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Number of stereo frames.
    pub fn frames(&self) -> usize {
        self.samples.len() / 2
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }
}
