//! Audio decoding and normalization
//!
//! Everything that turns source bytes into render-ready PCM. All audio is
//! normalized to a single working format before composition: 44.1kHz,
//! stereo, interleaved f32.

pub mod decoder;
pub mod resampler;
pub mod types;

pub use types::{DecodedAudio, PcmBuffer};

/// Working sample rate for composition and rendering (44.1kHz)
pub const RENDER_SAMPLE_RATE: u32 = 44100;

/// Normalize freshly decoded audio to the render format.
///
/// Resamples to [`RENDER_SAMPLE_RATE`] when needed, then fixes the channel
/// layout to interleaved stereo (mono is duplicated, anything wider than
/// stereo keeps its first two channels).
pub fn normalize(decoded: DecodedAudio) -> crate::error::Result<PcmBuffer> {
    let DecodedAudio {
        samples,
        sample_rate,
        channels,
    } = decoded;

    let resampled = resampler::resample(&samples, sample_rate, channels)?;
    let stereo = resampler::to_stereo(resampled, channels);

    PcmBuffer::new(stereo, RENDER_SAMPLE_RATE)
}
