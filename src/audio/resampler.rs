//! Sample-rate and channel-layout conversion using rubato
//!
//! Every source is converted to the working 44.1kHz rate before composition
//! so the timeline can count frames in a single clock. Rubato wants planar
//! input, so conversion goes interleaved -> planar -> resample -> interleaved.

use crate::audio::RENDER_SAMPLE_RATE;
use crate::error::{Error, Result};
use rubato::{FastFixedIn, PolynomialDegree, Resampler};
use tracing::debug;

/// Resample interleaved audio to the render rate.
///
/// Input that is already at 44.1kHz is returned untouched. The whole buffer
/// is processed in a single chunk; sources here are bounded (a music bed or
/// one utterance), not streams.
pub fn resample(input: &[f32], input_rate: u32, channels: u16) -> Result<Vec<f32>> {
    if input_rate == RENDER_SAMPLE_RATE {
        return Ok(input.to_vec());
    }

    debug!(
        "Resampling from {}Hz to {}Hz ({} channels)",
        input_rate, RENDER_SAMPLE_RATE, channels
    );

    let planar_input = deinterleave(input, channels);
    let input_frames = planar_input[0].len();

    let mut resampler = FastFixedIn::<f32>::new(
        RENDER_SAMPLE_RATE as f64 / input_rate as f64,
        1.0,
        PolynomialDegree::Septic,
        input_frames,
        channels as usize,
    )
    .map_err(|e| Error::Decode(format!("Failed to create resampler: {}", e)))?;

    let planar_output = resampler
        .process(&planar_input, None)
        .map_err(|e| Error::Decode(format!("Resampling failed: {}", e)))?;

    Ok(interleave(&planar_output))
}

/// Fix the channel layout to interleaved stereo.
///
/// Mono is duplicated to both channels; layouts wider than stereo keep their
/// first two channels. Stereo input passes through unchanged.
pub fn to_stereo(samples: Vec<f32>, channels: u16) -> Vec<f32> {
    match channels {
        2 => samples,
        1 => {
            let mut stereo = Vec::with_capacity(samples.len() * 2);
            for sample in samples {
                stereo.push(sample);
                stereo.push(sample);
            }
            stereo
        }
        n => {
            let n = n as usize;
            let mut stereo = Vec::with_capacity((samples.len() / n) * 2);
            for frame in samples.chunks_exact(n) {
                stereo.push(frame[0]);
                stereo.push(frame[1]);
            }
            stereo
        }
    }
}

/// Interleaved [L, R, L, R, ...] -> planar [[L, L, ...], [R, R, ...]]
fn deinterleave(samples: &[f32], channels: u16) -> Vec<Vec<f32>> {
    let channels = channels.max(1) as usize;
    let frames = samples.len() / channels;

    let mut planar = vec![Vec::with_capacity(frames); channels];
    for frame in samples.chunks_exact(channels) {
        for (channel, &sample) in planar.iter_mut().zip(frame) {
            channel.push(sample);
        }
    }
    planar
}

/// Planar -> interleaved
fn interleave(planar: &[Vec<f32>]) -> Vec<f32> {
    let channels = planar.len();
    if channels == 0 {
        return Vec::new();
    }
    let frames = planar[0].len();

    let mut interleaved = Vec::with_capacity(frames * channels);
    for frame_idx in 0..frames {
        for channel in planar {
            interleaved.push(channel[frame_idx]);
        }
    }
    interleaved
}
