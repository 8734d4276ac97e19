//! Audio fixture generation for pipeline tests
//!
//! Builds small deterministic WAV payloads in memory (the pipeline consumes
//! sources as byte buffers, not files) using hound as an independent
//! encoder, so fixtures never depend on the crate's own WAV writer.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::io::Cursor;

/// Standard test sample rate (44.1 kHz)
pub const TEST_SAMPLE_RATE: u32 = 44100;

fn stereo_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Stereo sine-wave WAV bytes: `duration_ms` at `frequency_hz`, both
/// channels identical.
pub fn sine_wav_bytes(
    duration_ms: u64,
    frequency_hz: f32,
    amplitude: f32,
    sample_rate: u32,
) -> Vec<u8> {
    let mut bytes = Vec::new();
    {
        let mut writer = WavWriter::new(Cursor::new(&mut bytes), stereo_spec(sample_rate))
            .expect("create WAV writer");

        let total_frames = (sample_rate as u64 * duration_ms) / 1000;
        let amplitude_i16 = (amplitude * i16::MAX as f32) as i16;

        for frame_idx in 0..total_frames {
            let t = frame_idx as f32 / sample_rate as f32;
            let value = (2.0 * std::f32::consts::PI * frequency_hz * t).sin();
            let sample = (value * amplitude_i16 as f32) as i16;
            writer.write_sample(sample).expect("write sample");
            writer.write_sample(sample).expect("write sample");
        }

        writer.finalize().expect("finalize WAV");
    }
    bytes
}

/// Stereo silent WAV bytes.
#[allow(dead_code)]
pub fn silent_wav_bytes(duration_ms: u64, sample_rate: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    {
        let mut writer = WavWriter::new(Cursor::new(&mut bytes), stereo_spec(sample_rate))
            .expect("create WAV writer");

        let total_frames = (sample_rate as u64 * duration_ms) / 1000;
        for _ in 0..total_frames * 2 {
            writer.write_sample(0i16).expect("write sample");
        }

        writer.finalize().expect("finalize WAV");
    }
    bytes
}

/// Base64-encode fixture bytes for use as an inline source.
pub fn to_base64(bytes: &[u8]) -> String {
    BASE64_STANDARD.encode(bytes)
}

/// RMS of a window of interleaved stereo samples (both channels pooled).
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples.iter().map(|s| s * s).sum();
    (sum / samples.len() as f32).sqrt()
}
