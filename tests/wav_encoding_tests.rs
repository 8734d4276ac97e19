//! WAV encoder round-trip tests
//!
//! Verifies the hand-rolled RIFF/WAVE serializer against hound, an
//! independent WAV implementation: a known synthetic buffer must survive
//! encode -> decode within 16-bit quantization error, with correct header
//! metadata, and encoding must be deterministic.

use canticle::mix::wav::{encode_wav, WAV_MIME};
use std::io::Cursor;

const SAMPLE_RATE: u32 = 44100;

/// 1 second of 440 Hz stereo sine at the given amplitude.
fn sine_stereo(amplitude: f32) -> Vec<f32> {
    let mut samples = Vec::with_capacity(SAMPLE_RATE as usize * 2);
    for frame in 0..SAMPLE_RATE as usize {
        let t = frame as f32 / SAMPLE_RATE as f32;
        let value = (2.0 * std::f32::consts::PI * 440.0 * t).sin() * amplitude;
        samples.push(value);
        samples.push(value);
    }
    samples
}

#[test]
fn test_round_trip_within_quantization_error() {
    let original = sine_stereo(0.8);
    let blob = encode_wav(&original, SAMPLE_RATE, 2);

    let mut reader = hound::WavReader::new(Cursor::new(blob.data())).expect("readable WAV");
    let spec = reader.spec();
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, SAMPLE_RATE);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);

    let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(decoded.len(), original.len());

    // Asymmetric normalization mirrors the encoder's scaling convention
    let max_error = original
        .iter()
        .zip(&decoded)
        .map(|(&f, &q)| {
            let restored = if q < 0 {
                q as f32 / 32768.0
            } else {
                q as f32 / 32767.0
            };
            (f - restored).abs()
        })
        .fold(0.0f32, f32::max);

    assert!(
        max_error <= 1.001 / 32767.0,
        "round-trip error {} exceeds one quantization step",
        max_error
    );
}

#[test]
fn test_reported_duration() {
    let original = sine_stereo(0.5);
    let blob = encode_wav(&original, SAMPLE_RATE, 2);

    let reader = hound::WavReader::new(Cursor::new(blob.data())).unwrap();
    assert_eq!(reader.duration(), SAMPLE_RATE); // frames per channel: 1 second
}

#[test]
fn test_encoding_idempotence() {
    let original = sine_stereo(0.33);
    let first = encode_wav(&original, SAMPLE_RATE, 2);
    let second = encode_wav(&original, SAMPLE_RATE, 2);

    assert_eq!(first.data(), second.data());
}

#[test]
fn test_full_scale_extremes_survive() {
    let samples = vec![1.0f32, -1.0, 0.0, 0.0];
    let blob = encode_wav(&samples, SAMPLE_RATE, 2);

    let mut reader = hound::WavReader::new(Cursor::new(blob.data())).unwrap();
    let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();

    assert_eq!(decoded, vec![32767, -32768, 0, 0]);
}

#[test]
fn test_blob_is_a_readable_file() {
    // The blob is what a caller downloads; it must read back from disk too
    let original = sine_stereo(0.5);
    let blob = encode_wav(&original, SAMPLE_RATE, 2);
    assert_eq!(blob.mime(), WAV_MIME);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mix.wav");
    std::fs::write(&path, blob.data()).unwrap();

    let reader = hound::WavReader::open(&path).expect("file readable by a standard consumer");
    assert_eq!(reader.spec().sample_rate, SAMPLE_RATE);
    assert_eq!(reader.duration(), SAMPLE_RATE);
}
