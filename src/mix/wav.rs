//! WAV container encoding
//!
//! Serializes an interleaved float buffer into a canonical 44-byte-header
//! RIFF/WAVE byte stream: PCM format code 1, 16 bits per sample, all
//! multi-byte fields little-endian.
//!
//! Quantization is the standard asymmetric signed-PCM convention: samples
//! are clamped to [-1, 1], negatives scaled by 0x8000 and non-negatives by
//! 0x7FFF. Symmetric ±32767 scaling would *not* be equivalent — full-scale
//! negative input must map exactly to -32768.
//!
//! Encoding is pure and infallible given a rendered buffer; every failure
//! mode of the pipeline lives upstream of this stage.

/// MIME type of the encoded output
pub const WAV_MIME: &str = "audio/wav";

const HEADER_BYTES: usize = 44;
const BYTES_PER_SAMPLE: usize = 2;

/// An encoded WAV payload, ready to hand to a download/storage consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavBlob {
    data: Vec<u8>,
}

impl WavBlob {
    /// Encoded bytes, header included.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the blob, returning the bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// MIME type tag (`audio/wav`).
    pub fn mime(&self) -> &'static str {
        WAV_MIME
    }

    /// Total size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the blob holds no bytes (never the case for encoder output).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Encode interleaved float samples as 16-bit PCM WAV.
///
/// `samples` is interleaved across `channels`: for N channels and L frames,
/// `[ch0_f0, ch1_f0, ..., chN_f0, ch0_f1, ...]` — the same order the bytes
/// are written in.
pub fn encode_wav(samples: &[f32], sample_rate: u32, channels: u16) -> WavBlob {
    let data_len = samples.len() * BYTES_PER_SAMPLE;
    let block_align = channels as u32 * BYTES_PER_SAMPLE as u32;
    let byte_rate = sample_rate * block_align;

    let mut data = Vec::with_capacity(HEADER_BYTES + data_len);

    // RIFF chunk
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&(36 + data_len as u32).to_le_bytes());
    data.extend_from_slice(b"WAVE");

    // fmt sub-chunk
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes()); // sub-chunk size
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM format code
    data.extend_from_slice(&channels.to_le_bytes());
    data.extend_from_slice(&sample_rate.to_le_bytes());
    data.extend_from_slice(&byte_rate.to_le_bytes());
    data.extend_from_slice(&(block_align as u16).to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes()); // bits per sample

    // data sub-chunk
    data.extend_from_slice(b"data");
    data.extend_from_slice(&(data_len as u32).to_le_bytes());

    for &sample in samples {
        data.extend_from_slice(&quantize(sample).to_le_bytes());
    }

    WavBlob { data }
}

/// Clamp to [-1, 1] and quantize to signed 16-bit.
#[inline]
fn quantize(sample: f32) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0);
    if clamped < 0.0 {
        (clamped * 0x8000 as f32) as i16
    } else {
        (clamped * 0x7FFF as f32) as i16
    }
}
