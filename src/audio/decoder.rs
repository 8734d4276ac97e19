//! Audio decoder using symphonia
//!
//! Decodes in-memory audio payloads (MP3, WAV, FLAC, AAC, Vorbis) to
//! interleaved f32 PCM. Sources never touch the filesystem here: by the time
//! this module runs, a payload is always a byte buffer, either fetched over
//! HTTP or unpacked from an inline base64 string.
//!
//! Decode failures inside the packet loop are tolerated (a damaged trailing
//! frame should not discard an otherwise good utterance); failing to decode
//! a single frame of audio at all is an error.

use crate::audio::DecodedAudio;
use crate::error::{Error, Result};
use std::io::Cursor;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::{debug, warn};

/// Decode a complete audio payload to interleaved f32 samples.
///
/// The container format is probed from the content itself; callers have no
/// reliable extension to hint with (TTS responses and storage URLs both
/// arrive as anonymous bytes).
///
/// # Returns
/// [`DecodedAudio`] in the source's native sample rate and channel layout.
///
/// # Errors
/// - Unrecognized or unsupported container/codec
/// - Stream metadata missing sample rate or channel count
/// - No audio frames decodable at all
pub fn decode_bytes(data: Vec<u8>) -> Result<DecodedAudio> {
    let payload_len = data.len();
    let mss = MediaSourceStream::new(Box::new(Cursor::new(data)), Default::default());

    let probed = symphonia::default::get_probe()
        .format(
            &Hint::new(),
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| Error::Decode(format!("Failed to probe format: {}", e)))?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| Error::Decode("No audio track found".to_string()))?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();

    let sample_rate = codec_params
        .sample_rate
        .ok_or_else(|| Error::Decode("Sample rate not found".to_string()))?;

    let channels = codec_params
        .channels
        .map(|c| c.count() as u16)
        .ok_or_else(|| Error::Decode("Channel count not found".to_string()))?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| Error::Decode(format!("Failed to create decoder: {}", e)))?;

    let mut samples: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                // End of stream
                break;
            }
            Err(e) => {
                warn!("Error reading packet: {}", e);
                break;
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                if sample_buf.is_none() {
                    let spec = *decoded.spec();
                    sample_buf = Some(SampleBuffer::new(decoded.capacity() as u64, spec));
                }
                if let Some(buf) = sample_buf.as_mut() {
                    buf.copy_interleaved_ref(decoded);
                    samples.extend_from_slice(buf.samples());
                }
            }
            Err(SymphoniaError::DecodeError(e)) => {
                // Damaged frame; keep what we have and move on
                warn!("Skipping undecodable packet: {}", e);
                continue;
            }
            Err(e) => {
                warn!("Decoder error, stopping: {}", e);
                break;
            }
        }
    }

    if samples.is_empty() {
        return Err(Error::Decode("No audio frames decoded".to_string()));
    }

    debug!(
        "Decoded {} bytes to {} frames ({}Hz, {} channels)",
        payload_len,
        samples.len() / channels as usize,
        sample_rate,
        channels
    );

    Ok(DecodedAudio {
        samples,
        sample_rate,
        channels,
    })
}
