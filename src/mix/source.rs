//! Mix request types
//!
//! The job description a caller hands to the mixer: one mandatory music
//! source, an ordered list of speech segments, and two knobs (music gain,
//! inter-segment gap). Field names accept the camelCase spellings produced
//! by browser clients as serde aliases.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default attenuation for the background-music bed.
///
/// Music sits well under the narration; full-scale music would mask speech.
pub const DEFAULT_MUSIC_GAIN: f32 = 0.15;

/// Default silence inserted after each speech segment, in seconds.
pub const DEFAULT_GAP_SECONDS: f64 = 1.0;

/// A retrievable audio payload.
///
/// Exactly one transport: either a URL to fetch or an already-retrieved
/// payload as base64 (the usual shape of a TTS response). Dispatch on this
/// enum is the single place the two are told apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AudioSource {
    /// Fetch the payload from a URL
    Url {
        /// Resource location (HTTP 200 + bytes expected)
        url: String,
    },

    /// Payload is inline, base64-encoded
    Inline {
        /// Base64 audio bytes; a `data:*;base64,` prefix is tolerated
        data: String,
    },
}

impl AudioSource {
    /// Build a source from the loose optional-field pair callers send.
    ///
    /// Inline content wins when both are present; `None` when neither is —
    /// the caller decides whether that is fatal (music) or skippable
    /// (speech segment).
    pub fn from_parts(url: Option<String>, inline_data: Option<String>) -> Option<Self> {
        if let Some(data) = inline_data {
            Some(AudioSource::Inline { data })
        } else {
            url.map(|url| AudioSource::Url { url })
        }
    }

    /// Short description for log lines (never the payload itself).
    pub fn describe(&self) -> String {
        match self {
            AudioSource::Url { url } => format!("url:{}", url),
            AudioSource::Inline { data } => format!("inline:{}B base64", data.len()),
        }
    }
}

/// One unit of narrated speech to place on the timeline.
///
/// Carries the raw optional pair rather than an [`AudioSource`] so that a
/// segment with neither field present stays representable: that is a
/// per-segment configuration error, and the pipeline skips it instead of
/// failing the job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeechSegment {
    /// Remote location of the segment audio
    #[serde(default, alias = "sourceURL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Inline base64 payload, preferred over `url` when both are set
    #[serde(default, alias = "sourceInline", skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<String>,
}

impl SpeechSegment {
    /// Segment sourced from a URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            inline_data: None,
        }
    }

    /// Segment sourced from inline base64 data.
    pub fn from_inline(data: impl Into<String>) -> Self {
        Self {
            url: None,
            inline_data: Some(data.into()),
        }
    }

    /// Resolve to a concrete source, if the segment has one.
    pub fn source(&self) -> Option<AudioSource> {
        AudioSource::from_parts(self.url.clone(), self.inline_data.clone())
    }
}

fn default_music_gain() -> f32 {
    DEFAULT_MUSIC_GAIN
}

fn default_gap_seconds() -> f64 {
    DEFAULT_GAP_SECONDS
}

/// Configuration for one mixing job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixRequest {
    /// Background music bed, looped or truncated to the total duration.
    /// Mandatory: the music sizes the timeline.
    #[serde(alias = "musicSource")]
    pub music: AudioSource,

    /// Fractional attenuation applied to the music track
    #[serde(default = "default_music_gain", alias = "musicGain")]
    pub music_gain: f32,

    /// Speech segments, played back-to-back in list order
    #[serde(default)]
    pub segments: Vec<SpeechSegment>,

    /// Silence after each segment, in seconds
    #[serde(default = "default_gap_seconds", alias = "interSegmentGapSeconds")]
    pub gap_seconds: f64,
}

impl MixRequest {
    /// Request with default gain and gap.
    pub fn new(music: AudioSource, segments: Vec<SpeechSegment>) -> Self {
        Self {
            music,
            music_gain: DEFAULT_MUSIC_GAIN,
            segments,
            gap_seconds: DEFAULT_GAP_SECONDS,
        }
    }

    /// Parse a JSON job description.
    pub fn from_json(json: &str) -> Result<Self> {
        let request: MixRequest = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("Invalid mix request: {}", e)))?;
        request.validate()?;
        Ok(request)
    }

    /// Validate knob ranges.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.music_gain) {
            return Err(Error::Config(format!(
                "music_gain must be in [0, 1], got {}",
                self.music_gain
            )));
        }
        if !self.gap_seconds.is_finite() || self.gap_seconds < 0.0 {
            return Err(Error::Config(format!(
                "gap_seconds must be non-negative, got {}",
                self.gap_seconds
            )));
        }
        Ok(())
    }
}
