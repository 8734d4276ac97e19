//! # Canticle
//!
//! Offline devotional-audio mix renderer.
//!
//! **Purpose:** Acquire a background-music track and an ordered list of
//! narrated speech segments (remote URLs or inline base64 payloads), decode
//! everything to 44.1kHz stereo PCM, lay the segments out sequentially over
//! the looped music bed, render the timeline into a single stereo buffer,
//! and serialize it into a canonical 16-bit WAV blob.
//!
//! **Architecture:** Single linear async pipeline using symphonia + rubato,
//! with a hand-rolled RIFF/WAVE serializer for the output container.
//!
//! The crate has no realtime playback path and no network surface of its
//! own; callers hand it a [`MixRequest`] and receive a [`WavBlob`] (or a
//! typed error). Progress is observable through a watch channel per job.

pub mod audio;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod mix;
pub mod readalong;

pub use config::MixerConfig;
pub use error::{Error, Result};
pub use events::{MixProgress, MixStage};
pub use mix::job::{render_mix, MixJob};
pub use mix::source::{AudioSource, MixRequest, SpeechSegment};
pub use mix::wav::WavBlob;
pub use readalong::{ReadAlongSchedule, WordTiming};
