//! Mix pipeline
//!
//! The three-stage pipeline behind [`MixJob`](job::MixJob):
//!
//! 1. acquisition ([`fetch`]) — turn every configured source into a
//!    normalized PCM buffer
//! 2. composition ([`timeline`] + [`renderer`]) — place buffers on a
//!    frame-accurate schedule and render them into one stereo buffer
//! 3. encoding ([`wav`]) — serialize the rendered buffer into a WAV blob

pub mod fetch;
pub mod job;
pub mod renderer;
pub mod source;
pub mod timeline;
pub mod wav;
