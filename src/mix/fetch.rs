//! Source acquisition
//!
//! Turns an [`AudioSource`] into a normalized [`PcmBuffer`]: fetch or unpack
//! the bytes, decode them, resample to the render rate, fix the channel
//! layout. The fetcher itself treats every failure as an error; the skip
//! vs. fail policy for segments lives with the job, which knows whether a
//! source is the mandatory music bed or a droppable utterance.

use crate::audio::{self, decoder, PcmBuffer};
use crate::config::MixerConfig;
use crate::error::{Error, Result};
use crate::mix::source::AudioSource;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use std::time::Duration;
use tracing::debug;

/// Fetches and decodes audio sources for one job.
pub struct SourceFetcher {
    http_client: reqwest::Client,
    max_download_bytes: u64,
}

impl SourceFetcher {
    /// Build a fetcher from the mixer configuration.
    pub fn new(config: &MixerConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.fetch_timeout_seconds))
            .build()
            .map_err(|e| Error::Fetch(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            max_download_bytes: config.max_download_bytes,
        })
    }

    /// Acquire one source: bytes -> decode -> normalize.
    pub async fn acquire(&self, source: &AudioSource) -> Result<PcmBuffer> {
        let bytes = match source {
            AudioSource::Url { url } => self.fetch_url(url).await?,
            AudioSource::Inline { data } => decode_inline(data)?,
        };

        debug!("Acquired {} bytes from {}", bytes.len(), source.describe());

        // Decoding is CPU-bound; keep it off the async worker
        let decoded = tokio::task::spawn_blocking(move || decoder::decode_bytes(bytes))
            .await
            .map_err(|e| Error::Internal(format!("Decode task failed: {}", e)))??;

        audio::normalize(decoded)
    }

    /// GET a binary payload. Non-success statuses mean "unavailable".
    async fn fetch_url(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!(
                "Fetching {} returned status {}",
                url, status
            )));
        }

        if let Some(length) = response.content_length() {
            if length > self.max_download_bytes {
                return Err(Error::Fetch(format!(
                    "Payload at {} is {} bytes, over the {} byte limit",
                    url, length, self.max_download_bytes
                )));
            }
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Fetch(format!("Reading body from {} failed: {}", url, e)))?;

        if bytes.len() as u64 > self.max_download_bytes {
            return Err(Error::Fetch(format!(
                "Payload at {} is {} bytes, over the {} byte limit",
                url,
                bytes.len(),
                self.max_download_bytes
            )));
        }

        Ok(bytes.to_vec())
    }
}

/// Unpack an inline base64 payload.
///
/// Accepts plain base64 or a full data URL; TTS responses arrive both ways.
fn decode_inline(data: &str) -> Result<Vec<u8>> {
    let encoded = match data.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => data,
    };

    BASE64_STANDARD
        .decode(encoded.trim())
        .map_err(|e| Error::Fetch(format!("Invalid base64 payload: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_inline_plain_base64() {
        let encoded = BASE64_STANDARD.encode(b"hello");
        assert_eq!(decode_inline(&encoded).unwrap(), b"hello");
    }

    #[test]
    fn test_decode_inline_data_url() {
        let encoded = format!("data:audio/mpeg;base64,{}", BASE64_STANDARD.encode(b"hello"));
        assert_eq!(decode_inline(&encoded).unwrap(), b"hello");
    }

    #[test]
    fn test_decode_inline_invalid() {
        assert!(matches!(decode_inline("not base64!!!"), Err(Error::Fetch(_))));
    }
}
