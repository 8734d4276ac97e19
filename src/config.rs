//! canticle-specific configuration
//!
//! Ambient knobs owned by the mixing component. Request-scoped parameters
//! (music gain, inter-segment gap) travel on [`MixRequest`](crate::MixRequest)
//! instead; this struct only covers how sources are fetched.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_fetch_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("canticle/{}", env!("CARGO_PKG_VERSION"))
}

fn default_max_download_bytes() -> u64 {
    // 50 MiB: generous for a music bed, far beyond any TTS utterance
    50 * 1024 * 1024
}

/// Mixer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixerConfig {
    /// Timeout for each source fetch, in seconds
    #[serde(default = "default_fetch_timeout_seconds")]
    pub fetch_timeout_seconds: u64,

    /// User-Agent header sent with source fetches
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Upper bound on a single fetched payload, in bytes
    #[serde(default = "default_max_download_bytes")]
    pub max_download_bytes: u64,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_seconds: default_fetch_timeout_seconds(),
            user_agent: default_user_agent(),
            max_download_bytes: default_max_download_bytes(),
        }
    }
}

impl MixerConfig {
    /// Load configuration from a TOML file.
    ///
    /// Missing fields fall back to their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: MixerConfig = toml::from_str(&text)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.as_ref().display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field ranges.
    pub fn validate(&self) -> Result<()> {
        if self.fetch_timeout_seconds == 0 {
            return Err(Error::Config("fetch_timeout_seconds must be non-zero".to_string()));
        }
        if self.max_download_bytes == 0 {
            return Err(Error::Config("max_download_bytes must be non-zero".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MixerConfig::default();
        assert_eq!(config.fetch_timeout_seconds, 30);
        assert!(config.user_agent.starts_with("canticle/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: MixerConfig = toml::from_str("fetch_timeout_seconds = 10").unwrap();
        assert_eq!(config.fetch_timeout_seconds, 10);
        assert_eq!(config.max_download_bytes, 50 * 1024 * 1024);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = MixerConfig {
            fetch_timeout_seconds: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
