//! Error types for canticle
//!
//! Defines crate-specific error types using thiserror for clear error propagation.
//!
//! The variants mirror the mix-job failure taxonomy: resource acquisition
//! problems are either fatal (background music) or degradable (individual
//! speech segments, handled at the orchestration layer and never surfaced
//! through this type), while rendering problems are always fatal.

use thiserror::Error;

/// Main error type for canticle
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP fetch errors (network failure or non-success status)
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Audio decoding errors (probe, codec, or payload problems)
    #[error("Audio decode error: {0}")]
    Decode(String),

    /// The background music track could not be fetched or decoded.
    ///
    /// Job-fatal: the music bed sizes the timeline, so the mix cannot
    /// proceed without it.
    #[error("Background music unavailable: {0}")]
    MusicUnavailable(String),

    /// No speech segment survived acquisition; there is nothing to mix.
    #[error("No audio segments to mix")]
    NoSegments,

    /// Offline rendering failed
    #[error("Render error: {0}")]
    Render(String),

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience Result type using canticle Error
pub type Result<T> = std::result::Result<T, Error>;
