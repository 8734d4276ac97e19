//! Tracing setup for embedding applications and tests
//!
//! The crate itself only emits `tracing` events; installing a subscriber is
//! the embedder's call. This helper wires up the usual fmt subscriber with
//! env-filter support (`RUST_LOG=canticle=debug,...`).

use tracing_subscriber::{fmt, EnvFilter};

/// Install a global fmt subscriber with env-filter support.
///
/// Defaults to `info` when `RUST_LOG` is unset. Safe to call more than once;
/// subsequent calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
