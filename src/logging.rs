//! Logging setup for the `mandelbrot-tiles` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the embedding application. Filtering follows `RUST_LOG` and falls back
//! to `info`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Installs a stderr `fmt` subscriber as the global default.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging() -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let _ = init_logging();

        assert!(init_logging().is_err());
    }
}
