//! Structured logging for the crate's own diagnostics.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Configure log level at runtime through `RUST_LOG`
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Falls back to a caller-supplied directive when `RUST_LOG` is unset

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor the caller provides one.
pub const DEFAULT_DIRECTIVE: &str = "notepad=info";

/// Build the filter from `RUST_LOG`, or from `fallback` when unset or invalid.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into())
}

/// Install a global subscriber writing diagnostics to stderr.
///
/// Fails if a global subscriber is already installed.
pub fn init(fallback: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(fallback))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let _ = init(DEFAULT_DIRECTIVE);
        assert!(init(DEFAULT_DIRECTIVE).is_err());
    }
}
