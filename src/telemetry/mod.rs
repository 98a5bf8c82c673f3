//! Logging setup and span helpers.
//!
//! The library only emits `tracing` events; nothing is printed unless the
//! application installs a subscriber, e.g. via [`init_logging`].

pub mod push;

use crate::error::{Error, Result};

/// Install a `tracing-subscriber` registry with an env filter and a compact
/// fmt layer on stderr.
///
/// `RUST_LOG` takes precedence over `level` when set.
///
/// # Errors
///
/// Returns an error if a global subscriber was already installed.
pub fn init_logging(level: &str) -> Result<()> {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| Error::Other(format!("failed to init tracing subscriber: {e}")))
}
