//! Optional tracing subscriber for callers without their own.
//!
//! The library only emits `tracing` events. Scripts that want to see them can
//! call [`init`], which installs a stderr fmt subscriber filtered by
//! `RUST_LOG` (default `info`).

use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INSTALLED: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "info";

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// `RUST_LOG` is set but is not a valid filter directive.
    #[error("Invalid RUST_LOG filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::FromEnvError),
    /// Another global subscriber is already installed.
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the global subscriber. Subsequent calls are no-ops.
pub fn init() -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let env_filter = build_env_filter()?;
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    let _ = INSTALLED.set(());

    tracing::debug!("Logging initialized");
    Ok(())
}

fn build_env_filter() -> Result<EnvFilter, LoggingError> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(_) => Ok(EnvFilter::try_from_default_env()?),
        Err(_) => Ok(EnvFilter::new(DEFAULT_FILTER)),
    }
}
