use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Errors that can occur while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum InitTracingError {
    #[error("failed to set the global tracing subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Installs the global tracing subscriber for a binary.
///
/// The filter is taken from `RUST_LOG` when set and defaults to `info`
/// otherwise. Fails when a subscriber has already been installed.
pub fn init_tracing() -> Result<(), InitTracingError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .finish()
        .try_init()?;

    Ok(())
}
