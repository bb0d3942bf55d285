//! Logging and tracing utilities
//!
//! Logs are written to stderr: stdout is reserved for the MCP transport.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

/// Initialize tracing from the environment (`RUST_LOG`, `LOG_FORMAT`)
pub fn init_tracing() {
    init_tracing_with(&LoggingConfig::from_env());
}

/// Initialize tracing with an explicit configuration
///
/// Does nothing if a global subscriber is already installed.
pub fn init_tracing_with(config: &LoggingConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    if let Err(err) = result {
        tracing::debug!("Tracing already initialized: {err}");
    }
}
