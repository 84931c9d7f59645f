//! Tracing setup for host services embedding the core.
//!
//! The library itself only emits `tracing` events; whoever runs it calls
//! `init_tracing` once at startup to choose where they go.

use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::config::LogFormat;
use crate::error::{CoreError, Result};

/// Service name reported in bunyan records
pub const SERVICE_NAME: &str = "dilazaad-core";

/// `RUST_LOG` if set, otherwise `info`
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. A second call returns `CoreError::Telemetry`.
pub fn init_tracing(format: LogFormat) -> Result<()> {
    init_tracing_with_filter(format, env_filter())
}

/// Install the global subscriber with an explicit filter.
pub fn init_tracing_with_filter(format: LogFormat, filter: EnvFilter) -> Result<()> {
    let registry = Registry::default().with(filter);

    let installed = match format {
        LogFormat::Pretty => set_global_default(registry.with(fmt::layer().with_target(false))),
        LogFormat::Json => set_global_default(registry.with(fmt::layer().json())),
        LogFormat::Bunyan => set_global_default(
            registry
                .with(JsonStorageLayer)
                .with(BunyanFormattingLayer::new(
                    SERVICE_NAME.to_string(),
                    std::io::stdout,
                )),
        ),
    };

    installed.map_err(|e| CoreError::Telemetry(e.to_string()))
}
