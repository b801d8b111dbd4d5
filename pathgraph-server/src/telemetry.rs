//! Tracing setup for the server binary.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::ServerConfig;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,pathgraph_server=debug,pathgraph=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber: colored stdout, plus a plain-text append-only
/// copy in `config.log_file` when set.
///
/// Fails only if the log file cannot be opened.
pub fn init_tracing(config: &ServerConfig) -> std::io::Result<()> {
    let file_layer = match config.log_file.as_deref() {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_filter(env_filter()),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter()))
        .with(file_layer)
        .init();

    if let Some(path) = &config.log_file {
        tracing::info!(path = %path, "logging to file");
    }
    Ok(())
}
