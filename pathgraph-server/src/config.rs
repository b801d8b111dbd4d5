//! Server config from env: listen address, engine limits, body limit, log file.

use std::path::{Path, PathBuf};

use pathgraph::EngineLimits;

/// Default listen address when `LISTEN` is not set.
pub const DEFAULT_LISTEN: &str = "0.0.0.0:8123";

/// Max request body size (bytes) when `PATHGRAPH_BODY_LIMIT` is not set. Larger requests get 413.
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Runtime configuration for the HTTP server.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. `0.0.0.0:8123`.
    pub listen: String,
    /// Engine limits applied to every request.
    pub limits: EngineLimits,
    /// Max request body size in bytes.
    pub body_limit: usize,
    /// When set, logs are also appended to this file as plain text.
    pub log_file: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN.to_string(),
            limits: EngineLimits::default(),
            body_limit: DEFAULT_BODY_LIMIT,
            log_file: None,
        }
    }
}

impl ServerConfig {
    /// Loads env vars, then fills config from them.
    ///
    /// The nearest `.env` at or above `start_dir` is applied first; variables
    /// already set in the process environment keep their values.
    pub fn load(start_dir: &Path) -> Self {
        if let Some(path) = find_env_file(start_dir) {
            let _ = dotenv::from_path(&path);
        }
        Self::from_env()
    }

    /// Fill config from env vars (and .env when loaded by the caller).
    ///
    /// `LISTEN`, `PATHGRAPH_MAX_NODES`, `PATHGRAPH_BODY_LIMIT`, `LOG_FILE` are all optional.
    pub fn from_env() -> Self {
        let listen = std::env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_string());
        let body_limit = std::env::var("PATHGRAPH_BODY_LIMIT")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_BODY_LIMIT);
        let log_file = std::env::var("LOG_FILE").ok().filter(|s| !s.is_empty());
        Self {
            listen,
            limits: EngineLimits::from_env(),
            body_limit,
            log_file,
        }
    }
}
/// Nearest `.env` in `dir` or one of its ancestors.
pub fn find_env_file(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .map(|d| d.join(".env"))
        .find(|candidate| candidate.is_file())
}
