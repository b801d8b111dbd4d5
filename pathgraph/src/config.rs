//! Engine limits: upper bound on node count per request.
//!
//! Floyd–Warshall is O(n³) time and O(n²) memory, so every entry point checks
//! `node_count` against [`EngineLimits::max_nodes`] before allocating matrices.
//! Callers (server, CLI) build this from env and their own flags.

/// Default maximum node count when `PATHGRAPH_MAX_NODES` is not set.
pub const DEFAULT_MAX_NODES: usize = 512;

/// Env var read by [`EngineLimits::from_env`].
pub const MAX_NODES_ENV: &str = "PATHGRAPH_MAX_NODES";

/// Per-request resource bounds for the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineLimits {
    /// Largest accepted `node_count`; larger requests fail with `GraphTooLarge`.
    pub max_nodes: usize,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

impl EngineLimits {
    /// Limits with an explicit maximum node count.
    pub fn with_max_nodes(max_nodes: usize) -> Self {
        Self { max_nodes }
    }

    /// Fill limits from env (and .env when the caller loaded it).
    ///
    /// `PATHGRAPH_MAX_NODES` is optional; unset or unparsable values fall back
    /// to [`DEFAULT_MAX_NODES`].
    pub fn from_env() -> Self {
        let max_nodes = std::env::var(MAX_NODES_ENV)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_MAX_NODES);
        Self { max_nodes }
    }
}
