//! Optional overrides for a CLI run (flags or programmatic).
//!
//! Used by [`RunConfig::apply_options`](super::RunConfig::apply_options). Only set
//! fields override the env-based config.

/// Overrides for one run: node limit, output format, verbosity.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Override `PATHGRAPH_MAX_NODES`.
    pub max_nodes: Option<usize>,
    /// Print protocol JSON instead of text tables.
    pub json: bool,
    /// Emit debug logs to stderr.
    pub verbose: bool,
}
