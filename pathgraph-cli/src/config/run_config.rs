//! Run config: engine limits and output settings. Filled from env / .env, then flags.

use pathgraph::EngineLimits;

use super::RunOptions;

/// Error type used across the CLI.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Effective settings for one CLI invocation.
#[derive(Clone, Debug, Default)]
pub struct RunConfig {
    /// Engine limits (max node count).
    pub limits: EngineLimits,
    /// When true, print protocol JSON; otherwise text tables.
    pub json: bool,
    /// When true, debug logs go to stderr.
    pub verbose: bool,
}

impl RunConfig {
    /// Fill config from env vars. Call `dotenv::dotenv().ok()` first to honour `.env`.
    ///
    /// `PATHGRAPH_MAX_NODES` optional; `PATHGRAPH_JSON=1` selects JSON output.
    pub fn from_env() -> Self {
        let json = std::env::var("PATHGRAPH_JSON")
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Self {
            limits: EngineLimits::from_env(),
            json,
            verbose: false,
        }
    }

    /// Apply overrides from `options`; unset fields keep the env values.
    pub fn apply_options(&mut self, options: &RunOptions) {
        if let Some(max) = options.max_nodes {
            self.limits.max_nodes = max;
        }
        if options.json {
            self.json = true;
        }
        self.verbose = options.verbose;
    }
}
