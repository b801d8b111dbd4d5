//! pathgraph-cli library: reusable run logic for the `pathgraph` binary.
//!
//! Reads a graph payload (same JSON the HTTP server accepts), runs the engine
//! and returns rendered text.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pathgraph_cli::{read_payload, run_compute, RunConfig};
//!
//! let config = RunConfig::from_env();
//! let payload = read_payload(Some(std::path::Path::new("graph.json")))?;
//! print!("{}", run_compute(&config, &payload)?);
//! # Ok::<(), pathgraph_cli::Error>(())
//! ```

mod config;
mod run;

pub use config::{Error, RunConfig, RunOptions};
pub use run::{
    parse_payload, read_payload, render_compute, render_path, run_compute, run_path, run_remove,
};

#[cfg(test)]
mod tests;
