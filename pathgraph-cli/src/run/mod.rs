//! Run entry points: read a graph payload, call the engine, render the result.
//!
//! Each function returns the text to print so callers (binary, tests) decide
//! where it goes.

mod render;

use std::io::Read;
use std::path::Path;

use pathgraph::{GraphPayload, PathQueryRequest, RemoveNodeRequest};

use crate::config::{Error, RunConfig};

pub use render::{render_compute, render_path};

#[cfg(test)]
pub(crate) use render::{format_weight, render_table};

/// Reads a [`GraphPayload`] as JSON from `input`, or from stdin when `None` or `-`.
pub fn read_payload(input: Option<&Path>) -> Result<GraphPayload, Error> {
    let text = match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    parse_payload(&text)
}

/// Parses a [`GraphPayload`] from JSON text.
pub fn parse_payload(text: &str) -> Result<GraphPayload, Error> {
    serde_json::from_str(text).map_err(|e| format!("invalid graph payload: {}", e).into())
}

/// All-pairs computation: tables (or JSON) plus warnings.
pub fn run_compute(config: &RunConfig, payload: &GraphPayload) -> Result<String, Error> {
    let resp = pathgraph::compute(payload, &config.limits)?;
    if config.json {
        return Ok(serde_json::to_string_pretty(&resp)? + "\n");
    }
    Ok(render_compute(&resp))
}

/// Point query from `start` to `end`.
pub fn run_path(
    config: &RunConfig,
    payload: GraphPayload,
    start: &str,
    end: &str,
) -> Result<String, Error> {
    let request = PathQueryRequest {
        graph: payload,
        start: start.to_string(),
        end: end.to_string(),
    };
    let resp = pathgraph::query_path(&request, &config.limits)?;
    if config.json {
        return Ok(serde_json::to_string_pretty(&resp)? + "\n");
    }
    Ok(render_path(start, end, &resp))
}

/// Remove one node; always prints the resulting payload as JSON so it can be piped back in.
pub fn run_remove(config: &RunConfig, payload: GraphPayload, node: &str) -> Result<String, Error> {
    let request = RemoveNodeRequest {
        graph: payload,
        node_to_remove: node.to_string(),
    };
    let resp = pathgraph::remove_node(&request, &config.limits)?;
    tracing::info!(removed = node, node_count = resp.node_count, "node removed");
    Ok(serde_json::to_string_pretty(&resp)? + "\n")
}
