//! # pathgraph
//!
//! All-pairs shortest paths over small directed, edge-weighted graphs, with
//! next-hop routing tables, negative-cycle detection and point-to-point path
//! reconstruction.
//!
//! ## Design Principles
//!
//! - **Fresh per request**: every call builds its own [`GraphModel`] and
//!   matrices from the payload and drops them on return. Nothing is cached or
//!   shared, so requests can be served in parallel with no locks.
//! - **Explicit unreachable**: distances are [`Distance::Finite`] or
//!   [`Distance::Unreachable`], never a floating-point infinity.
//! - **Flags, not failures**: negative edges and negative cycles are reported
//!   on [`ShortestPaths`]; a missing route is [`PathOutcome::NoPath`]. Only
//!   malformed payloads are [`GraphError`]s.
//!
//! ## Main Modules
//!
//! - [`graph`]: `LabelIndex`, `EdgeSpec`, `GraphModel`: labels, duplicate-edge resolution, adjacency.
//! - [`engine`]: `floyd_warshall`, `ShortestPaths`, `Distance`, `Matrix`.
//! - [`query`]: `reconstruct`, `PathOutcome`: walk the next-hop matrix.
//! - [`protocol`]: request/response types and the `compute` / `query_path` / `remove_node` handlers.
//! - [`config`]: `EngineLimits` (maximum node count).
//!
//! ## Features
//!
//! - `tracing`: structured logging of computations and rejected requests.
//!
//! ## Quick Start
//!
//! ```rust
//! use pathgraph::{floyd_warshall, EdgeSpec, EngineLimits, GraphModel, PathOutcome};
//!
//! let edges = vec![EdgeSpec::new("A", "B", 1.0), EdgeSpec::new("B", "C", 2.0)];
//! let graph = GraphModel::build(3, None, &edges, &EngineLimits::default()).unwrap();
//! let paths = floyd_warshall(&graph);
//!
//! match paths.path("A", "C") {
//!     PathOutcome::Found { path, distance } => {
//!         assert_eq!(path, vec![0, 1, 2]);
//!         assert_eq!(distance, 3.0);
//!     }
//!     other => panic!("expected a path, got {:?}", other),
//! }
//! ```
//!
//! ## Negative cycles
//!
//! When [`ShortestPaths::has_negative_cycle`] is true the matrices are still
//! returned but are best effort: distances for pairs that can route through
//! the cycle are not shortest-path values. Point queries on such pairs either
//! return the walked route with the matrix distance or
//! [`PathOutcome::Unreliable`]; they never loop.

pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod logging;
pub mod protocol;
pub mod query;

pub use config::EngineLimits;
pub use engine::{floyd_warshall, Distance, Matrix, ShortestPaths, UNREACHABLE_MARKER};
pub use error::GraphError;
pub use graph::{Edge, EdgeSpec, GraphModel, LabelIndex, Weight};
pub use protocol::{
    compute, query_path, remove_node, ComputeResponse, GraphPayload, PathQueryRequest,
    PathQueryResponse, PathStatus, RemoveNodeRequest, RemoveNodeResponse,
};
pub use query::{reconstruct, PathOutcome};
