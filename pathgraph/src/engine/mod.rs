//! All-pairs shortest path engine (Floyd–Warshall).
//!
//! [`floyd_warshall`] turns a [`GraphModel`](crate::graph::GraphModel) into
//! [`ShortestPaths`]: distance matrix, next-hop matrix and the negative
//! edge / negative cycle flags.

mod distance;
mod floyd_warshall;
mod matrix;
mod shortest_paths;

pub use distance::{Distance, UNREACHABLE_MARKER};
pub use floyd_warshall::floyd_warshall;
pub use matrix::Matrix;
pub use shortest_paths::ShortestPaths;
