//! Point queries: reconstruct one route from the next-hop matrix.

mod path;

pub use path::{reconstruct, PathOutcome};
