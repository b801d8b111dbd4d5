//! Boundary contract: serde request/response types and the handlers shared
//! by the HTTP server and the CLI.

mod handle;
mod request;
mod response;

pub use handle::{compute, query_path, remove_node};
pub use request::{GraphPayload, PathQueryRequest, RemoveNodeRequest};
pub use response::{ComputeResponse, PathQueryResponse, PathStatus, RemoveNodeResponse};
