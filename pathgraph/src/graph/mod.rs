//! Graph Model: labels, edges and the dense adjacency matrix.
//!
//! Build a [`GraphModel`] from a node count, optional labels and the submitted
//! [`EdgeSpec`]s. The model is the only input of the engine.

mod edge;
mod label_index;
mod model;

pub use edge::{Edge, EdgeSpec, Weight};
pub use label_index::{alphabetic_label, LabelIndex};
pub use model::GraphModel;
