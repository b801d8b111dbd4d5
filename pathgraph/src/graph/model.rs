//! Graph Model: labeled nodes plus resolved directed edges and the dense
//! adjacency matrix the engine starts from.
//!
//! Built fresh per request by [`GraphModel::build`]; immutable afterwards.

use std::collections::HashMap;

use crate::config::EngineLimits;
use crate::engine::{Distance, Matrix};
use crate::error::GraphError;

use super::edge::{Edge, EdgeSpec};
use super::label_index::LabelIndex;

/// Immutable snapshot of one request's graph.
///
/// Adjacency: 0 on the diagonal, `Unreachable` off-diagonal, then each resolved
/// edge written in. A self-loop only lands on the diagonal when its weight is
/// negative; a non-negative self-loop can never beat the empty path.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphModel {
    index: LabelIndex,
    edges: Vec<Edge>,
    adjacency: Matrix<Distance>,
    has_negative_edge: bool,
}

impl GraphModel {
    /// Validates a payload and builds the model.
    ///
    /// Checks in order: `node_count` against `limits` (before any allocation),
    /// label count and uniqueness, then every edge in submission order
    /// (endpoints first, then weight). For repeated ordered pairs the last
    /// submitted edge wins and keeps the position of the first one.
    pub fn build(
        node_count: usize,
        labels: Option<Vec<String>>,
        edges: &[EdgeSpec],
        limits: &EngineLimits,
    ) -> Result<Self, GraphError> {
        if node_count > limits.max_nodes {
            return Err(GraphError::GraphTooLarge {
                node_count,
                max: limits.max_nodes,
            });
        }

        let index = match labels {
            Some(labels) => {
                if labels.len() != node_count {
                    return Err(GraphError::LabelCountMismatch {
                        labels: labels.len(),
                        node_count,
                    });
                }
                LabelIndex::new(labels)?
            }
            None => LabelIndex::alphabetic(node_count),
        };

        let mut resolved: Vec<Edge> = Vec::with_capacity(edges.len());
        let mut slots: HashMap<(usize, usize), usize> = HashMap::with_capacity(edges.len());
        let mut has_negative_edge = false;

        for spec in edges {
            let (u, v) = match (index.index_of(&spec.source), index.index_of(&spec.target)) {
                (Some(u), Some(v)) => (u, v),
                _ => {
                    return Err(GraphError::InvalidEdge {
                        from: spec.source.clone(),
                        to: spec.target.clone(),
                    })
                }
            };
            let weight = spec
                .weight
                .finite_value()
                .ok_or_else(|| GraphError::InvalidWeight {
                    from: spec.source.clone(),
                    to: spec.target.clone(),
                    weight: spec.weight.display(),
                })?;

            // Counted over every submitted edge, overwritten ones included.
            if weight < 0.0 {
                has_negative_edge = true;
            }

            match slots.get(&(u, v)) {
                Some(&slot) => resolved[slot].weight = weight,
                None => {
                    slots.insert((u, v), resolved.len());
                    resolved.push(Edge {
                        source: spec.source.clone(),
                        target: spec.target.clone(),
                        weight,
                    });
                }
            }
        }

        Ok(Self::from_parts(index, resolved, has_negative_edge))
    }

    fn from_parts(index: LabelIndex, edges: Vec<Edge>, has_negative_edge: bool) -> Self {
        let n = index.len();
        let mut adjacency = Matrix::filled(n, Distance::Unreachable);
        for i in 0..n {
            adjacency[(i, i)] = Distance::ZERO;
        }
        for edge in &edges {
            // Endpoints were resolved against this index.
            let (Some(u), Some(v)) = (index.index_of(&edge.source), index.index_of(&edge.target))
            else {
                continue;
            };
            if u == v && edge.weight >= 0.0 {
                continue;
            }
            adjacency[(u, v)] = Distance::Finite(edge.weight);
        }
        Self {
            index,
            edges,
            adjacency,
            has_negative_edge,
        }
    }

    /// Model with `label` and every edge touching it removed.
    ///
    /// Remaining nodes keep their labels and relative order. The negative-edge
    /// flag is recomputed from the surviving resolved edges.
    pub fn without_node(&self, label: &str) -> Result<Self, GraphError> {
        if !self.index.contains(label) {
            return Err(GraphError::UnknownNode(label.to_string()));
        }
        let labels: Vec<String> = self
            .index
            .labels()
            .iter()
            .filter(|l| l.as_str() != label)
            .cloned()
            .collect();
        let edges: Vec<Edge> = self
            .edges
            .iter()
            .filter(|e| !e.touches(label))
            .cloned()
            .collect();
        let has_negative_edge = edges.iter().any(|e| e.weight < 0.0);
        Ok(Self::from_parts(LabelIndex::new(labels)?, edges, has_negative_edge))
    }

    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    pub fn label_index(&self) -> &LabelIndex {
        &self.index
    }

    pub fn labels(&self) -> &[String] {
        self.index.labels()
    }

    pub fn adjacency(&self) -> &Matrix<Distance> {
        &self.adjacency
    }

    /// Resolved edges after last-wins, one per ordered pair.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// True if any submitted edge had a negative weight.
    pub fn has_negative_edge(&self) -> bool {
        self.has_negative_edge
    }
}
