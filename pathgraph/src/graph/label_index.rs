//! Bidirectional label ↔ index lookup, built once per request.
//!
//! Nodes are referenced by label on the wire and by dense index `0..n` inside
//! the engine. The hash map keeps label resolution O(1) so edge ingestion and
//! path queries never fall back to linear search.

use std::collections::HashMap;

use crate::engine::UNREACHABLE_MARKER;
use crate::error::GraphError;

/// Unique node labels in index order plus the reverse map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelIndex {
    labels: Vec<String>,
    positions: HashMap<String, usize>,
}

impl LabelIndex {
    /// Index over caller-supplied labels; position in `labels` becomes the node index.
    ///
    /// Fails with `EmptyLabel`, `ReservedLabel` (the `"∞"` marker) or `DuplicateLabel`.
    pub fn new(labels: Vec<String>) -> Result<Self, GraphError> {
        let mut positions = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if label.is_empty() {
                return Err(GraphError::EmptyLabel(i));
            }
            if label == UNREACHABLE_MARKER {
                return Err(GraphError::ReservedLabel(i));
            }
            if positions.insert(label.clone(), i).is_some() {
                return Err(GraphError::DuplicateLabel(label.clone()));
            }
        }
        Ok(Self { labels, positions })
    }

    /// Default labels `A`, `B`, …, `Z`, `AA`, `AB`, … for `n` nodes.
    pub fn alphabetic(n: usize) -> Self {
        let labels: Vec<String> = (0..n).map(alphabetic_label).collect();
        let positions = labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.clone(), i))
            .collect();
        Self { labels, positions }
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.positions.contains_key(label)
    }
}

/// Spreadsheet-column label for a zero-based index: 0 → A, 25 → Z, 26 → AA.
pub fn alphabetic_label(mut index: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
