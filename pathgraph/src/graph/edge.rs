//! Edge types: as submitted by the caller, and as resolved into the model.

use serde::{Deserialize, Serialize};

/// Edge weight as it arrives on the wire: a JSON number or a numeric string.
///
/// Browser forms submit weights as text, so both are accepted; validation into
/// a finite `f64` happens in [`GraphModel::build`](super::GraphModel::build).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Weight {
    Number(f64),
    Text(String),
}

impl Weight {
    /// Parsed value when finite; `None` for NaN, ±inf or unparsable text.
    pub fn finite_value(&self) -> Option<f64> {
        let value = match self {
            Weight::Number(w) => *w,
            Weight::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// Text form for error messages.
    pub fn display(&self) -> String {
        match self {
            Weight::Number(w) => w.to_string(),
            Weight::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for Weight {
    fn from(w: f64) -> Self {
        Weight::Number(w)
    }
}

/// One submitted edge, in caller order. Duplicates for the same ordered pair are allowed here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub source: String,
    pub target: String,
    pub weight: Weight,
}

impl EdgeSpec {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: impl Into<Weight>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight: weight.into(),
        }
    }
}

/// Resolved edge: endpoints known to exist, weight finite, one per ordered pair.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

impl Edge {
    pub fn touches(&self, label: &str) -> bool {
        self.source == label || self.target == label
    }
}
