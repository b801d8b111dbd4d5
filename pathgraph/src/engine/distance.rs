//! Tagged distance value: finite weight or unreachable.
//!
//! Unreachable is its own case rather than `f64::INFINITY`, so relaxation never
//! does arithmetic on infinities (no NaN from `inf + -inf`, no silent overflow).

use serde::{Serialize, Serializer};

/// Wire marker for unreachable cells in distance and next-hop matrices.
pub const UNREACHABLE_MARKER: &str = "∞";

/// Shortest known total weight between two nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Distance {
    Finite(f64),
    Unreachable,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0.0);

    /// The weight, or `None` when unreachable.
    pub fn finite(self) -> Option<f64> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Sum of two distances when both are finite and the sum does not overflow.
    pub fn checked_add(self, other: Distance) -> Option<f64> {
        let sum = self.finite()? + other.finite()?;
        sum.is_finite().then_some(sum)
    }

    /// True when `candidate` is strictly shorter than `self`.
    ///
    /// Unreachable is longer than every finite weight.
    pub fn is_improved_by(self, candidate: f64) -> bool {
        match self {
            Distance::Finite(current) => candidate < current,
            Distance::Unreachable => true,
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(w) => serializer.serialize_f64(*w),
            Distance::Unreachable => serializer.serialize_str(UNREACHABLE_MARKER),
        }
    }
}
