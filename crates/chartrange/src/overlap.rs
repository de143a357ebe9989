//! Cross-camera range intersection.

use serde::{Deserialize, Serialize};

use crate::distance::CameraRange;

/// Outcome of intersecting every camera's working range.
///
/// Both variants carry `lower = max(min_i)` and `upper = min(max_i)`; only
/// their order differs. A disjoint result is informational, not an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Overlap {
    /// Every camera can be tested from any distance in `[lower_mm, upper_mm]`.
    Common { lower_mm: f64, upper_mm: f64 },
    /// No single distance works for all cameras.
    Disjoint { lower_mm: f64, upper_mm: f64 },
}

impl Overlap {
    /// Intersect `ranges`. Returns `None` for an empty slice.
    pub fn reduce(ranges: &[CameraRange]) -> Option<Self> {
        let first = ranges.first()?;
        let (lower_mm, upper_mm) = ranges[1..].iter().fold(
            (first.min_distance_mm, first.max_distance_mm),
            |(lo, hi), r| (lo.max(r.min_distance_mm), hi.min(r.max_distance_mm)),
        );
        Some(if lower_mm <= upper_mm {
            Self::Common { lower_mm, upper_mm }
        } else {
            Self::Disjoint { lower_mm, upper_mm }
        })
    }

    /// Common interval `[lower_mm, upper_mm]`, if any.
    pub fn common_mm(self) -> Option<[f64; 2]> {
        match self {
            Self::Common { lower_mm, upper_mm } => Some([lower_mm, upper_mm]),
            Self::Disjoint { .. } => None,
        }
    }

    pub fn is_common(self) -> bool {
        matches!(self, Self::Common { .. })
    }
}
