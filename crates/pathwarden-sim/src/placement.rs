//! Tower placement admissibility.
//!
//! A point is buildable when it keeps clear of every sampled path point.
//! Distance to other towers is not considered: towers may be packed
//! arbitrarily close together.

use pathwarden_core::constants::{PLACEMENT_CLEARANCE, PLACEMENT_SAMPLES};
use pathwarden_core::types::Position;

use crate::path::Path;

#[derive(Debug, Clone)]
pub struct PlacementValidator {
    samples: Vec<Position>,
    clearance: f64,
}

impl PlacementValidator {
    /// Sample the path once; the path never changes afterwards.
    pub fn new(path: &Path) -> Self {
        Self {
            samples: path.sample_points(PLACEMENT_SAMPLES),
            clearance: PLACEMENT_CLEARANCE,
        }
    }

    /// True iff `(x, y)` is finite and strictly farther than the clearance
    /// from every sample.
    pub fn is_valid_placement(&self, x: f64, y: f64) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        let candidate = Position::new(x, y);
        self.samples
            .iter()
            .all(|p| p.range_to(&candidate) > self.clearance)
    }

    pub fn samples(&self) -> &[Position] {
        &self.samples
    }
}
