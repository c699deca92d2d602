//! Immutable polyline path with arc-length sampling.
//!
//! Enemies locate themselves on the path by progress, the fraction of
//! total arc length covered. The path is author-defined and never changes
//! after construction.

use glam::DVec2;

use pathwarden_core::constants::DEFAULT_WAYPOINTS;
use pathwarden_core::error::PathError;
use pathwarden_core::types::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    waypoints: Vec<Position>,
    /// Arc length from the first waypoint to waypoint `i`.
    cumulative: Vec<f64>,
    total_length: f64,
}

impl Path {
    /// Build a path from at least two finite waypoints with non-zero total length.
    pub fn new(waypoints: Vec<Position>) -> Result<Self, PathError> {
        if waypoints.len() < 2 {
            return Err(PathError::TooFewWaypoints(waypoints.len()));
        }
        if let Some(index) = waypoints
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(PathError::NonFiniteWaypoint(index));
        }

        let mut cumulative = Vec::with_capacity(waypoints.len());
        let mut total_length = 0.0;
        cumulative.push(0.0);
        for pair in waypoints.windows(2) {
            total_length += pair[0].range_to(&pair[1]);
            cumulative.push(total_length);
        }

        if total_length <= 0.0 {
            return Err(PathError::ZeroLength);
        }

        Ok(Self {
            waypoints,
            cumulative,
            total_length,
        })
    }

    /// The default route used when no waypoints are configured.
    pub fn default_waypoints() -> Vec<Position> {
        DEFAULT_WAYPOINTS.iter().map(|&p| p.into()).collect()
    }

    pub fn waypoints(&self) -> &[Position] {
        &self.waypoints
    }

    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    pub fn start(&self) -> Position {
        self.waypoints[0]
    }

    pub fn end(&self) -> Position {
        self.waypoints[self.waypoints.len() - 1]
    }

    /// Position at arc-length fraction `t`. Out-of-range `t` is clamped to [0, 1].
    pub fn point_at(&self, t: f64) -> Position {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let distance = t * self.total_length;

        // First waypoint strictly beyond `distance`; the segment starts one before it.
        let next = self.cumulative.partition_point(|&d| d <= distance);
        let segment = next.saturating_sub(1).min(self.waypoints.len() - 2);

        let start = self.waypoints[segment];
        let end = self.waypoints[segment + 1];
        let segment_length = self.cumulative[segment + 1] - self.cumulative[segment];
        if segment_length <= 0.0 {
            return start;
        }

        let local = ((distance - self.cumulative[segment]) / segment_length).clamp(0.0, 1.0);
        let a: DVec2 = start.as_dvec2();
        a.lerp(end.as_dvec2(), local).into()
    }

    /// `n` positions evenly spaced by arc length, including both endpoints.
    pub fn sample_points(&self, n: usize) -> Vec<Position> {
        match n {
            0 => Vec::new(),
            1 => vec![self.start()],
            _ => (0..n)
                .map(|i| self.point_at(i as f64 / (n - 1) as f64))
                .collect(),
        }
    }
}
