//! Great-circle line sampling.
//!
//! Produces positions along the ray leaving `start` towards `end` at a fixed
//! ground step. The bearing and the total distance are computed once from the
//! original endpoints, so every point lies on the initial great circle from
//! `start`. The last point overshoots `end` by up to one step instead of
//! landing on it.

use crate::geodesic::{bearing, haversine_distance, terminal, Position};

/// Iterator over sampled positions along a great-circle line.
///
/// Always yields `start` first, then at least one projected point. Iteration
/// stops once the accumulated step distance reaches the start-to-end
/// distance.
///
/// # Example
///
/// ```
/// use polygrid::geodesic::Position;
/// use polygrid::sampler::LineSampler;
///
/// let start = Position::new(13.37, 52.25);
/// let end = Position::new(13.36, 52.25);
///
/// let points: Vec<Position> = LineSampler::new(start, end, 100.0).collect();
/// assert_eq!(points.len(), 8);
/// assert_eq!(points[0], start);
/// ```
#[derive(Debug, Clone)]
pub struct LineSampler {
    start: Position,
    heading: f64,
    distance: f64,
    step: f64,
    travelled: f64,
    last: Option<Position>,
    done: bool,
}

impl LineSampler {
    /// Create a sampler from `start` towards `end` every `step` meters.
    ///
    /// A step that is not a finite positive number yields `start` alone.
    pub fn new(start: Position, end: Position, step: f64) -> Self {
        Self {
            start,
            heading: bearing(start, end),
            distance: haversine_distance(start, end),
            step,
            travelled: 0.0,
            last: None,
            done: false,
        }
    }

    /// Initial bearing shared by every projected point, in degrees.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Great-circle distance between the original endpoints, in meters.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    fn has_valid_step(&self) -> bool {
        self.step.is_finite() && self.step > 0.0
    }
}

impl Iterator for LineSampler {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Some(previous) = self.last else {
            self.last = Some(self.start);
            self.done = !self.has_valid_step();
            return Some(self.start);
        };

        let next = terminal(previous, self.step, self.heading);
        self.travelled += self.step;
        // A step longer than the whole line still emits one overshooting point.
        if self.distance.is_nan() || self.travelled >= self.distance {
            self.done = true;
        }
        self.last = Some(next);

        Some(next)
    }
}

impl std::iter::FusedIterator for LineSampler {}

/// Sample positions along the great circle from `start` towards `end`.
///
/// See [`LineSampler`] for the exact stopping rule.
pub fn points_on_line(start: Position, end: Position, step: f64) -> Vec<Position> {
    LineSampler::new(start, end, step).collect()
}
