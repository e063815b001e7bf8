//! Geometric utility functions for distance calculations and movement.

use geo::algorithm::Distance;
use geo::{Euclidean, Point};

/// Calculates the Euclidean distance between two points.
pub fn distance(a: Point<f64>, b: Point<f64>) -> f64 {
    Euclidean.distance(a, b)
}

/// Returns `true` when two circles touch or overlap.
pub fn circles_overlap(a: Point<f64>, radius_a: f64, b: Point<f64>, radius_b: f64) -> bool {
    distance(a, b) <= radius_a + radius_b
}

/// Takes one straight-line step from `from` towards `target`.
///
/// The step is scaled per axis by `speed_x` and `speed_y`. When the target
/// is within one step (the larger of the two speeds) the result snaps onto
/// it exactly.
///
/// # Arguments
///
/// * `from` - Current position
/// * `target` - Position to walk towards
/// * `speed_x` - Horizontal step length
/// * `speed_y` - Vertical step length
///
/// # Returns
///
/// The new position after one step.
pub fn step_towards(from: Point<f64>, target: Point<f64>, speed_x: f64, speed_y: f64) -> Point<f64> {
    let dist = distance(from, target);
    if dist > speed_x.max(speed_y) {
        let dx = (target.x() - from.x()) / dist * speed_x;
        let dy = (target.y() - from.y()) / dist * speed_y;
        Point::new(from.x() + dx, from.y() + dy)
    } else {
        target
    }
}
