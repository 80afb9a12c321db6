//! Bezier flattening
//!
//! Quadratic and cubic segments are approximated by a polyline whose step
//! count is derived from the length of the control polygon. The control
//! polygon always overestimates the arc length, which errs on the side of
//! more points; later deduplication merges the excess.

use crate::geometry::{distance, lerp};
use kurbo::Point;

/// Target length of a single flattened step, in design units
pub const BEZIER_STEP_SIZE: f64 = 3.0;

/// Upper bound on the number of points emitted per segment
pub const MAX_BEZIER_STEPS: usize = 10;

/// Lower bound on the number of points emitted per segment
pub const MIN_BEZIER_STEPS: usize = 2;

/// Number of steps used to flatten a segment with the given control polygon length
pub fn step_count(control_length: f64) -> usize {
    let steps = (control_length / BEZIER_STEP_SIZE).ceil();
    if steps.is_finite() && steps > MIN_BEZIER_STEPS as f64 {
        (steps as usize).min(MAX_BEZIER_STEPS)
    } else {
        MIN_BEZIER_STEPS
    }
}

/// Flatten a quadratic segment starting at `p0`
///
/// The start point is not emitted; the last emitted point is exactly `p`.
pub fn flatten_quad(p0: Point, p1: Point, p: Point) -> Vec<Point> {
    let steps = step_count(distance(p0, p1) + distance(p1, p));
    (1..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            lerp(lerp(p0, p1, t), lerp(p1, p, t), t)
        })
        .collect()
}

/// Flatten a cubic segment starting at `p0`
///
/// The start point is not emitted; the last emitted point is exactly `p`.
pub fn flatten_cubic(p0: Point, p1: Point, p2: Point, p: Point) -> Vec<Point> {
    let steps = step_count(distance(p0, p1) + distance(p1, p2) + distance(p2, p));
    (1..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            let a = lerp(lerp(p0, p1, t), lerp(p1, p2, t), t);
            let b = lerp(lerp(p1, p2, t), lerp(p2, p, t), t);
            lerp(a, b, t)
        })
        .collect()
}
