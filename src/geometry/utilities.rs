//! Geometry utility functions
//!
//! Scalar vector math shared by the tessellator, the contour builder and
//! the offsetter. Thin wrappers over kurbo so call sites read like the
//! formulas they implement.

use kurbo::Point;

/// Euclidean distance between two points
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Linear interpolation from `a` to `b`
///
/// `t` is not clamped, so values outside `0.0..=1.0` extrapolate along the line.
pub fn lerp(a: Point, b: Point, t: f64) -> Point {
    Point::new((1.0 - t) * a.x + t * b.x, (1.0 - t) * a.y + t * b.y)
}

/// 2D cross product of two position vectors
pub fn cross(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}
