//! Outline offsetting
//!
//! Each contour is decimated on a grid, given per-vertex miter normals as a
//! closed polyline, then every vertex is pushed against its normal by the
//! boldness magnitude. Solid contours grow and, because holes are painted
//! subtractively with the same convention, counters shrink.

use crate::core::errors::RenderError;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How the seam vertex (the first point of a contour) is displaced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeamJoin {
    /// Reuse the normal of the first edge. Cheap, and leaves a small notch
    /// at the seam on sharply curved contours.
    #[default]
    FirstEdge,
    /// Miter between the closing edge and the first edge, like every
    /// other vertex.
    Miter,
}

/// Unit miter direction and miter length at a polyline vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexNormal {
    pub normal: Vec2,
    pub miter_length: f64,
}

/// Closed offset outline ready for filling
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OffsetOutline {
    pub points: Vec<Point>,
}

impl OffsetOutline {
    /// Translate the outline vertically, e.g. onto a canvas baseline
    pub fn translated(mut self, dy: f64) -> Self {
        for point in &mut self.points {
            point.y += dy;
        }
        self
    }
}

/// Grid cell a point falls into at the given sampling resolution
fn grid_key(point: Point, resolution: f64) -> (i64, i64) {
    (
        (point.x / resolution).floor() as i64,
        (point.y / resolution).floor() as i64,
    )
}

/// Keep only the first point in every `resolution`-sized grid cell
///
/// Order is preserved. A non-positive or non-finite resolution is rejected.
pub fn dedup_points(points: &[Point], resolution: f64) -> Result<Vec<Point>, RenderError> {
    if !(resolution.is_finite() && resolution > 0.0) {
        return Err(RenderError::InvalidParameter(format!(
            "sampling resolution must be a positive number, got {resolution}"
        )));
    }

    let mut seen = HashSet::with_capacity(points.len());
    Ok(points
        .iter()
        .copied()
        .filter(|&p| seen.insert(grid_key(p, resolution)))
        .collect())
}

/// Unit direction from `from` to `to`
fn direction(to: Point, from: Point) -> Vec2 {
    (to - from).normalize()
}

/// Left-hand perpendicular of a direction
fn perpendicular(dir: Vec2) -> Vec2 {
    Vec2::new(-dir.y, dir.x)
}

/// Miter between an incoming and an outgoing unit direction
fn miter(line_a: Vec2, line_b: Vec2) -> VertexNormal {
    let edge_normal = perpendicular(line_a);
    let tangent = line_a + line_b;
    if tangent.hypot() < f64::EPSILON {
        // Hairpin: the edges fold back on each other
        return VertexNormal {
            normal: edge_normal,
            miter_length: 1.0,
        };
    }
    let normal = perpendicular(tangent.normalize());
    VertexNormal {
        normal,
        miter_length: 1.0 / normal.dot(edge_normal),
    }
}

/// Miter normals for every vertex of a closed polyline
///
/// Vertex `i` joins the edge arriving from vertex `i - 1` with the edge
/// leaving towards vertex `i + 1`, wrapping at both ends. Consecutive
/// points must be distinct.
pub fn vertex_normals(points: &[Point]) -> Vec<VertexNormal> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let prev = points[(i + n - 1) % n];
            let cur = points[i];
            let next = points[(i + 1) % n];
            miter(direction(cur, prev), direction(next, cur))
        })
        .collect()
}

/// Offset a contour by `magnitude` along its vertex normals
///
/// Points are first deduplicated at `resolution`. Fewer than two surviving
/// points cannot form an outline and are reported as a degenerate contour.
pub fn offset_outline(
    points: &[Point],
    magnitude: f64,
    resolution: f64,
    seam: SeamJoin,
) -> Result<OffsetOutline, RenderError> {
    let points = dedup_points(points, resolution)?;
    if points.len() < 2 {
        return Err(RenderError::DegenerateContour {
            points: points.len(),
        });
    }

    let mut normals = vertex_normals(&points);
    if seam == SeamJoin::FirstEdge {
        normals[0] = VertexNormal {
            normal: perpendicular(direction(points[1], points[0])),
            miter_length: 1.0,
        };
    }

    let points = points
        .iter()
        .zip(&normals)
        .map(|(&p, n)| p - n.normal * magnitude)
        .collect();
    Ok(OffsetOutline { points })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: f64) -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(size, 0.0),
            Point::new(size, size),
            Point::new(0.0, size),
        ]
    }

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_dedup_keeps_first_point_per_cell() {
        let points = vec![
            Point::new(0.1, 0.1),
            Point::new(0.9, 0.2),
            Point::new(1.5, 0.2),
            Point::new(0.5, 0.5),
            Point::new(-0.5, 0.5),
        ];
        let kept = dedup_points(&points, 1.0).unwrap();
        assert_eq!(
            kept,
            vec![Point::new(0.1, 0.1), Point::new(1.5, 0.2), Point::new(-0.5, 0.5)]
        );
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let points: Vec<Point> = (0..200)
            .map(|i| {
                let t = i as f64 * 0.05;
                Point::new(10.0 * t.cos() + 0.3 * t, 10.0 * t.sin())
            })
            .collect();
        for resolution in [0.25, 1.0, 3.0] {
            let once = dedup_points(&points, resolution).unwrap();
            let twice = dedup_points(&once, resolution).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_dedup_rejects_invalid_resolution() {
        let points = square(10.0);
        for resolution in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                dedup_points(&points, resolution),
                Err(RenderError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_square_miters() {
        let normals = vertex_normals(&square(10.0));
        assert_eq!(normals.len(), 4);

        let diag = std::f64::consts::FRAC_1_SQRT_2;
        // Counter-clockwise in a y-up frame: left normals point inward
        assert!((normals[1].normal.x - -diag).abs() < 1e-9);
        assert!((normals[1].normal.y - diag).abs() < 1e-9);
        for n in &normals {
            assert!((n.normal.hypot() - 1.0).abs() < 1e-9);
            assert!((n.miter_length - std::f64::consts::SQRT_2).abs() < 1e-9);
        }
    }

    #[test]
    fn test_straight_vertex_has_unit_miter() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 5.0),
        ];
        let normals = vertex_normals(&points);
        assert!((normals[1].miter_length - 1.0).abs() < 1e-9);
        assert_close(normals[1].normal.to_point(), Point::new(0.0, 1.0));
    }

    #[test]
    fn test_two_point_contour_falls_back_to_edge_normal() {
        let points = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let normals = vertex_normals(&points);
        assert_eq!(normals.len(), 2);
        for n in &normals {
            assert!(n.normal.x.is_finite() && n.normal.y.is_finite());
            assert_eq!(n.miter_length, 1.0);
        }
    }

    #[test]
    fn test_offset_grows_counter_clockwise_square() {
        let outline = offset_outline(&square(10.0), 1.0, 0.5, SeamJoin::Miter).unwrap();
        let d = std::f64::consts::FRAC_1_SQRT_2;
        assert_close(outline.points[0], Point::new(-d, -d));
        assert_close(outline.points[2], Point::new(10.0 + d, 10.0 + d));
    }

    #[test]
    fn test_first_edge_seam_uses_first_edge_normal() {
        let outline = offset_outline(&square(10.0), 1.0, 0.5, SeamJoin::FirstEdge).unwrap();
        // First edge runs along +x, its left normal is +y
        assert_close(outline.points[0], Point::new(0.0, -1.0));
        let d = std::f64::consts::FRAC_1_SQRT_2;
        assert_close(outline.points[1], Point::new(10.0 + d, -d));
    }

    #[test]
    fn test_negative_magnitude_thins() {
        let outline = offset_outline(&square(10.0), -1.0, 0.5, SeamJoin::Miter).unwrap();
        let d = std::f64::consts::FRAC_1_SQRT_2;
        assert_close(outline.points[2], Point::new(10.0 - d, 10.0 - d));
    }

    #[test]
    fn test_zero_magnitude_is_identity_after_dedup() {
        let outline = offset_outline(&square(10.0), 0.0, 1.0, SeamJoin::FirstEdge).unwrap();
        assert_eq!(outline.points, square(10.0));
    }

    #[test]
    fn test_coarse_sampling_collapses_contour() {
        let err = offset_outline(&square(10.0), 2.0, 100.0, SeamJoin::FirstEdge).unwrap_err();
        assert!(matches!(err, RenderError::DegenerateContour { points: 1 }));

        let err = offset_outline(&[], 2.0, 1.0, SeamJoin::FirstEdge).unwrap_err();
        assert!(matches!(err, RenderError::DegenerateContour { points: 0 }));
    }

    #[test]
    fn test_translated() {
        let outline = OffsetOutline {
            points: vec![Point::new(1.0, 2.0)],
        }
        .translated(100.0);
        assert_eq!(outline.points, vec![Point::new(1.0, 102.0)]);
    }
}
