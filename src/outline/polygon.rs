//! Closed glyph contours
//!
//! A [`Polygon`] accumulates flattened outline points in winding order and
//! records its signed area when closed. Classification later fills in the
//! holes it directly contains.

use super::tessellate::{flatten_cubic, flatten_quad};
use crate::geometry::cross;
use kurbo::Point;

/// Vertical offset applied to containment queries so that a point lying
/// exactly on a horizontal edge or vertex is not counted twice. Glyph
/// coordinates have finite resolution, so this only needs to break ties.
pub const INSIDE_EPSILON: f64 = 1e-6;

/// A single closed contour of a glyph outline
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    /// Points in insertion (winding) order. The closing edge from the last
    /// point back to the first is implicit.
    pub points: Vec<Point>,
    /// Signed area from the shoelace formula; only the sign relative to
    /// other contours carries meaning.
    pub area: f64,
    /// Holes directly contained by this contour
    pub children: Vec<Polygon>,
    closed: bool,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a contour at `start`
    pub fn starting_at(start: Point) -> Self {
        let mut polygon = Self::new();
        polygon.push(start);
        polygon
    }

    /// Append a raw point (the end of a straight segment, or a subpath start)
    pub fn push(&mut self, point: Point) {
        debug_assert!(!self.closed, "points appended to a closed contour");
        self.points.push(point);
    }

    /// The point the next segment starts from
    pub fn current_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Append a flattened quadratic segment from the current point to `end`
    pub fn conic_to(&mut self, end: Point, control: Point) {
        let start = self.current_point().unwrap_or(control);
        for point in flatten_quad(start, control, end) {
            self.push(point);
        }
    }

    /// Append a flattened cubic segment from the current point to `end`
    pub fn cubic_to(&mut self, end: Point, control1: Point, control2: Point) {
        let start = self.current_point().unwrap_or(control1);
        for point in flatten_cubic(start, control1, control2, end) {
            self.push(point);
        }
    }

    /// Close the contour and compute its signed area
    ///
    /// Closing twice is a no-op so the area is never accumulated twice.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.area = self.edges().map(|(cur, next)| 0.5 * cross(cur, next)).sum();
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of points, holes excluded
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point used to test whether this contour sits inside another one
    pub fn first_point(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Iterate edges as a cyclic polyline: the first edge runs from the
    /// last point to the first one.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let last = self.points.last().copied();
        last.into_iter()
            .chain(self.points.iter().copied())
            .zip(self.points.iter().copied())
    }

    /// Crossing-number point-in-polygon test
    pub fn contains(&self, p: Point) -> bool {
        let y = p.y + INSIDE_EPSILON;
        let crossings = self
            .edges()
            .filter(|&(cur, next)| {
                let (p0, p1) = if cur.y < next.y { (cur, next) } else { (next, cur) };
                p0.y < y
                    && p1.y > y
                    && (p1.x - p0.x) * (p.y - p0.y) > (p.x - p0.x) * (p1.y - p0.y)
            })
            .count();
        crossings % 2 != 0
    }
}
