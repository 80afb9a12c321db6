//! Solid/hole classification of nested contours
//!
//! Contours are visited from the largest absolute area to the smallest.
//! Each one looks back through the contours already placed, most recent
//! first, for one that contains its first point and winds the other way.
//! That contour becomes its parent and the new contour is a hole.

use super::polygon::Polygon;
use tracing::debug;

/// Root contours of a glyph run, each owning the holes it directly contains
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContourForest {
    pub roots: Vec<Polygon>,
}

impl ContourForest {
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of holes across all roots
    pub fn hole_count(&self) -> usize {
        self.roots.iter().map(|root| root.children.len()).sum()
    }
}

/// Where a contour ended up after classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Root,
    HoleOf(usize),
}

/// Build a contour forest from closed contours
///
/// A contour whose nearest opposite-winding container is itself a hole is
/// an island inside a counter (e.g. the inner bowl of a registered sign).
/// Holes only hold one level, so such a contour is promoted to a root; it
/// sorts after the contour whose hole it sits in and is painted on top.
pub fn classify(mut polygons: Vec<Polygon>) -> ContourForest {
    polygons.sort_by(|a, b| b.area.abs().total_cmp(&a.area.abs()));

    let mut placements: Vec<Placement> = Vec::with_capacity(polygons.len());
    for (i, polygon) in polygons.iter().enumerate() {
        let parent = polygon.first_point().and_then(|first| {
            (0..i).rev().find(|&j| {
                let candidate = &polygons[j];
                polygon.area * candidate.area < 0.0 && candidate.contains(first)
            })
        });

        let placement = match parent {
            Some(j) if placements[j] == Placement::Root => Placement::HoleOf(j),
            Some(j) => {
                debug!("Contour {} lies inside hole {}, promoting to root", i, j);
                Placement::Root
            }
            None => Placement::Root,
        };
        placements.push(placement);
    }

    let mut holes: Vec<Vec<usize>> = vec![Vec::new(); polygons.len()];
    for (i, placement) in placements.iter().enumerate() {
        if let Placement::HoleOf(parent) = placement {
            holes[*parent].push(i);
        }
    }

    let mut slots: Vec<Option<Polygon>> = polygons.into_iter().map(Some).collect();
    let mut roots = Vec::new();
    for (i, placement) in placements.iter().enumerate() {
        if *placement != Placement::Root {
            continue;
        }
        let Some(mut root) = slots[i].take() else {
            continue;
        };
        root.children
            .extend(holes[i].iter().filter_map(|&h| slots[h].take()));
        roots.push(root);
    }

    debug!(
        "Classified contours into {} roots with {} holes",
        roots.len(),
        roots.iter().map(|r| r.children.len()).sum::<usize>()
    );
    ContourForest { roots }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    /// Axis-aligned rectangle, counter-clockwise in a y-up frame when `ccw`
    fn rect(x0: f64, y0: f64, x1: f64, y1: f64, ccw: bool) -> Polygon {
        let mut corners = vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ];
        if !ccw {
            corners.reverse();
        }
        let mut polygon = Polygon::new();
        for corner in corners {
            polygon.push(corner);
        }
        polygon.close();
        polygon
    }

    #[test]
    fn test_empty_input() {
        let forest = classify(Vec::new());
        assert!(forest.is_empty());
        assert_eq!(forest.hole_count(), 0);
    }

    #[test]
    fn test_opposite_winding_inner_contour_is_hole() {
        let inner = rect(5.0, 5.0, 15.0, 15.0, false);
        let outer = rect(0.0, 0.0, 20.0, 20.0, true);
        // Input order does not matter, area sorting puts the outer first
        let forest = classify(vec![inner.clone(), outer.clone()]);

        assert_eq!(forest.roots.len(), 1);
        assert_eq!(forest.roots[0].points, outer.points);
        assert_eq!(forest.roots[0].children.len(), 1);
        assert_eq!(forest.roots[0].children[0].points, inner.points);
    }

    #[test]
    fn test_same_winding_inner_contour_is_root() {
        let forest = classify(vec![
            rect(0.0, 0.0, 20.0, 20.0, true),
            rect(5.0, 5.0, 15.0, 15.0, true),
        ]);
        assert_eq!(forest.roots.len(), 2);
        assert_eq!(forest.hole_count(), 0);
    }

    #[test]
    fn test_disjoint_contours_are_unrelated() {
        let left = rect(0.0, 0.0, 10.0, 10.0, true);
        let right = rect(20.0, 0.0, 35.0, 10.0, false);
        assert!(!left.contains(right.points[0]));
        assert!(!right.contains(left.points[0]));

        let forest = classify(vec![left, right]);
        assert_eq!(forest.roots.len(), 2);
        assert_eq!(forest.hole_count(), 0);
    }

    #[test]
    fn test_holes_attach_to_their_own_letter() {
        // Two "O"-like shapes side by side
        let forest = classify(vec![
            rect(0.0, 0.0, 20.0, 20.0, true),
            rect(5.0, 5.0, 15.0, 15.0, false),
            rect(30.0, 0.0, 52.0, 20.0, true),
            rect(35.0, 5.0, 47.0, 15.0, false),
        ]);

        assert_eq!(forest.roots.len(), 2);
        for root in &forest.roots {
            assert_eq!(root.children.len(), 1);
            let hole = &root.children[0];
            assert!(root.contains(hole.points[0]));
            assert!(root.area * hole.area < 0.0);
        }
    }

    #[test]
    fn test_multiple_holes_keep_area_order() {
        // An "8"-like shape: one body, two counters
        let forest = classify(vec![
            rect(2.0, 2.0, 8.0, 8.0, false),
            rect(0.0, 0.0, 10.0, 22.0, true),
            rect(2.0, 10.0, 8.0, 20.0, false),
        ]);

        assert_eq!(forest.roots.len(), 1);
        let holes = &forest.roots[0].children;
        assert_eq!(holes.len(), 2);
        assert!(holes[0].area.abs() >= holes[1].area.abs());
    }

    #[test]
    fn test_island_inside_hole_is_promoted_to_root() {
        let forest = classify(vec![
            rect(0.0, 0.0, 30.0, 30.0, true),
            rect(5.0, 5.0, 25.0, 25.0, false),
            rect(10.0, 10.0, 20.0, 20.0, true),
        ]);

        assert_eq!(forest.roots.len(), 2);
        assert_eq!(forest.roots[0].children.len(), 1);
        assert!(forest.roots[1].children.is_empty());
        assert_eq!(forest.roots[1].area, 100.0);
    }

    #[test]
    fn test_hole_attaches_to_most_recently_placed_container() {
        // Both solids contain the hole and wind against it; the smaller
        // one is placed later and wins
        let forest = classify(vec![
            rect(0.0, 0.0, 30.0, 30.0, true),
            rect(5.0, 5.0, 25.0, 25.0, true),
            rect(10.0, 10.0, 20.0, 20.0, false),
        ]);

        assert_eq!(forest.roots.len(), 2);
        assert_eq!(forest.roots[0].area, 900.0);
        assert!(forest.roots[0].children.is_empty());
        assert_eq!(forest.roots[1].area, 400.0);
        assert_eq!(forest.roots[1].children.len(), 1);
        assert_eq!(forest.roots[1].children[0].area, -100.0);
    }
}
