//! UFO outline conversion
//!
//! Converts norad contours and component transforms into kurbo paths. The
//! resulting paths are the move/line/quad/cubic/close command stream the
//! outline module consumes.

use kurbo::{Affine, BezPath, Point};
use norad::{Contour, ContourPoint, PointType};

fn kurbo_point(point: &ContourPoint) -> Point {
    Point::new(point.x, point.y)
}

fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Convert a norad component transform into a kurbo affine
pub fn component_affine(transform: &norad::AffineTransform) -> Affine {
    Affine::new([
        transform.x_scale,
        transform.xy_scale,
        transform.yx_scale,
        transform.y_scale,
        transform.x_offset,
        transform.y_offset,
    ])
}

/// Emit the segment ending at an on-curve point, consuming pending off-curves
fn push_segment(path: &mut BezPath, pending: &mut Vec<Point>, typ: &PointType, end: Point) {
    match typ {
        PointType::Curve => match pending.as_slice() {
            [] => path.line_to(end),
            [cp] => path.quad_to(*cp, end),
            [.., cp1, cp2] => path.curve_to(*cp1, *cp2, end),
        },
        PointType::QCurve => push_qcurve(path, pending, end),
        _ => path.line_to(end),
    }
    pending.clear();
}

/// TrueType-style quadratic run: consecutive off-curves imply on-curve
/// points halfway between them
fn push_qcurve(path: &mut BezPath, pending: &[Point], end: Point) {
    if pending.is_empty() {
        path.line_to(end);
        return;
    }
    for (i, &cp) in pending.iter().enumerate() {
        let seg_end = pending.get(i + 1).map_or(end, |&next| midpoint(cp, next));
        path.quad_to(cp, seg_end);
    }
}

/// Closed contour made only of off-curve points
fn all_off_curve_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let n = points.len();
    path.move_to(midpoint(points[n - 1], points[0]));
    for i in 0..n {
        let next = points[(i + 1) % n];
        path.quad_to(points[i], midpoint(points[i], next));
    }
    path.close_path();
    path
}

/// Convert a UFO contour to a kurbo path
///
/// The path starts at the first on-curve point. Closed contours get the
/// wrap-around segment back to that point and a `ClosePath`; open contours
/// (starting with a `move` point) do not. Returns `None` for an empty contour.
pub fn contour_to_bezpath(contour: &Contour) -> Option<BezPath> {
    let points = &contour.points;
    if points.is_empty() {
        return None;
    }

    let Some(start) = points.iter().position(|p| p.typ != PointType::OffCurve) else {
        let off_curves: Vec<Point> = points.iter().map(kurbo_point).collect();
        return Some(all_off_curve_path(&off_curves));
    };

    let first = &points[start];
    let is_open = first.typ == PointType::Move;
    let rotated = points[start + 1..].iter().chain(&points[..start]);

    let mut path = BezPath::new();
    let mut pending: Vec<Point> = Vec::new();
    path.move_to(kurbo_point(first));

    for point in rotated {
        match point.typ {
            PointType::OffCurve => pending.push(kurbo_point(point)),
            ref typ => push_segment(&mut path, &mut pending, typ, kurbo_point(point)),
        }
    }

    if !is_open {
        push_segment(&mut path, &mut pending, &first.typ, kurbo_point(first));
        path.close_path();
    }
    Some(path)
}

/// Convert every contour of a glyph into one path, subpath per contour
pub fn contours_to_bezpath(contours: &[Contour]) -> BezPath {
    let mut path = BezPath::new();
    for subpath in contours.iter().filter_map(contour_to_bezpath) {
        path.extend(subpath);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    fn contour(points: &[(f64, f64, PointType)]) -> Contour {
        let points = points
            .iter()
            .map(|(x, y, typ)| ContourPoint::new(*x, *y, typ.clone(), false, None, None))
            .collect();
        Contour::new(points, None)
    }

    #[test]
    fn test_line_contour() {
        let path = contour_to_bezpath(&contour(&[
            (0.0, 0.0, PointType::Line),
            (100.0, 0.0, PointType::Line),
            (100.0, 100.0, PointType::Line),
        ]))
        .unwrap();

        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(100.0, 0.0)),
                PathEl::LineTo(Point::new(100.0, 100.0)),
                PathEl::LineTo(Point::new(0.0, 0.0)),
                PathEl::ClosePath,
            ]
        );
    }

    #[test]
    fn test_cubic_wraps_to_first_point() {
        // Starts with off-curves, so the path begins at the first curve point
        let path = contour_to_bezpath(&contour(&[
            (0.0, 50.0, PointType::OffCurve),
            (50.0, 100.0, PointType::OffCurve),
            (100.0, 100.0, PointType::Curve),
            (100.0, 0.0, PointType::Line),
        ]))
        .unwrap();

        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Point::new(100.0, 100.0)),
                PathEl::LineTo(Point::new(100.0, 0.0)),
                PathEl::CurveTo(
                    Point::new(0.0, 50.0),
                    Point::new(50.0, 100.0),
                    Point::new(100.0, 100.0)
                ),
                PathEl::ClosePath,
            ]
        );
    }

    #[test]
    fn test_qcurve_implied_points() {
        let path = contour_to_bezpath(&contour(&[
            (0.0, 0.0, PointType::QCurve),
            (0.0, 100.0, PointType::OffCurve),
            (100.0, 100.0, PointType::OffCurve),
            (100.0, 0.0, PointType::QCurve),
        ]))
        .unwrap();

        let elements = path.elements();
        assert_eq!(
            elements[1],
            PathEl::QuadTo(Point::new(0.0, 100.0), Point::new(50.0, 100.0))
        );
        assert_eq!(
            elements[2],
            PathEl::QuadTo(Point::new(100.0, 100.0), Point::new(100.0, 0.0))
        );
        // Wrap-around segment with no off-curves is a straight line
        assert_eq!(elements[3], PathEl::LineTo(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_open_contour_is_not_closed() {
        let path = contour_to_bezpath(&contour(&[
            (0.0, 0.0, PointType::Move),
            (10.0, 0.0, PointType::Line),
        ]))
        .unwrap();
        assert!(!path.elements().contains(&PathEl::ClosePath));
    }

    #[test]
    fn test_all_off_curve_contour() {
        let path = contour_to_bezpath(&contour(&[
            (0.0, 0.0, PointType::OffCurve),
            (100.0, 0.0, PointType::OffCurve),
            (100.0, 100.0, PointType::OffCurve),
            (0.0, 100.0, PointType::OffCurve),
        ]))
        .unwrap();

        let elements = path.elements();
        assert_eq!(elements[0], PathEl::MoveTo(Point::new(0.0, 50.0)));
        assert_eq!(elements.len(), 6);
        assert_eq!(elements[5], PathEl::ClosePath);
    }

    #[test]
    fn test_empty_contour() {
        assert!(contour_to_bezpath(&contour(&[])).is_none());
    }

    #[test]
    fn test_component_affine() {
        let transform = norad::AffineTransform {
            x_scale: 1.0,
            xy_scale: 0.0,
            yx_scale: 0.0,
            y_scale: 1.0,
            x_offset: 50.0,
            y_offset: 25.0,
        };
        let affine = component_affine(&transform);
        assert_eq!(affine * Point::new(10.0, 10.0), Point::new(60.0, 35.0));
    }
}
