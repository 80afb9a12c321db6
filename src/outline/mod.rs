//! Glyph outline geometry
//!
//! Turns font path commands into closed polygons, sorts them into solids
//! and holes, and computes the offset outlines used for emboldening.

pub mod classify;
pub mod offset;
pub mod polygon;
pub mod tessellate;

pub use classify::{classify, ContourForest};
pub use offset::{
    dedup_points, offset_outline, vertex_normals, OffsetOutline, SeamJoin, VertexNormal,
};
pub use polygon::Polygon;

use kurbo::{BezPath, PathEl};
use tracing::debug;

/// Flatten a path into one closed polygon per subpath
///
/// Every `MoveTo` starts a new contour. A subpath that is never explicitly
/// closed is closed when the next one starts or the path ends. Contours with
/// fewer than two points carry no area and are dropped.
pub fn polygons_from_path(path: &BezPath) -> Vec<Polygon> {
    let mut polygons = Vec::new();
    let mut current: Option<Polygon> = None;

    for el in path.elements() {
        // Drawing after ClosePath continues from the start of the closed subpath
        if !matches!(el, PathEl::MoveTo(_) | PathEl::ClosePath) {
            let restart = current
                .as_ref()
                .filter(|p| p.is_closed())
                .and_then(Polygon::first_point);
            if let Some(start) = restart {
                finish(&mut polygons, current.replace(Polygon::starting_at(start)));
            }
        }

        if let PathEl::MoveTo(p) = *el {
            finish(&mut polygons, current.replace(Polygon::starting_at(p)));
            continue;
        }
        // kurbo paths always begin with a MoveTo
        let Some(polygon) = current.as_mut() else {
            continue;
        };
        match *el {
            PathEl::LineTo(p) => polygon.push(p),
            PathEl::QuadTo(control, p) => polygon.conic_to(p, control),
            PathEl::CurveTo(control1, control2, p) => polygon.cubic_to(p, control1, control2),
            PathEl::ClosePath => polygon.close(),
            PathEl::MoveTo(_) => {}
        }
    }
    finish(&mut polygons, current);

    debug!("Flattened path into {} contours", polygons.len());
    polygons
}

fn finish(polygons: &mut Vec<Polygon>, polygon: Option<Polygon>) {
    let Some(mut polygon) = polygon else {
        return;
    };
    polygon.close();
    if polygon.len() < 2 {
        debug!("Dropping contour with {} points", polygon.len());
        return;
    }
    polygons.push(polygon);
}
