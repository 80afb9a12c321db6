//! Render pass
//!
//! One pass runs path flattening, classification, offsetting and painting
//! to completion. Nothing is kept between passes; the contour forest is
//! rebuilt from the provider every time.

use super::paint::{CompositeMode, PaintList, Painter};
use crate::core::errors::RenderError;
use crate::font_source::PathProvider;
use crate::outline::{classify, offset_outline, polygons_from_path, ContourForest, SeamJoin};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const DEFAULT_BOLDNESS: f64 = 0.0;
pub const DEFAULT_SAMPLING: f64 = 1.0;
pub const DEFAULT_FONT_SIZE: f64 = 72.0;
pub const DEFAULT_BASELINE: f64 = 100.0;

/// Tunable parameters of a render pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderParams {
    /// Offset distance along vertex normals; negative values thin the glyphs
    pub boldness: f64,
    /// Grid size used to merge nearby vertices before offsetting
    pub sampling: f64,
    /// Font size in output units per em
    pub font_size: f64,
    /// Vertical position of the baseline on the output surface
    pub baseline: f64,
    pub seam_join: SeamJoin,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            boldness: DEFAULT_BOLDNESS,
            sampling: DEFAULT_SAMPLING,
            font_size: DEFAULT_FONT_SIZE,
            baseline: DEFAULT_BASELINE,
            seam_join: SeamJoin::default(),
        }
    }
}

impl RenderParams {
    pub fn validate(&self) -> Result<(), RenderError> {
        if !self.boldness.is_finite() {
            return Err(RenderError::InvalidParameter(format!(
                "boldness must be finite, got {}",
                self.boldness
            )));
        }
        if !(self.sampling.is_finite() && self.sampling > 0.0) {
            return Err(RenderError::InvalidParameter(format!(
                "sampling resolution must be greater than zero, got {}",
                self.sampling
            )));
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(RenderError::InvalidParameter(format!(
                "font size must be greater than zero, got {}",
                self.font_size
            )));
        }
        if !self.baseline.is_finite() {
            return Err(RenderError::InvalidParameter(format!(
                "baseline must be finite, got {}",
                self.baseline
            )));
        }
        Ok(())
    }
}

/// Outcome of painting a contour forest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Outlines filled, solids and holes
    pub painted: usize,
    /// Contours skipped because they collapsed during deduplication
    pub skipped: usize,
}

/// Paint every root, then its holes subtractively, root by root
///
/// Positive boldness grows solids and shrinks holes whichever way the
/// font winds its outer contours. Degenerate contours are skipped and
/// counted; a skipped root still has its holes painted so they cut into
/// earlier content the same way.
pub fn paint_forest(
    forest: &ContourForest,
    params: &RenderParams,
    painter: &mut impl Painter,
) -> Result<RenderReport, RenderError> {
    let mut report = RenderReport::default();
    for root in &forest.roots {
        // Left-hand normals point into a positively wound contour, so the
        // offset sign follows the root's winding and holes reuse it
        let magnitude = if root.area < 0.0 {
            -params.boldness
        } else {
            params.boldness
        };
        let contours = std::iter::once((root, CompositeMode::Normal)).chain(
            root.children
                .iter()
                .map(|hole| (hole, CompositeMode::Subtractive)),
        );
        for (polygon, mode) in contours {
            match offset_outline(&polygon.points, magnitude, params.sampling, params.seam_join) {
                Ok(outline) => {
                    let outline = outline.translated(params.baseline);
                    painter.fill(&outline.points, mode);
                    report.painted += 1;
                }
                Err(e) if e.is_recoverable() => {
                    warn!("Skipping contour with {} points: {}", polygon.len(), e);
                    report.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
    Ok(report)
}

/// Render a run of text into a list of fills
pub fn render(
    provider: &impl PathProvider,
    text: &str,
    params: &RenderParams,
) -> Result<(PaintList, RenderReport), RenderError> {
    params.validate()?;

    let path = provider.text_path(text, params.font_size);
    let forest = classify(polygons_from_path(&path));

    let mut paint = PaintList::default();
    let report = paint_forest(&forest, params, &mut paint)?;
    debug!(
        "Rendered {:?}: {} roots, {} holes, {} fills, {} skipped",
        text,
        forest.roots.len(),
        forest.hole_count(),
        report.painted,
        report.skipped
    );
    Ok((paint, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::BezPath;

    fn ring_path(_: &str, _: f64) -> BezPath {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((40.0, 0.0));
        path.line_to((40.0, 40.0));
        path.line_to((0.0, 40.0));
        path.close_path();
        path.move_to((10.0, 10.0));
        path.line_to((10.0, 30.0));
        path.line_to((30.0, 30.0));
        path.line_to((30.0, 10.0));
        path.close_path();
        path
    }

    #[test]
    fn test_invalid_params_are_rejected() {
        let bad = [
            RenderParams { sampling: 0.0, ..Default::default() },
            RenderParams { sampling: -2.0, ..Default::default() },
            RenderParams { boldness: f64::NAN, ..Default::default() },
            RenderParams { font_size: 0.0, ..Default::default() },
            RenderParams { baseline: f64::INFINITY, ..Default::default() },
        ];
        for params in bad {
            assert!(matches!(
                render(&ring_path, "O", &params),
                Err(RenderError::InvalidParameter(_))
            ));
        }
        assert!(RenderParams::default().validate().is_ok());
        assert!(RenderParams { boldness: -3.0, ..Default::default() }.validate().is_ok());
    }

    #[test]
    fn test_root_then_hole_order() {
        let (paint, report) = render(&ring_path, "O", &RenderParams::default()).unwrap();
        assert_eq!(report, RenderReport { painted: 2, skipped: 0 });
        assert_eq!(paint.commands[0].mode, CompositeMode::Normal);
        assert_eq!(paint.commands[1].mode, CompositeMode::Subtractive);
    }

    fn x_extent(points: &[kurbo::Point]) -> f64 {
        let min = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        max - min
    }

    #[test]
    fn test_boldness_grows_solids_for_either_winding() {
        let mirrored = |text: &str, size: f64| {
            let mut path = ring_path(text, size);
            path.apply_affine(kurbo::Affine::FLIP_Y);
            path
        };
        let params = RenderParams {
            boldness: 2.0,
            ..Default::default()
        };

        for paint in [
            render(&ring_path, "O", &params).unwrap().0,
            render(&mirrored, "O", &params).unwrap().0,
        ] {
            // 40 wide solid, 20 wide hole
            assert!(x_extent(&paint.commands[0].points) > 42.0);
            assert!(x_extent(&paint.commands[1].points) < 18.0);
        }
    }

    #[test]
    fn test_baseline_translation() {
        let params = RenderParams {
            baseline: 100.0,
            ..Default::default()
        };
        let (paint, _) = render(&ring_path, "O", &params).unwrap();
        // Zero boldness leaves the deduplicated points in place
        assert_eq!(paint.commands[0].points[0], kurbo::Point::new(0.0, 100.0));
    }
}
