//! Compiled font (TrueType/OpenType) path provider
//!
//! Outlines are scaled by skrifa, unhinted at the default location, and
//! drawn through a pen straight into a kurbo path.

use super::provider::PathProvider;
use crate::core::errors::RenderError;
use kurbo::{Affine, BezPath, Point};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::instance::{LocationRef, Size};
use skrifa::raw::FontRef;
use skrifa::MetadataProvider;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// File extensions read as compiled fonts rather than UFO sources
const COMPILED_FONT_EXTENSIONS: [&str; 4] = ["ttf", "otf", "ttc", "otc"];

/// Whether `path` names a compiled font file
pub fn is_compiled_font(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            COMPILED_FONT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Collects pen commands into a `BezPath`
#[derive(Debug, Default)]
pub(crate) struct BezPathPen {
    pub(crate) path: BezPath,
}

fn kurbo_point(x: f32, y: f32) -> Point {
    Point::new(x as f64, y as f64)
}

impl OutlinePen for BezPathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to(kurbo_point(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to(kurbo_point(x, y));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.path.quad_to(kurbo_point(cx0, cy0), kurbo_point(x, y));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.path.curve_to(
            kurbo_point(cx0, cy0),
            kurbo_point(cx1, cy1),
            kurbo_point(x, y),
        );
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

/// Path provider backed by a TrueType/OpenType font file
///
/// Only the bytes are stored; the borrowed font view is rebuilt per call.
/// Collections use their first face.
pub struct OpenTypePathProvider {
    data: Vec<u8>,
}

impl OpenTypePathProvider {
    /// Read and parse a font file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let resource_error = |message: String| RenderError::Resource {
            path: path.to_path_buf(),
            message,
        };
        let data = fs::read(path).map_err(|e| resource_error(e.to_string()))?;
        let provider = Self::from_data(data).map_err(resource_error)?;
        info!("Loaded compiled font {:?}", path);
        Ok(provider)
    }

    /// Wrap font bytes, checking that they parse
    pub fn from_data(data: Vec<u8>) -> Result<Self, String> {
        FontRef::from_index(&data, 0).map_err(|e| format!("Not a usable font file: {e}"))?;
        Ok(Self { data })
    }

    fn font(&self) -> Option<FontRef<'_>> {
        FontRef::from_index(&self.data, 0).ok()
    }
}

impl PathProvider for OpenTypePathProvider {
    fn text_path(&self, text: &str, size: f64) -> BezPath {
        let mut path = BezPath::new();
        let Some(font) = self.font() else {
            return path;
        };
        let size = Size::new(size as f32);
        let location = LocationRef::default();
        let charmap = font.charmap();
        let glyph_metrics = font.glyph_metrics(size, location);
        let outlines = font.outline_glyphs();
        let mut pen_x = 0.0;

        for c in text.chars() {
            let Some(glyph_id) = charmap.map(c) else {
                debug!("No glyph for {:?}, skipping", c);
                continue;
            };
            if let Some(outline) = outlines.get(glyph_id) {
                let mut pen = BezPathPen::default();
                match outline.draw(DrawSettings::unhinted(size, location), &mut pen) {
                    // Font space is y-up, the canvas is y-down
                    Ok(_) => {
                        let mut glyph_path = pen.path;
                        glyph_path.apply_affine(Affine::translate((pen_x, 0.0)) * Affine::FLIP_Y);
                        path.extend(glyph_path);
                    }
                    Err(e) => warn!("Failed to draw glyph for {:?}: {}", c, e),
                }
            }
            pen_x += glyph_metrics.advance_width(glyph_id).unwrap_or_default() as f64;
        }
        path
    }

    fn line_extent(&self, size: f64) -> Option<(f64, f64)> {
        let metrics = self
            .font()?
            .metrics(Size::new(size as f32), LocationRef::default());
        Some((metrics.ascent as f64, metrics.descent as f64))
    }
}
