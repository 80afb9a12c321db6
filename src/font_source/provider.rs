//! Glyph path providers
//!
//! A provider turns a run of text at a font size into one path made of
//! move/line/quad/cubic/close commands, positioned with the baseline at
//! y = 0 and y growing downward like a raster canvas.

use super::conversions::{component_affine, contours_to_bezpath};
use super::metrics::FontMetrics;
use crate::core::errors::RenderError;
use kurbo::{Affine, BezPath};
use norad::{Font, Glyph};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Components nested deeper than this are assumed to be cyclic
const MAX_COMPONENT_DEPTH: usize = 8;

/// Source of glyph outlines for a run of text
pub trait PathProvider {
    fn text_path(&self, text: &str, size: f64) -> BezPath;

    /// Ascent above and descent below the baseline at `size`, when known
    fn line_extent(&self, _size: f64) -> Option<(f64, f64)> {
        None
    }
}

impl<F> PathProvider for F
where
    F: Fn(&str, f64) -> BezPath,
{
    fn text_path(&self, text: &str, size: f64) -> BezPath {
        self(text, size)
    }
}

/// Path provider backed by a UFO font source
pub struct UfoPathProvider {
    font: Font,
    metrics: FontMetrics,
    char_map: HashMap<char, String>,
}

impl UfoPathProvider {
    /// Load a UFO from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let font = Font::load(path).map_err(|e| RenderError::Resource {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        info!("Loaded font source {:?}", path);
        Ok(Self::from_font(font))
    }

    /// Wrap an already loaded UFO
    pub fn from_font(font: Font) -> Self {
        let metrics = FontMetrics::from_ufo(&font);
        let mut char_map = HashMap::new();
        for glyph in font.default_layer().iter() {
            for codepoint in glyph.codepoints.iter() {
                char_map
                    .entry(codepoint)
                    .or_insert_with(|| glyph.name().to_string());
            }
        }
        debug!(
            "Font has {} mapped characters, {} units per em",
            char_map.len(),
            metrics.units_per_em
        );
        Self {
            font,
            metrics,
            char_map,
        }
    }

    fn glyph_for_char(&self, c: char) -> Option<&Glyph> {
        let name = self.char_map.get(&c)?;
        self.font.default_layer().get_glyph(name)
    }

    /// Glyph outline in design units, components resolved
    fn glyph_path(&self, glyph: &Glyph, depth: usize) -> BezPath {
        let mut path = contours_to_bezpath(&glyph.contours);
        if depth >= MAX_COMPONENT_DEPTH {
            warn!(
                "Component nesting too deep in glyph '{}', ignoring components",
                glyph.name()
            );
            return path;
        }

        let layer = self.font.default_layer();
        for component in &glyph.components {
            let base_name = component.base.to_string();
            let Some(base) = layer.get_glyph(&base_name) else {
                warn!(
                    "Glyph '{}' references missing component '{}'",
                    glyph.name(),
                    base_name
                );
                continue;
            };
            let mut component_path = self.glyph_path(base, depth + 1);
            component_path.apply_affine(component_affine(&component.transform));
            path.extend(component_path);
        }
        path
    }
}

impl PathProvider for UfoPathProvider {
    fn text_path(&self, text: &str, size: f64) -> BezPath {
        let scale = self.metrics.scale_for_size(size);
        let mut path = BezPath::new();
        let mut pen_x = 0.0;

        for c in text.chars() {
            let Some(glyph) = self.glyph_for_char(c) else {
                debug!("No glyph for {:?}, skipping", c);
                continue;
            };
            let mut glyph_path = self.glyph_path(glyph, 0);
            // Design space is y-up, the canvas is y-down
            glyph_path.apply_affine(Affine::new([scale, 0.0, 0.0, -scale, pen_x * scale, 0.0]));
            path.extend(glyph_path);
            pen_x += glyph.width;
        }
        path
    }

    fn line_extent(&self, size: f64) -> Option<(f64, f64)> {
        Some(self.metrics.line_extent(size))
    }
}
