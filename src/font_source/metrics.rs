//! Font metrics and measurement data
//!
//! Vertical metrics read from a UFO's fontinfo, used to scale design units
//! to the requested font size and to fit the output canvas to a line.

use norad::Font;

/// Units per em assumed when a font does not declare one
pub const DEFAULT_UNITS_PER_EM: f64 = 1000.0;

/// Font metrics for scaling and positioning
#[derive(Debug, Clone, PartialEq)]
pub struct FontMetrics {
    pub units_per_em: f64,
    pub ascender: f64,
    pub descender: f64,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::from_units_per_em(DEFAULT_UNITS_PER_EM)
    }
}

impl FontMetrics {
    /// Metrics derived only from the em size, using the usual 80/20 split
    pub fn from_units_per_em(units_per_em: f64) -> Self {
        Self {
            units_per_em,
            ascender: units_per_em * 0.8,
            descender: -(units_per_em * 0.2),
        }
    }

    /// Extract metrics from a UFO
    pub fn from_ufo(ufo: &Font) -> Self {
        let font_info = &ufo.font_info;

        let units_per_em = font_info
            .units_per_em
            .and_then(|v| v.to_string().parse::<f64>().ok())
            .filter(|upm| *upm > 0.0)
            .unwrap_or(DEFAULT_UNITS_PER_EM);

        // Fall back to UPM-based values if the font leaves them out
        let defaults = Self::from_units_per_em(units_per_em);
        Self {
            units_per_em,
            ascender: font_info.ascender.unwrap_or(defaults.ascender),
            descender: font_info.descender.unwrap_or(defaults.descender),
        }
    }

    /// Scale factor from design units to the given font size
    pub fn scale_for_size(&self, size: f64) -> f64 {
        size / self.units_per_em
    }

    /// Ascender and descender at the given font size
    pub fn line_extent(&self, size: f64) -> (f64, f64) {
        let scale = self.scale_for_size(size);
        (self.ascender * scale, self.descender * scale)
    }
}
