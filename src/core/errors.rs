//! Error types for the emboldening pipeline
//!
//! Geometry errors are recovered where they occur (a degenerate contour is
//! skipped and the rest of the glyph run still renders). Resource and
//! parameter errors are surfaced to the caller.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The font source could not be loaded
    #[error("Font could not be loaded from {path}: {message}")]
    Resource { path: PathBuf, message: String },

    /// A contour collapsed to fewer than two points after deduplication
    #[error("Degenerate contour: {points} point(s) left after deduplication")]
    DegenerateContour { points: usize },

    /// A tunable parameter is out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl RenderError {
    /// Whether the error only affects a single contour
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RenderError::DegenerateContour { .. })
    }
}
