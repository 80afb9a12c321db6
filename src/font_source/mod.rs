//! Font source data and glyph path extraction
//!
//! This module loads UFO font sources or compiled TrueType/OpenType fonts
//! and turns text into glyph outline paths for the outline pipeline.

pub mod conversions;
pub mod metrics;
pub mod opentype;
pub mod provider;

// Explicit re-exports for public API
pub use metrics::FontMetrics;
pub use opentype::{is_compiled_font, OpenTypePathProvider};
pub use provider::{PathProvider, UfoPathProvider};
