//! Rendering and compositing
//!
//! This module turns contour forests into fills:
//! - The render pass (flatten, classify, offset, paint)
//! - Painter abstraction and recorded paint lists
//! - SVG output surface
//! - Render sessions that keep the last valid result

pub mod paint;
pub mod pipeline;
pub mod session;
pub mod svg_painter;

// Re-export commonly used items
pub use paint::{CompositeMode, PaintCommand, PaintList, Painter};
pub use pipeline::{paint_forest, render, RenderParams, RenderReport};
pub use session::RenderSession;
pub use svg_painter::SvgPainter;
