//! Fill compositing
//!
//! A [`Painter`] fills closed outlines onto some surface. Paint calls are
//! recorded into a [`PaintList`] so a render pass stays a pure function and
//! the result can be replayed onto any surface later.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// How a filled outline combines with what is already painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeMode {
    /// Paint over the existing content
    Normal,
    /// Erase the existing content covered by the outline
    Subtractive,
}

/// Something that fills closed polygons
///
/// The outline is closed implicitly: the last point connects back to the first.
pub trait Painter {
    fn fill(&mut self, outline: &[Point], mode: CompositeMode);
}

/// A single recorded fill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintCommand {
    pub mode: CompositeMode,
    pub points: Vec<Point>,
}

/// Ordered fills produced by one render pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaintList {
    pub commands: Vec<PaintCommand>,
}

impl PaintList {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Replay every recorded fill, in order, onto another painter
    pub fn replay(&self, painter: &mut impl Painter) {
        for command in &self.commands {
            painter.fill(&command.points, command.mode);
        }
    }
}

impl Painter for PaintList {
    fn fill(&mut self, outline: &[Point], mode: CompositeMode) {
        self.commands.push(PaintCommand {
            mode,
            points: outline.to_vec(),
        });
    }
}
