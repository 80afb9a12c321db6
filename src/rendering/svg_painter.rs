//! SVG output surface
//!
//! Normal fills become `<path>` elements. A subtractive fill erases
//! everything painted before it, so it becomes a mask wrapped around all
//! of the content so far. Consecutive subtractive fills share one mask.

use super::paint::{CompositeMode, Painter};
use kurbo::{Point, Rect};
use svg::node::element::{Definitions, Group, Mask, Path, Rectangle};
use svg::{Document, Node};
use tracing::warn;

const DEFAULT_FILL: &str = "black";

pub struct SvgPainter {
    view_box: Rect,
    fill: String,
    masks: Vec<Mask>,
    content: Group,
    pending_holes: Vec<String>,
}

impl SvgPainter {
    /// Surface covering `view_box` in canvas coordinates
    pub fn new(view_box: Rect) -> Self {
        Self {
            view_box,
            fill: DEFAULT_FILL.to_string(),
            masks: Vec::new(),
            content: Group::new(),
            pending_holes: Vec::new(),
        }
    }

    /// Fill colour used for solid outlines
    ///
    /// Accepts colour keywords, hex colours and functional notations such
    /// as `rgb(0, 0, 0)`; anything else keeps the default.
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        let fill = fill.into();
        if is_paint_value(&fill) {
            self.fill = fill;
        } else {
            warn!("Ignoring invalid fill colour {:?}", fill);
        }
        self
    }

    fn path_data(outline: &[Point]) -> String {
        let mut data = outline
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let command = if i == 0 { 'M' } else { 'L' };
                format!("{command}{:.3},{:.3}", p.x, p.y)
            })
            .collect::<Vec<_>>()
            .join(" ");
        data.push_str(" Z");
        data
    }

    /// Wrap the content painted so far in a mask cutting out pending holes
    fn flush_holes(&mut self) {
        if self.pending_holes.is_empty() {
            return;
        }
        let id = format!("hole-mask-{}", self.masks.len() + 1);
        let vb = self.view_box;
        let mut mask = Mask::new()
            .set("id", id.as_str())
            .set("maskUnits", "userSpaceOnUse")
            .set("x", vb.x0)
            .set("y", vb.y0)
            .set("width", vb.width())
            .set("height", vb.height())
            .add(
                Rectangle::new()
                    .set("x", vb.x0)
                    .set("y", vb.y0)
                    .set("width", vb.width())
                    .set("height", vb.height())
                    .set("fill", "white"),
            );
        for hole in self.pending_holes.drain(..) {
            mask = mask.add(Path::new().set("d", hole).set("fill", "black"));
        }
        self.masks.push(mask);

        let painted = std::mem::replace(&mut self.content, Group::new());
        self.content = Group::new()
            .set("mask", format!("url(#{id})"))
            .add(painted);
    }

    /// Finish the document
    pub fn finish(mut self) -> String {
        self.flush_holes();
        let vb = self.view_box;
        let mut document = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set(
                "viewBox",
                format!("{} {} {} {}", vb.x0, vb.y0, vb.width(), vb.height()),
            )
            .set("width", vb.width())
            .set("height", vb.height());

        if !self.masks.is_empty() {
            let mut defs = Definitions::new();
            for mask in self.masks {
                defs = defs.add(mask);
            }
            document = document.add(defs);
        }

        let document = document.add(Group::new().set("fill", self.fill).add(self.content));
        format!("{document}\n")
    }
}

impl Painter for SvgPainter {
    fn fill(&mut self, outline: &[Point], mode: CompositeMode) {
        if outline.is_empty() {
            return;
        }
        let data = Self::path_data(outline);
        match mode {
            CompositeMode::Normal => {
                self.flush_holes();
                self.content.append(Path::new().set("d", data));
            }
            CompositeMode::Subtractive => self.pending_holes.push(data),
        }
    }
}

/// A colour keyword, hex colour or functional colour notation
fn is_paint_value(value: &str) -> bool {
    !value.trim().is_empty()
        && value.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' ' | '-')
        })
}
