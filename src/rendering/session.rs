//! Repeated render passes over one font
//!
//! The session owns the font resource, loaded once and shared read-only by
//! every pass, and remembers the last successful render. Passes take
//! `&mut self`, so two of them can never interleave on the same session.

use super::paint::PaintList;
use super::pipeline::{render, RenderParams, RenderReport};
use crate::core::errors::RenderError;
use crate::font_source::PathProvider;
use tracing::warn;

pub struct RenderSession<P> {
    provider: P,
    last_valid: Option<PaintList>,
}

impl<P: PathProvider> RenderSession<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            last_valid: None,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The most recent successful render, if any
    pub fn last_valid(&self) -> Option<&PaintList> {
        self.last_valid.as_ref()
    }

    /// Run a render pass
    ///
    /// Invalid parameters keep the previous render on screen: the error is
    /// logged and the last valid paint list is returned instead (empty if
    /// there has not been one yet).
    pub fn update(&mut self, text: &str, params: &RenderParams) -> &PaintList {
        match render(&self.provider, text, params) {
            Ok((paint, _)) => {
                self.last_valid = Some(paint);
            }
            Err(e @ RenderError::InvalidParameter(_)) => {
                warn!("{}, keeping previous render", e);
            }
            Err(e) => {
                warn!("Render failed: {}", e);
            }
        }
        self.last_valid.get_or_insert_with(PaintList::default)
    }

    /// Run a render pass, surfacing errors and the per-pass report
    pub fn try_update(
        &mut self,
        text: &str,
        params: &RenderParams,
    ) -> Result<(&PaintList, RenderReport), RenderError> {
        let (paint, report) = render(&self.provider, text, params)?;
        let paint: &PaintList = self.last_valid.insert(paint);
        Ok((paint, report))
    }
}
