use super::Renderable;
use crate::surface::Surface;
use crate::{LayoutError, Pos, Size};

/// A single line of text.
///
/// A label never caches its metrics: every call to [Renderable::size] or
/// [Renderable::render] measures the text again with the surface's current font, so
/// changing the font between calls is always reflected.
///
/// The surface must have a font configured before a label is sized or rendered;
/// otherwise both operations fail with [LayoutError::NoFont].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    text: String,
}

impl Label {
    pub fn new<S: Into<String>>(text: S) -> Label {
        Label { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Renderable for Label {
    /// `advance_width` wide and `ascent + descent` tall
    fn size(&self, surface: &dyn Surface) -> Result<Size, LayoutError> {
        let metrics = surface.measure(&self.text)?;
        Size::new(metrics.advance_width, metrics.height())
    }

    /// Draws the text with its left edge at `origin.x` and its baseline at
    /// `origin.y + ascent`
    fn render(&self, surface: &mut dyn Surface, origin: Pos) -> Result<(), LayoutError> {
        let metrics = surface.measure(&self.text)?;
        surface.fill_text(&self.text, Pos::new(origin.x, origin.y + metrics.ascent))
    }
}
