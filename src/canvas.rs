//! A [Surface] that draws into a PDF content stream.
//!
//! Layout happens in surface coordinates (top-left origin, y down) while PDF
//! places its origin at the bottom-left with y going up, so the canvas flips
//! every y-coordinate against its height. Text is written with 2-byte glyph ids
//! (the `Identity-H` encoding) and fonts are referred to by the resource names
//! `/F0`, `/F1`, ... matching their index in the font arena; embedding the fonts
//! under those names is up to whoever assembles the final document.

use crate::colour::Style;
use crate::font::Font;
use crate::surface::{Surface, TextMeasure, TextMetrics};
use crate::{LayoutError, Pos, Pt, Size};
use id_arena::{Arena, Id};
use pdf_writer::{Content, Name, Str};

/// The font configuration of a [PdfCanvas]: which font, and at what size
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

pub struct PdfCanvas<'a> {
    fonts: &'a Arena<Font>,
    /// The height of the drawing area, used to flip y-coordinates
    height: Pt,
    font: Option<SpanFont>,
    style: Style,
    content: Content,
}

impl<'a> PdfCanvas<'a> {
    /// Create an empty canvas `height` points tall that draws text with fonts from `fonts`
    pub fn new(fonts: &'a Arena<Font>, height: Pt) -> PdfCanvas<'a> {
        PdfCanvas {
            fonts,
            height,
            font: None,
            style: Style::default(),
            content: Content::new(),
        }
    }

    /// Select the font and size used to measure and draw all subsequent text
    pub fn set_font(&mut self, id: Id<Font>, size: Pt) {
        self.font = Some(SpanFont { id, size });
    }

    pub fn clear_font(&mut self) {
        self.font = None;
    }

    pub fn font(&self) -> Option<SpanFont> {
        self.font
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Finish drawing, returning the raw content stream operators
    pub fn finish(self) -> Vec<u8> {
        self.content.finish()
    }

    fn current_font(&self) -> Result<(&'a Font, SpanFont), LayoutError> {
        let span_font = self.font.ok_or(LayoutError::NoFont)?;
        let font = self
            .fonts
            .get(span_font.id)
            .ok_or(LayoutError::UnknownFont)?;
        Ok((font, span_font))
    }

    fn flip(&self, y: Pt) -> Pt {
        self.height - y
    }
}

impl TextMeasure for PdfCanvas<'_> {
    fn measure(&self, text: &str) -> Result<TextMetrics, LayoutError> {
        let (font, span_font) = self.current_font()?;
        Ok(font.metrics(text, span_font.size))
    }
}

impl Surface for PdfCanvas<'_> {
    fn fill_text(&mut self, text: &str, baseline: Pos) -> Result<(), LayoutError> {
        let (font, span_font) = self.current_font()?;

        // characters the font can't draw at all are dropped, same as when measuring
        let mut glyphs: Vec<u8> = Vec::with_capacity(text.len() * 2);
        for gid in text.chars().filter_map(|ch| font.glyph_or_replacement(ch)) {
            glyphs.extend_from_slice(&gid.to_be_bytes());
        }

        log::trace!(
            "fill_text {text:?} with F{} at {}, {}",
            span_font.id.index(),
            baseline.x,
            baseline.y
        );

        let name = format!("F{}", span_font.id.index());
        let y = self.flip(baseline.y);
        self.content.save_state();
        self.style.fill.apply_fill(&mut self.content);
        self.content.begin_text();
        self.content.set_font(Name(name.as_bytes()), *span_font.size);
        self.content.next_line(*baseline.x, *y);
        self.content.show(Str(glyphs.as_slice()));
        self.content.end_text();
        self.content.restore_state();
        Ok(())
    }

    fn stroke_rect(&mut self, origin: Pos, size: Size) -> Result<(), LayoutError> {
        log::trace!(
            "stroke_rect at {}, {} ({} x {})",
            origin.x,
            origin.y,
            size.w(),
            size.h()
        );

        // the bottom edge of the rectangle becomes its PDF origin
        let y = self.flip(origin.y + size.h());
        self.content.save_state();
        self.style.stroke.apply_stroke(&mut self.content);
        self.content.set_line_width(*self.style.line_width);
        self.content.rect(*origin.x, *y, *size.w(), *size.h());
        self.content.stroke();
        self.content.restore_state();
        Ok(())
    }

    fn clear(&mut self) {
        log::debug!("discarding canvas content");
        self.content = Content::new();
    }
}
