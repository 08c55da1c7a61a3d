//! The capabilities a host drawing surface provides to the layout types.
//!
//! A surface has two roles: it measures text under its current font
//! configuration ([TextMeasure]) and it draws ([Surface]). Coordinates are
//! surface coordinates, see [crate::geometry].

use crate::{LayoutError, Pos, Pt, Size};

/// Line and advance metrics for a run of text under a particular font configuration
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct TextMetrics {
    /// How far the pen moves horizontally after drawing the text
    pub advance_width: Pt,
    /// Distance from the baseline up to the top of the font's bounding box
    pub ascent: Pt,
    /// Distance from the baseline down to the bottom of the font's bounding box
    pub descent: Pt,
}

impl TextMetrics {
    /// The height of a line of text: `ascent + descent`
    pub fn height(&self) -> Pt {
        self.ascent + self.descent
    }
}

/// Something that can measure text. Surfaces measure with whatever font they
/// currently have configured, and fail with [LayoutError::NoFont] if they have none.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> Result<TextMetrics, LayoutError>;
}

/// A drawing surface that renderable elements draw themselves onto
pub trait Surface: TextMeasure {
    /// Draw `text` with the left end of its baseline at `baseline`
    fn fill_text(&mut self, text: &str, baseline: Pos) -> Result<(), LayoutError>;

    /// Draw the unfilled outline of a rectangle whose top-left corner is at `origin`
    fn stroke_rect(&mut self, origin: Pos, size: Size) -> Result<(), LayoutError>;

    /// Erase everything drawn so far
    fn clear(&mut self);
}

/// Fixed-pitch metrics: every character advances by the same amount and every line
/// has the same ascent and descent. Useful for terminal-like hosts and anywhere
/// a real font isn't available.
///
/// ```
/// use canvas_layout::{Monospace, Pt, TextMeasure};
///
/// let metrics = Monospace::new(Pt(24.0), Pt(10.0), Pt(3.0)).measure("Hello").unwrap();
/// assert_eq!(metrics.advance_width, Pt(120.0));
/// assert_eq!(metrics.height(), Pt(13.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Monospace {
    pub advance: Pt,
    pub ascent: Pt,
    pub descent: Pt,
}

impl Monospace {
    pub fn new(advance: Pt, ascent: Pt, descent: Pt) -> Monospace {
        Monospace {
            advance,
            ascent,
            descent,
        }
    }
}

impl TextMeasure for Monospace {
    fn measure(&self, text: &str) -> Result<TextMetrics, LayoutError> {
        Ok(TextMetrics {
            advance_width: self.advance * text.chars().count() as f32,
            ascent: self.ascent,
            descent: self.descent,
        })
    }
}
