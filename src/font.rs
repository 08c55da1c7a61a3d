use crate::{surface::TextMeasure, LayoutError, Pt, TextMetrics};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::path::Path;

/// A parsed font object. Fonts can be TTF or OTF fonts. All metrics are reported in
/// [Pt] for a requested font size, scaled from the font's design units.
///
/// Typically, fonts are referred to throughout user applications by their _id_ within
/// an [id_arena::Arena], which is also how a [PdfCanvas](crate::PdfCanvas) looks them up
pub struct Font {
    pub face: OwnedFace,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("units_per_em", &self.face.as_face_ref().units_per_em())
            .field("glyphs", &self.face.as_face_ref().number_of_glyphs())
            .finish()
    }
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, LayoutError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        log::debug!(
            "loaded font with {} glyphs",
            face.as_face_ref().number_of_glyphs()
        );

        Ok(Font { face })
    }

    /// Read and parse a font file from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Font, LayoutError> {
        let bytes = std::fs::read(path.as_ref())?;
        log::debug!("read {} bytes from {}", bytes.len(), path.as_ref().display());
        Font::load(bytes)
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given
    /// font size. Unlike the raw font tables, this is reported as a positive distance below the
    /// baseline, the way canvas text metrics report it
    pub fn descent(&self, size: Pt) -> Pt {
        -(self.scaling(size) * self.face.as_face_ref().descender() as f32)
    }

    /// Calculate the leading (extra space between lines) for the given font size
    pub fn leading(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().line_gap() as f32
    }

    /// Calculate the default line height of the font for the given size. The returned value is
    /// how much to vertically offset a second row of text below a first row of text.
    pub fn line_height(&self, size: Pt) -> Pt {
        self.leading(size) + self.ascent(size) + self.descent(size)
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.face.as_face_ref().glyph_index('\u{FFFD}').map(|i| i.0)
    }

    /// The glyph used to draw `ch`: its own glyph if the font has one, otherwise the
    /// replacement character, otherwise a question mark. [None] if the font has none of these
    pub fn glyph_or_replacement(&self, ch: char) -> Option<u16> {
        self.glyph_id(ch)
            .or_else(|| self.replacement_glyph_id())
            .or_else(|| self.glyph_id('?'))
    }

    /// Calculate the width of a given string of text given the font size. Characters
    /// are measured with the same glyph that [Font::glyph_or_replacement] draws them with
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let scaling = self.scaling(size);
        // fold from +0.0 so an empty string isn't reported as -0pt
        text.chars()
            .filter_map(|ch| self.glyph_or_replacement(ch))
            .map(|gid| {
                scaling
                    * self
                        .face
                        .as_face_ref()
                        .glyph_hor_advance(GlyphId(gid))
                        .unwrap_or_default() as f32
            })
            .fold(Pt(0.0), |width, advance| width + advance)
    }

    /// Measure a string of text at the given size
    pub fn metrics(&self, text: &str, size: Pt) -> TextMetrics {
        TextMetrics {
            advance_width: self.width_of_text(text, size),
            ascent: self.ascent(size),
            descent: self.descent(size),
        }
    }

    /// Pair the font with a size, producing a [TextMeasure] provider
    pub fn at_size(&self, size: Pt) -> FontConfig<'_> {
        FontConfig { font: self, size }
    }
}

/// A font at a particular size; the font configuration a surface measures and draws with
#[derive(Debug, Copy, Clone)]
pub struct FontConfig<'f> {
    pub font: &'f Font,
    pub size: Pt,
}

impl TextMeasure for FontConfig<'_> {
    fn measure(&self, text: &str) -> Result<TextMetrics, LayoutError> {
        Ok(self.font.metrics(text, self.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dejavu() -> Font {
        Font::load(include_bytes!("../assets/DejaVuSans.ttf").to_vec()).expect("can load font")
    }

    #[test]
    fn metrics_scale_with_size() {
        let font = dejavu();
        let face = font.face.as_face_ref();
        let upem = face.units_per_em() as f32;
        assert_eq!(font.ascent(Pt(12.0)), Pt(12.0 / upem * face.ascender() as f32));
        assert_eq!(
            font.line_height(Pt(12.0)),
            font.leading(Pt(12.0)) + font.ascent(Pt(12.0)) + font.descent(Pt(12.0))
        );
        assert!(font.ascent(Pt(24.0)) > font.ascent(Pt(12.0)));
    }

    #[test]
    fn descent_is_below_the_baseline() {
        let font = dejavu();
        let face = font.face.as_face_ref();
        assert!(face.descender() < 0);
        let descent = font.descent(Pt(12.0));
        assert!(descent > Pt(0.0));
        assert_eq!(
            descent,
            Pt(-(12.0 / face.units_per_em() as f32 * face.descender() as f32))
        );
    }

    #[test]
    fn empty_text_has_no_width_but_a_line_height() {
        let font = dejavu();
        let metrics = font.metrics("", Pt(12.0));
        assert_eq!(metrics.advance_width, Pt(0.0));
        assert_eq!(metrics.advance_width.to_string(), "0pt");
        assert!(metrics.height() > Pt(0.0));
        assert_eq!(metrics.height(), font.ascent(Pt(12.0)) + font.descent(Pt(12.0)));
    }

    #[test]
    fn missing_glyphs_use_the_replacement_character() {
        let font = dejavu();
        let missing = '\u{10FFFD}';
        assert_eq!(font.glyph_id(missing), None);
        assert!(font.replacement_glyph_id().is_some());
        assert_eq!(font.glyph_or_replacement(missing), font.replacement_glyph_id());
        assert_eq!(font.glyph_or_replacement('H'), font.glyph_id('H'));

        let width = font.width_of_text("\u{10FFFD}", Pt(12.0));
        assert!(width > Pt(0.0));
        assert_eq!(width, font.width_of_text("\u{FFFD}", Pt(12.0)));
    }

    #[test]
    fn width_sums_advances() {
        let font = dejavu();
        let hello = font.width_of_text("Hello", Pt(12.0));
        let parts = font.width_of_text("He", Pt(12.0)) + font.width_of_text("llo", Pt(12.0));
        assert!((*hello - *parts).abs() < 1e-4);
        assert_eq!(
            font.at_size(Pt(12.0)).measure("Hello").unwrap(),
            font.metrics("Hello", Pt(12.0))
        );
    }

    #[test]
    fn garbage_bytes_are_not_a_font() {
        let result = Font::load(b"definitely not a font".to_vec());
        assert!(matches!(result, Err(LayoutError::FaceParsingError(_))));
    }

    #[test]
    fn missing_files_report_io_errors() {
        let result = Font::from_file("/this/font/does/not/exist.ttf");
        assert!(matches!(result, Err(LayoutError::Io(_))));
    }
}
