use crate::units::Pt;
use pdf_writer::Content;

/// A colour, expressed in RGB, CMYK, or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceCMYK colour; c, m, y, and k range from 0.0 to 1.0
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    pub(crate) fn apply_fill(self, content: &mut Content) {
        match self {
            Colour::RGB { r, g, b } => content.set_fill_rgb(r, g, b),
            Colour::CMYK { c, m, y, k } => content.set_fill_cmyk(c, m, y, k),
            Colour::Grey { g } => content.set_fill_gray(g),
        };
    }

    pub(crate) fn apply_stroke(self, content: &mut Content) {
        match self {
            Colour::RGB { r, g, b } => content.set_stroke_rgb(r, g, b),
            Colour::CMYK { c, m, y, k } => content.set_stroke_cmyk(c, m, y, k),
            Colour::Grey { g } => content.set_stroke_gray(g),
        };
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    pub const RED: Colour = Colour::RGB {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const BLUE: Colour = Colour::RGB {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
}

/// How a [PdfCanvas](crate::PdfCanvas) paints: text is filled, rectangles are stroked
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Style {
    pub fill: Colour,
    pub stroke: Colour,
    pub line_width: Pt,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            fill: colours::BLACK,
            stroke: colours::BLACK,
            line_width: Pt(1.0),
        }
    }
}
