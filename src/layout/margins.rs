use crate::units::Pt;
use crate::LayoutError;

/// Space left empty between a [MarginBox](crate::layout::MarginBox)'s border and
/// the element it wraps
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: Pt, horizontal: Pt) -> Margins {
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(Pt(0.0))
    }

    /// Total horizontal space taken: `left + right`
    pub fn horizontal(&self) -> Pt {
        self.left + self.right
    }

    /// Total vertical space taken: `top + bottom`
    pub fn vertical(&self) -> Pt {
        self.top + self.bottom
    }

    /// Check that no side is negative (or NaN)
    pub fn validate(self) -> Result<Margins, LayoutError> {
        for value in [self.top, self.right, self.bottom, self.left] {
            if !value.is_non_negative() {
                return Err(LayoutError::InvalidArgument {
                    what: "margin",
                    value: *value,
                });
            }
        }
        Ok(self)
    }
}
