//! Points and sizes in surface coordinates.
//!
//! Surface coordinates have their origin at the top-left corner, with `y`
//! increasing downward. Both types are small `Copy` values; every computation
//! produces fresh ones.

use std::ops::Add;

use crate::layout::Margins;
use crate::units::Pt;
use crate::LayoutError;

/// A point on a drawing surface
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Pos {
    pub x: Pt,
    pub y: Pt,
}

impl Pos {
    /// The top-left corner of the surface
    pub const ORIGIN: Pos = Pos {
        x: Pt(0.0),
        y: Pt(0.0),
    };

    pub fn new<X: Into<Pt>, Y: Into<Pt>>(x: X, y: Y) -> Pos {
        Pos {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Move the point by the given amounts
    pub fn offset(self, dx: Pt, dy: Pt) -> Pos {
        Pos {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The point directly below this one, one `size.h()` further down. Used to
    /// stack elements on top of each other.
    pub fn below(self, size: Size) -> Pos {
        self.offset(Pt(0.0), size.h)
    }
}

impl Add for Pos {
    type Output = Pos;

    fn add(self, rhs: Pos) -> Pos {
        self.offset(rhs.x, rhs.y)
    }
}

impl Add<Size> for Pos {
    type Output = Pos;

    fn add(self, rhs: Size) -> Pos {
        self.offset(rhs.w, rhs.h)
    }
}

/// The bounding box dimensions of something renderable. Both components are
/// always non-negative.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Size {
    w: Pt,
    h: Pt,
}

impl Size {
    /// A size with no extent in either direction
    pub const ZERO: Size = Size {
        w: Pt(0.0),
        h: Pt(0.0),
    };

    /// Create a size, failing if either component is negative or NaN
    pub fn new<W: Into<Pt>, H: Into<Pt>>(w: W, h: H) -> Result<Size, LayoutError> {
        let w: Pt = w.into();
        let h: Pt = h.into();
        if !w.is_non_negative() {
            return Err(LayoutError::InvalidArgument {
                what: "width",
                value: *w,
            });
        }
        if !h.is_non_negative() {
            return Err(LayoutError::InvalidArgument {
                what: "height",
                value: *h,
            });
        }
        Ok(Size { w, h })
    }

    pub fn w(&self) -> Pt {
        self.w
    }

    pub fn h(&self) -> Pt {
        self.h
    }

    /// Grow the size by the horizontal and vertical sums of `margins`. Fails if
    /// negative margins would shrink the size below zero
    pub fn expand(self, margins: &Margins) -> Result<Size, LayoutError> {
        Size::new(self.w + margins.horizontal(), self.h + margins.vertical())
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size {
            w: self.w + rhs.w,
            h: self.h + rhs.h,
        }
    }
}
