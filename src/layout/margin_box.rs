use super::{Margins, Renderable};
use crate::surface::Surface;
use crate::{LayoutError, Pos, Pt, Size};

/// Wraps another element, leaving [Margins] around it and drawing a border at the
/// outer edge.
///
/// ```
/// use canvas_layout::layout::{Label, MarginBox, Renderable};
/// use canvas_layout::{Monospace, Pt, RecordingSurface};
///
/// let surface = RecordingSurface::with_font(Monospace::new(Pt(24.0), Pt(10.0), Pt(3.0)));
/// let boxed = MarginBox::new(Label::new("Hello"));
/// let size = boxed.size(&surface).unwrap();
/// assert_eq!((size.w(), size.h()), (Pt(140.0), Pt(33.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MarginBox<R> {
    inner: R,
    margins: Margins,
}

impl<R: Renderable> MarginBox<R> {
    /// The margin used on every side by [MarginBox::new]
    pub const DEFAULT_MARGIN: Pt = Pt(10.0);

    /// Wrap `inner` with [MarginBox::DEFAULT_MARGIN] on every side
    pub fn new(inner: R) -> MarginBox<R> {
        MarginBox {
            inner,
            margins: Margins::all(Self::DEFAULT_MARGIN),
        }
    }

    /// Wrap `inner` with the same margin on every side
    pub fn with_margin(inner: R, margin: Pt) -> Result<MarginBox<R>, LayoutError> {
        MarginBox::with_margins(inner, Margins::all(margin))
    }

    /// Wrap `inner` with individual margins per side
    pub fn with_margins(inner: R, margins: Margins) -> Result<MarginBox<R>, LayoutError> {
        Ok(MarginBox {
            inner,
            margins: margins.validate()?,
        })
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Renderable> Renderable for MarginBox<R> {
    fn size(&self, surface: &dyn Surface) -> Result<Size, LayoutError> {
        self.inner.size(surface)?.expand(&self.margins)
    }

    /// Strokes the border first, then draws the inner element inside the margins
    fn render(&self, surface: &mut dyn Surface, origin: Pos) -> Result<(), LayoutError> {
        let size = self.size(surface)?;
        surface.stroke_rect(origin, size)?;
        self.inner.render(
            surface,
            origin.offset(self.margins.left, self.margins.top),
        )
    }
}
