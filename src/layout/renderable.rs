use crate::surface::Surface;
use crate::{LayoutError, Pos, Size};

/// Something that can report its size and draw itself onto a [Surface].
///
/// `size` is a pure query. `render` only draws: it must never change what a
/// later call to `size` returns.
pub trait Renderable {
    /// The bounding box this element occupies under the surface's current font
    /// configuration
    fn size(&self, surface: &dyn Surface) -> Result<Size, LayoutError>;

    /// Draw the element with the top-left corner of its bounding box at `origin`
    fn render(&self, surface: &mut dyn Surface, origin: Pos) -> Result<(), LayoutError>;
}

impl<R: Renderable + ?Sized> Renderable for Box<R> {
    fn size(&self, surface: &dyn Surface) -> Result<Size, LayoutError> {
        (**self).size(surface)
    }

    fn render(&self, surface: &mut dyn Surface, origin: Pos) -> Result<(), LayoutError> {
        (**self).render(surface, origin)
    }
}

impl<R: Renderable + ?Sized> Renderable for &R {
    fn size(&self, surface: &dyn Surface) -> Result<Size, LayoutError> {
        (**self).size(surface)
    }

    fn render(&self, surface: &mut dyn Surface, origin: Pos) -> Result<(), LayoutError> {
        (**self).render(surface, origin)
    }
}
