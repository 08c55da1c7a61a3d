use super::Renderable;
use crate::surface::Surface;
use crate::{LayoutError, Pos, Pt, Size};

/// Stacks elements vertically, each one directly below the previous one, left
/// edges aligned.
#[derive(Default)]
pub struct Column {
    children: Vec<Box<dyn Renderable>>,
    spacing: Pt,
}

impl Column {
    pub fn new() -> Column {
        Column::default()
    }

    /// A column that leaves `spacing` between consecutive children
    pub fn with_spacing(spacing: Pt) -> Result<Column, LayoutError> {
        if !spacing.is_non_negative() {
            return Err(LayoutError::InvalidArgument {
                what: "spacing",
                value: *spacing,
            });
        }
        Ok(Column {
            children: Vec::new(),
            spacing,
        })
    }

    /// Append a child to the bottom of the column
    pub fn push<R: Renderable + 'static>(&mut self, child: R) -> &mut Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Where each child's top-left corner lands when the column is rendered at `origin`
    pub fn origins(&self, surface: &dyn Surface, origin: Pos) -> Result<Vec<Pos>, LayoutError> {
        let mut origins = Vec::with_capacity(self.children.len());
        let mut next = origin;
        for child in self.children.iter() {
            origins.push(next);
            next = next.below(child.size(surface)?).offset(Pt(0.0), self.spacing);
        }
        Ok(origins)
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("children", &self.children.len())
            .field("spacing", &self.spacing)
            .finish()
    }
}

impl Renderable for Column {
    /// As wide as the widest child, as tall as all children plus the spacing
    /// between them
    fn size(&self, surface: &dyn Surface) -> Result<Size, LayoutError> {
        let mut width = Pt(0.0);
        let mut height = Pt(0.0);
        for child in self.children.iter() {
            let size = child.size(surface)?;
            width = width.max(size.w());
            height += size.h();
        }
        if self.children.len() > 1 {
            height += self.spacing * (self.children.len() - 1) as f32;
        }
        Size::new(width, height)
    }

    fn render(&self, surface: &mut dyn Surface, origin: Pos) -> Result<(), LayoutError> {
        let origins = self.origins(surface, origin)?;
        for (child, child_origin) in self.children.iter().zip(origins) {
            child.render(surface, child_origin)?;
        }
        Ok(())
    }
}
