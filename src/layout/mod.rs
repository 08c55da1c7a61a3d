//! Renderable elements and the tools to size and position them.
//!
//! Every element implements [`Renderable`](crate::layout::Renderable): the
//! caller first asks for its [`Size`](crate::Size), decides where to put it, then
//! asks it to render at that [`Pos`](crate::Pos).
//!
//! - [`Label`](crate::layout::Label) - a single line of text
//! - [`MarginBox`](crate::layout::MarginBox) - a bordered box with margins around another element
//! - [`Column`](crate::layout::Column) - elements stacked top to bottom
//!
//! # Example
//!
//! ```
//! use canvas_layout::layout::{Column, Label, MarginBox, Renderable};
//! use canvas_layout::{DrawCommand, Monospace, Pos, Pt, RecordingSurface};
//!
//! let mut surface = RecordingSurface::with_font(Monospace::new(Pt(24.0), Pt(10.0), Pt(3.0)));
//!
//! let mut column = Column::new();
//! column.push(MarginBox::new(Label::new("Hello"))).push(Label::new("world"));
//!
//! let size = column.size(&surface).unwrap();
//! assert_eq!((size.w(), size.h()), (Pt(140.0), Pt(46.0)));
//!
//! column.render(&mut surface, Pos::new(Pt(0.0), Pt(0.0))).unwrap();
//! assert!(matches!(surface.commands()[0], DrawCommand::StrokeRect { .. }));
//! ```

mod column;
mod label;
mod margin_box;
mod margins;
mod renderable;

pub use column::*;
pub use label::*;
pub use margin_box::*;
pub use margins::*;
pub use renderable::*;
