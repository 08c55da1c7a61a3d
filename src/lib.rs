mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Points, sizes, and the arithmetic for placing elements relative to each other
pub mod geometry;
pub use geometry::{Pos, Size};

/// Renderable elements (labels, boxes, columns) and how they are sized and positioned
pub mod layout;

mod recording;
pub use recording::*;

mod surface;
pub use surface::*;

mod units;
pub use units::*;

/// Re-export id-arena, whose ids select fonts on a [PdfCanvas]
pub use id_arena;
/// Re-export pdf-writer, mostly for embedding a [PdfCanvas]'s content into a document
pub use pdf_writer;
