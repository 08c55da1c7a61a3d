use crate::surface::{Surface, TextMeasure, TextMetrics};
use crate::{LayoutError, Pos, Size};

/// A single draw call made against a [RecordingSurface]
#[derive(Clone, PartialEq, Debug)]
pub enum DrawCommand {
    FillText { text: String, baseline: Pos },
    StrokeRect { origin: Pos, size: Size },
    Clear,
}

/// A surface that keeps a log of every draw call instead of producing pixels.
///
/// It measures text with an optional font configuration `M`; until one is set,
/// measuring fails with [LayoutError::NoFont]. Recording a draw call never needs
/// metrics, so drawing always succeeds.
///
/// ```
/// use canvas_layout::{DrawCommand, Monospace, Pos, Pt, RecordingSurface, Surface};
///
/// let mut surface = RecordingSurface::with_font(Monospace::new(Pt(8.0), Pt(10.0), Pt(3.0)));
/// surface.fill_text("hi", Pos::new(Pt(0.0), Pt(10.0))).unwrap();
/// assert_eq!(
///     surface.commands(),
///     &[DrawCommand::FillText {
///         text: "hi".to_string(),
///         baseline: Pos::new(Pt(0.0), Pt(10.0)),
///     }]
/// );
/// ```
#[derive(Debug)]
pub struct RecordingSurface<M> {
    font: Option<M>,
    commands: Vec<DrawCommand>,
}

impl<M> Default for RecordingSurface<M> {
    fn default() -> Self {
        RecordingSurface {
            font: None,
            commands: Vec::default(),
        }
    }
}

impl<M: TextMeasure> RecordingSurface<M> {
    /// Create a surface with no font configured
    pub fn new() -> RecordingSurface<M> {
        RecordingSurface::default()
    }

    /// Create a surface that measures with `font`
    pub fn with_font(font: M) -> RecordingSurface<M> {
        RecordingSurface {
            font: Some(font),
            commands: Vec::default(),
        }
    }

    /// Change the font configuration used for all subsequent measurements
    pub fn set_font(&mut self, font: M) {
        self.font = Some(font);
    }

    /// Remove the font configuration. Measuring fails until a new font is set
    pub fn clear_font(&mut self) {
        self.font = None;
    }

    pub fn font(&self) -> Option<&M> {
        self.font.as_ref()
    }

    /// The draw calls made since the surface was created or last drained
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded draw calls
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl<M: TextMeasure> TextMeasure for RecordingSurface<M> {
    fn measure(&self, text: &str) -> Result<TextMetrics, LayoutError> {
        self.font.as_ref().ok_or(LayoutError::NoFont)?.measure(text)
    }
}

impl<M: TextMeasure> Surface for RecordingSurface<M> {
    fn fill_text(&mut self, text: &str, baseline: Pos) -> Result<(), LayoutError> {
        log::trace!("fill_text {text:?} at {}, {}", baseline.x, baseline.y);
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            baseline,
        });
        Ok(())
    }

    fn stroke_rect(&mut self, origin: Pos, size: Size) -> Result<(), LayoutError> {
        log::trace!(
            "stroke_rect at {}, {} ({} x {})",
            origin.x,
            origin.y,
            size.w(),
            size.h()
        );
        self.commands.push(DrawCommand::StrokeRect { origin, size });
        Ok(())
    }

    fn clear(&mut self) {
        log::debug!("clearing {} recorded commands", self.commands.len());
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }
}
