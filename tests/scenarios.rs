use canvas_layout::layout::{Column, Label, MarginBox, Renderable};
use canvas_layout::{
    DrawCommand, LayoutError, Pos, Pt, RecordingSurface, Size, Surface, TextMeasure,
    TextMetrics,
};

/// Reports the same metrics for every string, except that the empty string has no width
struct FixedMetrics(TextMetrics);

impl TextMeasure for FixedMetrics {
    fn measure(&self, text: &str) -> Result<TextMetrics, LayoutError> {
        if text.is_empty() {
            return Ok(TextMetrics {
                advance_width: Pt(0.0),
                ..self.0
            });
        }
        Ok(self.0)
    }
}

fn hello_surface() -> RecordingSurface<FixedMetrics> {
    RecordingSurface::with_font(FixedMetrics(TextMetrics {
        advance_width: Pt(120.0),
        ascent: Pt(10.0),
        descent: Pt(3.0),
    }))
}

#[test]
fn label_size_is_width_by_ascent_plus_descent() {
    let surface = hello_surface();
    assert_eq!(
        Label::new("Hello").size(&surface).unwrap(),
        Size::new(Pt(120.0), Pt(13.0)).unwrap()
    );
}

#[test]
fn boxed_label_strokes_border_then_fills_text() {
    let mut surface = hello_surface();
    let boxed = MarginBox::with_margin(Label::new("Hello"), Pt(10.0)).unwrap();
    let size = boxed.size(&surface).unwrap();
    assert_eq!(size, Size::new(Pt(140.0), Pt(33.0)).unwrap());

    boxed.render(&mut surface, Pos::new(Pt(0.0), Pt(0.0))).unwrap();
    assert_eq!(
        surface.take_commands(),
        vec![
            DrawCommand::StrokeRect {
                origin: Pos::new(Pt(0.0), Pt(0.0)),
                size: Size::new(Pt(140.0), Pt(33.0)).unwrap(),
            },
            DrawCommand::FillText {
                text: "Hello".to_string(),
                baseline: Pos::new(Pt(10.0), Pt(20.0)),
            },
        ]
    );
}

#[test]
fn stacked_labels_are_one_height_apart() {
    let mut surface = hello_surface();
    let offset = Pos::new(Pt(10.0), Pt(10.0));

    // by hand, the way a driver would
    let label = Label::new("the quick brown fox jumps over the lazy dog");
    let size = label.size(&surface).unwrap();
    assert_eq!(size.h(), Pt(13.0));
    assert_eq!(offset.below(size), Pos::new(Pt(10.0), Pt(23.0)));

    // and with a column
    let mut column = Column::new();
    column.push(label.clone()).push(label);
    assert_eq!(
        column.origins(&surface, offset).unwrap()[1],
        Pos::new(Pt(10.0), Pt(23.0))
    );
    column.render(&mut surface, offset).unwrap();
    assert_eq!(
        surface.commands()[1],
        DrawCommand::FillText {
            text: "the quick brown fox jumps over the lazy dog".to_string(),
            baseline: Pos::new(Pt(10.0), Pt(33.0)),
        }
    );
}

#[test]
fn empty_label_reports_zero_width() {
    let surface = hello_surface();
    let size = Label::new("").size(&surface).unwrap();
    assert_eq!(size.w(), Pt(0.0));
    assert!(size.h() >= Pt(0.0));
}

#[test]
fn nested_boxes_sum_their_margins() {
    let surface = hello_surface();
    for (m1, m2) in [(0.0, 0.0), (1.0, 2.0), (10.0, 10.0), (0.25, 7.5)] {
        let nested = MarginBox::with_margin(
            MarginBox::with_margin(Label::new("Hello"), Pt(m1)).unwrap(),
            Pt(m2),
        )
        .unwrap();
        let size = nested.size(&surface).unwrap();
        assert_eq!(size.w(), Pt(120.0 + 2.0 * (m1 + m2)));
        assert_eq!(size.h(), Pt(13.0 + 2.0 * (m1 + m2)));
    }
}

#[test]
fn rendering_leaves_sizes_alone() {
    let mut surface = hello_surface();
    let label = Label::new("Hello");
    let boxed = MarginBox::new(&label);
    let before = (label.size(&surface).unwrap(), boxed.size(&surface).unwrap());

    boxed.render(&mut surface, Pos::new(Pt(5.0), Pt(5.0))).unwrap();
    label.render(&mut surface, Pos::new(Pt(50.0), Pt(50.0))).unwrap();

    let after = (label.size(&surface).unwrap(), boxed.size(&surface).unwrap());
    assert_eq!(before, after);
}

#[test]
fn redraw_after_clear_only_keeps_latest_frame() {
    let mut surface = hello_surface();
    let boxed = MarginBox::new(Label::new("Hello"));
    boxed.render(&mut surface, Pos::new(Pt(1.0), Pt(1.0))).unwrap();

    surface.clear();
    boxed.render(&mut surface, Pos::new(Pt(40.0), Pt(60.0))).unwrap();

    let commands = surface.commands();
    assert_eq!(commands.len(), 3);
    assert_eq!(commands[0], DrawCommand::Clear);
    assert_eq!(
        commands[1],
        DrawCommand::StrokeRect {
            origin: Pos::new(Pt(40.0), Pt(60.0)),
            size: Size::new(Pt(140.0), Pt(33.0)).unwrap(),
        }
    );
}

#[test]
fn errors_propagate_out_of_boxes() {
    let mut surface: RecordingSurface<FixedMetrics> = RecordingSurface::new();
    let boxed = MarginBox::new(Label::new("Hello"));
    assert!(matches!(boxed.size(&surface), Err(LayoutError::NoFont)));
    assert!(matches!(
        boxed.render(&mut surface, Pos::ORIGIN),
        Err(LayoutError::NoFont)
    ));
    assert!(surface.commands().is_empty());
}
