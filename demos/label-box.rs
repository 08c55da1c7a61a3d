use canvas_layout::id_arena::Arena;
use canvas_layout::layout::{Column, Label, MarginBox, Renderable};
use canvas_layout::{Font, Monospace, PdfCanvas, Pos, Pt, RecordingSurface, Surface};

fn scene() -> Column {
    let mut column = Column::with_spacing(Pt(4.0)).expect("spacing is positive");
    column
        .push(MarginBox::new(Label::new("Hello")))
        .push(Label::new("the quick brown fox jumps over the lazy dog"));
    column
}

fn main() {
    env_logger::init();

    // without a font file, lay the scene out with fixed-pitch metrics and list the draw calls
    let mut surface = RecordingSurface::with_font(Monospace::new(Pt(7.2), Pt(11.0), Pt(3.0)));
    let scene = scene();
    let size = scene.size(&surface).expect("font is set");
    println!("scene is {} x {}", size.w(), size.h());
    scene
        .render(&mut surface, Pos::new(Pt(10.0), Pt(10.0)))
        .expect("font is set");
    for command in surface.commands() {
        println!("{command:?}");
    }

    // with a font file, draw the same scene into a PDF content stream
    let Some(path) = std::env::args().nth(1) else {
        return;
    };
    let mut fonts = Arena::new();
    let font = fonts.alloc(Font::from_file(&path).expect("can load font"));

    let mut canvas = PdfCanvas::new(&fonts, Pt(9.0 * 40.0));
    canvas.set_font(font, Pt(12.0));
    canvas.clear();
    scene
        .render(&mut canvas, Pos::new(Pt(10.0), Pt(10.0)))
        .expect("font is set");
    let content = canvas.finish();
    println!("{}", String::from_utf8_lossy(&content));
}
