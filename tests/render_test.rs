use std::io::Write;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use lexiview::app::App;
use lexiview::config::ReaderConfig;
use lexiview::store::MemoryStore;
use lexiview::theme;
use ratatui::{
    backend::TestBackend,
    buffer::Buffer,
    style::{Color, Modifier},
    Terminal,
};
use tempfile::{NamedTempFile, TempDir};

// ─── Helpers ─────────────────────────────────────────────────────────────

fn open(path: std::path::PathBuf) -> App {
    let config = ReaderConfig::default();
    let metrics = Box::new(config.cell_metrics());
    App::open(path, config, metrics, Box::new(MemoryStore::new())).unwrap()
}

/// Creates an App backed by a temp file with the given content.
fn app_with_content(content: &str) -> (App, NamedTempFile) {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(content.as_bytes()).unwrap();
    tmp.flush().unwrap();
    let app = open(tmp.path().to_path_buf());
    (app, tmp)
}

/// Creates an App with a named file inside a TempDir.
fn app_with_named_file(content: &str, filename: &str) -> (App, TempDir) {
    let dir = TempDir::new().unwrap();
    let file_path = dir.path().join(filename);
    std::fs::write(&file_path, content).unwrap();
    let app = open(file_path);
    (app, dir)
}

/// Runs one frame into an 80x30 TestBackend and returns the buffer for
/// inspection. The page starts on row 2; row 29 is the status bar.
fn render_app(app: &mut App) -> Buffer {
    let backend = TestBackend::new(80, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    app.render_frame(&mut terminal).unwrap();
    terminal.backend().buffer().clone()
}

/// Extracts the text content of a single row from the buffer (stripping trailing spaces).
fn buffer_line_text(buf: &Buffer, row: u16) -> String {
    let width = buf.area.width;
    let mut text = String::new();
    for col in 0..width {
        if let Some(cell) = buf.cell((col, row)) {
            text.push_str(cell.symbol());
        }
    }
    text.trim_end().to_string()
}

/// Returns the background color of a specific cell.
fn cell_bg(buf: &Buffer, x: u16, y: u16) -> Color {
    buf.cell((x, y)).unwrap().bg
}

fn blended(color: lexiview::layout::Rgba) -> Color {
    let (r, g, b) = color.over(theme::PAPER_RGB);
    Color::Rgb(r, g, b)
}

fn mouse(kind: MouseEventKind, col: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column: col,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// ═══════════════════════════════════════════════════════════════════════
// A. Header and status bars
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn header_shows_filename_size_and_range() {
    let (mut app, _dir) = app_with_named_file("one two\nthree four\n", "story.txt");
    let buf = render_app(&mut app);
    let header = buffer_line_text(&buf, 0);
    assert!(header.contains("story.txt"), "header: {}", header);
    assert!(header.contains("18 pt"), "header: {}", header);
    assert!(header.contains("lines 1-2 of 2"), "header: {}", header);
}

#[test]
fn header_shows_zoom_target_while_zooming() {
    let (mut app, _tmp) = app_with_content("one two\n");
    render_app(&mut app);
    app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE)));
    let buf = render_app(&mut app);
    assert!(app.is_zooming());
    let header = buffer_line_text(&buf, 0);
    assert!(header.contains("18 -> 20 pt"), "header: {}", header);
    assert_eq!(buf.cell((header.find("18 ->").unwrap() as u16, 0)).unwrap().fg, theme::WARNING);
}

#[test]
fn status_bar_shows_hovered_word() {
    let (mut app, _tmp) = app_with_content("one two\nthree four\n");
    render_app(&mut app);
    app.handle_event(mouse(MouseEventKind::Moved, 6, 2));
    let buf = render_app(&mut app);
    assert!(buffer_line_text(&buf, 29).contains("two"));
}

#[test]
fn status_bar_shows_lookup_result() {
    let (mut app, _tmp) = app_with_content("one two\n");
    render_app(&mut app);
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 2, 2));
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 2, 2));
    let buf = render_app(&mut app);
    assert!(buffer_line_text(&buf, 29).contains("'one' found: B_d_e_f"));
}

// ═══════════════════════════════════════════════════════════════════════
// B. Page
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn words_are_drawn_at_their_columns() {
    let (mut app, _tmp) = app_with_content("one two\nthree  four\n");
    let buf = render_app(&mut app);
    assert_eq!(buffer_line_text(&buf, 2), " one two");
    // the doubled space survives as a wider gap
    assert_eq!(buffer_line_text(&buf, 3), " three  four");
}

#[test]
fn page_is_black_on_white() {
    let (mut app, _tmp) = app_with_content("one\n");
    let buf = render_app(&mut app);
    assert_eq!(cell_bg(&buf, 0, 2), theme::PAPER);
    assert_eq!(buf.cell((1, 2)).unwrap().fg, theme::INK);
}

#[test]
fn hovered_word_is_outlined() {
    let (mut app, _tmp) = app_with_content("one two\n");
    render_app(&mut app);
    app.handle_event(mouse(MouseEventKind::Moved, 2, 2));
    let buf = render_app(&mut app);
    for col in 1..4 {
        let cell = buf.cell((col, 2)).unwrap();
        assert!(cell.modifier.contains(Modifier::UNDERLINED), "col {}", col);
    }
    assert!(!buf.cell((5, 2)).unwrap().modifier.contains(Modifier::UNDERLINED));
}

#[test]
fn clicked_word_is_filled() {
    let (mut app, _tmp) = app_with_content("one two\n");
    render_app(&mut app);
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 6, 2));
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 6, 2));
    let buf = render_app(&mut app);
    assert_eq!(cell_bg(&buf, 5, 2), blended(theme::SELECTED_WORD));
    assert_eq!(cell_bg(&buf, 1, 2), theme::PAPER);
}

#[test]
fn word_boxes_toggle_with_w() {
    let (mut app, _tmp) = app_with_content("one two\n");
    app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE)));
    let buf = render_app(&mut app);
    assert_eq!(cell_bg(&buf, 1, 2), blended(theme::WORD_BOX));
    assert_eq!(cell_bg(&buf, 4, 2), theme::PAPER);
    assert_eq!(cell_bg(&buf, 5, 2), blended(theme::WORD_BOX));
}

#[test]
fn drag_highlight_is_drawn_while_dragging() {
    let (mut app, _tmp) = app_with_content("one two\nthree four\n");
    render_app(&mut app);
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 1, 3));
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 10, 3));
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 10, 3));
    let buf = render_app(&mut app);
    for col in 1..11 {
        assert_eq!(cell_bg(&buf, col, 3), blended(theme::HIGHLIGHT), "col {}", col);
    }
    assert_eq!(cell_bg(&buf, 1, 2), theme::PAPER);

    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 10, 3));
    let buf = render_app(&mut app);
    assert_eq!(cell_bg(&buf, 1, 3), theme::PAPER);
}

// ═══════════════════════════════════════════════════════════════════════
// C. Flicker Regression
// ═══════════════════════════════════════════════════════════════════════

/// Backend wrapper that counts how many cells are written per draw() call.
/// Used to detect unnecessary full repaints (flicker).
struct TrackingBackend {
    inner: TestBackend,
    last_draw_count: usize,
}

impl TrackingBackend {
    fn new(width: u16, height: u16) -> Self {
        Self {
            inner: TestBackend::new(width, height),
            last_draw_count: 0,
        }
    }
}

impl ratatui::backend::Backend for TrackingBackend {
    fn draw<'a, I>(&mut self, content: I) -> std::io::Result<()>
    where
        I: Iterator<Item = (u16, u16, &'a ratatui::buffer::Cell)>,
    {
        let cells: Vec<_> = content.collect();
        self.last_draw_count = cells.len();
        self.inner.draw(cells.into_iter())
    }

    fn hide_cursor(&mut self) -> std::io::Result<()> {
        self.inner.hide_cursor()
    }

    fn show_cursor(&mut self) -> std::io::Result<()> {
        self.inner.show_cursor()
    }

    fn get_cursor_position(&mut self) -> std::io::Result<ratatui::layout::Position> {
        self.inner.get_cursor_position()
    }

    fn set_cursor_position<P: Into<ratatui::layout::Position>>(
        &mut self,
        position: P,
    ) -> std::io::Result<()> {
        self.inner.set_cursor_position(position)
    }

    fn clear(&mut self) -> std::io::Result<()> {
        self.inner.clear()
    }

    fn size(&self) -> std::io::Result<ratatui::layout::Size> {
        self.inner.size()
    }

    fn window_size(&mut self) -> std::io::Result<ratatui::backend::WindowSize> {
        self.inner.window_size()
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

#[test]
fn render_frame_idle_writes_zero_cells() {
    // ratatui diffs each frame against the previous one and only writes
    // changed cells. An idle frame must not relayout into a different
    // picture or clear the screen, so its diff is empty.
    let (mut app, _tmp) = app_with_content("hello world");
    let mut terminal = Terminal::new(TrackingBackend::new(80, 24)).unwrap();

    // Frame 1: initial draw, all cells are new
    app.render_frame(&mut terminal).unwrap();
    assert!(
        terminal.backend().last_draw_count > 0,
        "First frame should write cells",
    );

    // Frame 2: no state changes, diff should be empty
    app.render_frame(&mut terminal).unwrap();
    assert_eq!(
        terminal.backend().last_draw_count,
        0,
        "Idle frame wrote {} cells instead of 0; resize/clear is causing full repaint (flicker)",
        terminal.backend().last_draw_count
    );
}

#[test]
fn lookup_miss_is_shown_as_a_warning() {
    let (mut app, _tmp) = app_with_content("one two\n");
    render_app(&mut app);
    app.set_status_tone(
        "'zebra' not in dictionary",
        lexiview::components::status::Tone::Warning,
    );
    let buf = render_app(&mut app);
    let row = buffer_line_text(&buf, 29);
    let col = row.find("'zebra'").unwrap() as u16;
    assert_eq!(buf.cell((col, 29)).unwrap().fg, theme::WARNING);
}
