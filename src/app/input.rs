//! Input handling: keyboard and mouse events are recorded into the pending
//! [`FrameInput`] and applied by the next frame step.

use super::*;

impl App {
    // ─── Event dispatch ──────────────────────────────────────────────────

    /// Top-level event handler. Dispatches to key or mouse handlers.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(_, _) => {} // picked up from the frame area
            _ => {}
        }
    }

    // ─── Key handling ────────────────────────────────────────────────────

    fn handle_key(&mut self, key: KeyEvent) {
        let page = self.visible_lines as isize;
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc) | (KeyModifiers::NONE, KeyCode::Char('q')) => {
                self.should_quit = true;
            }
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                self.should_quit = true;
            }
            (_, KeyCode::Up) => self.input.scroll -= 1,
            (_, KeyCode::Down) => self.input.scroll += 1,
            (_, KeyCode::Left) | (_, KeyCode::PageUp) => self.input.scroll -= page,
            (_, KeyCode::Right) | (_, KeyCode::PageDown) => self.input.scroll += page,
            (KeyModifiers::NONE, KeyCode::Char('f')) => {
                self.input.zoom.get_or_insert(Zoom::In);
            }
            (KeyModifiers::NONE, KeyCode::Char('b')) => {
                self.input.zoom.get_or_insert(Zoom::Out);
            }
            (KeyModifiers::NONE, KeyCode::Char('w')) => {
                self.input.toggle_word_boxes = !self.input.toggle_word_boxes;
            }
            _ => {}
        }
    }

    // ─── Mouse handling ──────────────────────────────────────────────────

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (col, row) = (mouse.column, mouse.row);
        let event = match mouse.kind {
            MouseEventKind::Moved => PointerEvent::Moved(col, row),
            MouseEventKind::Down(MouseButton::Left) => PointerEvent::Down(col, row),
            MouseEventKind::Drag(MouseButton::Left) => PointerEvent::Dragged(col, row),
            MouseEventKind::Up(MouseButton::Left) => PointerEvent::Up(col, row),
            MouseEventKind::ScrollUp => {
                self.input.scroll -= SCROLL_LINES;
                return;
            }
            MouseEventKind::ScrollDown => {
                self.input.scroll += SCROLL_LINES;
                return;
            }
            _ => return,
        };
        self.input.pointer.push(event);
    }
}
