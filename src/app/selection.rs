//! Pointer handling: hover, word clicks with dictionary lookup, and drag
//! selection through the highlight tracker.

use super::*;

impl App {
    /// Maps a terminal cell to the page pixel at its center.
    pub(super) fn cell_to_pixel(&self, col: u16, row: u16) -> (i32, i32) {
        let col_px = self.col_px();
        let line_height = self.geometry().line_height;
        let c = col as i32 - self.page_area.x as i32;
        let r = row as i32 - self.page_area.y as i32;
        (c * col_px + col_px / 2, r * line_height + line_height / 2)
    }

    pub(super) fn apply_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Moved(col, row) => {
                self.pointer = Some(self.cell_to_pixel(col, row));
                self.refresh_hover();
            }
            PointerEvent::Down(col, row) => {
                let (x, y) = self.cell_to_pixel(col, row);
                self.pointer = Some((x, y));
                self.refresh_hover();
                self.gesture = Some(Gesture::begin(x, y));
            }
            PointerEvent::Dragged(col, row) => {
                let (x, y) = self.cell_to_pixel(col, row);
                self.pointer = Some((x, y));
                self.refresh_hover();
                self.drag_to(x, y);
            }
            PointerEvent::Up(col, row) => {
                let (x, y) = self.cell_to_pixel(col, row);
                self.pointer = Some((x, y));
                self.refresh_hover();
                match self.gesture.take() {
                    Some(gesture) if gesture.dragged => self.commit_selection(gesture),
                    Some(_) => {
                        self.highlight.reset_all(self.config.margin_x);
                        self.drag_rects.clear();
                        self.click_word();
                    }
                    None => {}
                }
            }
        }
    }

    /// Re-runs the hit test for the last known pointer position.
    pub(super) fn refresh_hover(&mut self) {
        let Some((x, y)) = self.pointer else {
            self.hovered = None;
            return;
        };
        let ascent = self.metrics.ascent(self.font_size).round() as i32;
        self.words.update_hover(x, y, ascent);
        self.hovered = self.words.hovered();
    }

    pub(super) fn cancel_gesture(&mut self) {
        self.gesture = None;
        self.highlight.reset_all(self.config.margin_x);
        self.drag_rects.clear();
    }

    fn drag_to(&mut self, x: i32, y: i32) {
        let char_unit = self.char_unit();
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };
        gesture.drag_to(x, y);
        let geometry = self.config.geometry(self.font_size);
        let page = PageView {
            lines: &self.lines,
            start_line: self.start_line,
            geometry: &geometry,
            metrics: self.metrics.as_ref(),
            caret: self.config.caret,
            char_unit,
        };
        self.drag_rects = self.highlight.drag(gesture, &page);
    }

    fn commit_selection(&mut self, gesture: Gesture) {
        let geometry = self.config.geometry(self.font_size);
        let page = PageView {
            lines: &self.lines,
            start_line: self.start_line,
            geometry: &geometry,
            metrics: self.metrics.as_ref(),
            caret: self.config.caret,
            char_unit: self.char_unit(),
        };
        let text = self.highlight.commit(&gesture, &page);
        self.drag_rects.clear();

        match text {
            Some(text) => {
                tracing::info!(chars = text.chars().count(), "selection committed");
                self.copy_to_clipboard(&text);
                self.set_status(&format!("Selected: {}", text));
                self.last_selection = Some(text);
            }
            None => {
                tracing::debug!("selection committed with no text");
            }
        }
    }

    /// Selects the hovered word and looks it up. A click on empty space
    /// clears the selected word.
    fn click_word(&mut self) {
        self.selected_word = self.hovered;
        if let Some(word) = self.selected_word() {
            self.lookup(&word);
        }
    }

    pub(super) fn lookup(&mut self, word: &str) {
        match self.store.lookup(word) {
            Ok(Some(record)) => {
                let record = String::from_utf8_lossy(&record).into_owned();
                tracing::info!(word, %record, "lookup hit");
                self.set_status_tone(&format!("'{}' found: {}", word, record), Tone::Success);
            }
            Ok(None) => {
                tracing::info!(word, "lookup miss");
                self.set_status_tone(&format!("'{}' not in dictionary", word), Tone::Warning);
            }
            Err(err) => {
                tracing::warn!(%err, word, "lookup failed");
                self.set_status_tone(&format!("Lookup failed: {}", err), Tone::Error);
            }
        }
    }
}
