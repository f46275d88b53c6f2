//! UI rendering: frame layout, the page (text plus overlays), header and
//! status bars.

use super::*;

impl App {
    /// Runs one frame of the main loop: apply pending input, draw, tick.
    /// Never clears the screen, so idle frames produce an empty diff.
    pub fn render_frame<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
    ) -> std::io::Result<()> {
        terminal.draw(|frame| {
            self.update(frame.area());
            self.render(frame);
        })?;
        self.tick();
        Ok(())
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame) {
        let full = frame.area();

        // Fill entire frame background first (covers margins outside capped area)
        let bg = Paragraph::new("").style(Style::default());
        frame.render_widget(bg, full);

        let [header_area, top_divider, page_area, bottom_divider, status_area] =
            Self::frame_layout(full);

        let filename = self
            .file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("untitled");
        let shown = self
            .lines
            .len()
            .saturating_sub(self.start_line)
            .min(self.visible_lines);
        header::render(
            frame,
            header_area,
            header::HeaderInfo {
                filename,
                font_size: self.font_size,
                first_line: self.start_line + 1,
                last_line: self.start_line + shown,
                total_lines: self.lines.len(),
                zoom_target: self.zoom.as_ref().map(ZoomAnimation::target),
            },
        );

        // Thin dividers between bars and page
        let divider_style = Style::default().fg(theme::BORDER);
        for area in [top_divider, bottom_divider] {
            let divider = Paragraph::new("\u{2500}".repeat(area.width as usize)).style(divider_style);
            frame.render_widget(divider, area);
        }

        self.render_page(frame, page_area);

        let hovered = self.hovered_word();
        status::render(
            frame,
            status_area,
            status::StatusInfo {
                hovered: hovered.as_deref().unwrap_or(""),
                message: &self.status_message,
                tone: self.status_tone,
                page_words: self.words.len(),
                word_boxes: self.config.show_word_boxes,
            },
        );
    }

    /// Draws each word at the cell of its rectangle, then the overlays:
    /// word boxes, the clicked word, drag highlights and the hovered word.
    fn render_page(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new("").style(theme::page_style()), area);

        let col_px = self.col_px();
        let line_height = self.geometry().line_height;
        let buf = frame.buffer_mut();

        // Pieces come out in the same order the layout pass pushed rects.
        let pieces = self
            .lines
            .iter()
            .skip(self.start_line)
            .take(self.visible_lines)
            .flat_map(|line| line.split(' ').filter(|piece| !piece.is_empty()));
        for (word, piece) in self.words.words().iter().zip(pieces) {
            let Some(span) = span_for(word.rect, area, col_px, line_height) else {
                continue;
            };
            let x = area.x + span.columns.start;
            let y = area.y + span.row;
            let room = (area.right() - x) as usize;
            buf.set_stringn(x, y, piece, room, theme::page_style());
        }

        let mut surface = CellSurface::new(buf, area, col_px, line_height, theme::PAPER_RGB);
        if self.config.show_word_boxes {
            for word in self.words.words() {
                surface.fill_rect(word.rect, theme::WORD_BOX);
            }
        }
        if let Some(word) = self.selected_word.and_then(|i| self.words.get(i)) {
            surface.fill_rect(word.rect, theme::SELECTED_WORD);
        }
        for rect in &self.drag_rects {
            surface.fill_rect(*rect, theme::HIGHLIGHT);
        }
        if let Some(word) = self.hovered.and_then(|i| self.words.get(i)) {
            surface.outline_rect(word.rect, theme::HOVER);
        }
    }
}
