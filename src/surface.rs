//! Rendering surface: where the layout engine's pixel rectangles get drawn.
//!
//! The engine only produces geometry. [`CellSurface`] rasterises that
//! geometry onto a ratatui cell buffer, where every page row is one terminal
//! row and every `col_px` pixels are one terminal column.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier};

use crate::layout::{pixel_y_to_line_index, PixelRect, Rgba};

pub trait Surface {
    /// Blends `color` over the area covered by `rect`.
    fn fill_rect(&mut self, rect: PixelRect, color: Rgba);

    /// Draws the border of `rect` in `color`.
    fn outline_rect(&mut self, rect: PixelRect, color: Rgba);
}

/// Cell span covered by a pixel rectangle, relative to the page area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSpan {
    pub row: u16,
    pub columns: std::ops::Range<u16>,
}

pub struct CellSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    col_px: i32,
    line_height: i32,
    paper: (u8, u8, u8),
}

impl<'a> CellSurface<'a> {
    pub fn new(
        buf: &'a mut Buffer,
        area: Rect,
        col_px: i32,
        line_height: i32,
        paper: (u8, u8, u8),
    ) -> Self {
        Self {
            buf,
            area,
            col_px: col_px.max(1),
            line_height: line_height.max(1),
            paper,
        }
    }

    /// Maps `rect` to the row holding its vertical center and the columns it
    /// overlaps. Empty rectangles and anything outside the area map to None.
    pub fn span(&self, rect: PixelRect) -> Option<CellSpan> {
        span_for(rect, self.area, self.col_px, self.line_height)
    }

    fn base_color(color: Color, fallback: (u8, u8, u8)) -> (u8, u8, u8) {
        match color {
            Color::Rgb(r, g, b) => (r, g, b),
            _ => fallback,
        }
    }

    fn for_each_cell(&mut self, rect: PixelRect, mut f: impl FnMut(&mut ratatui::buffer::Cell, (u8, u8, u8))) {
        let Some(span) = self.span(rect) else {
            return;
        };
        let paper = self.paper;
        for col in span.columns {
            let pos = (self.area.x + col, self.area.y + span.row);
            if let Some(cell) = self.buf.cell_mut(pos) {
                f(cell, paper);
            }
        }
    }
}

/// Maps a pixel rectangle onto terminal cells of `area`.
pub fn span_for(rect: PixelRect, area: Rect, col_px: i32, line_height: i32) -> Option<CellSpan> {
    if rect.is_empty() {
        return None;
    }
    let row = pixel_y_to_line_index(rect.center_y() - line_height / 2, line_height);
    if row >= area.height as usize {
        return None;
    }
    let first = (rect.min_x.max(0) / col_px) as u16;
    let last = ((rect.max_x.max(0) + col_px - 1) / col_px).min(area.width as i32) as u16;
    if first >= last {
        return None;
    }
    Some(CellSpan {
        row: row as u16,
        columns: first..last,
    })
}

impl Surface for CellSurface<'_> {
    fn fill_rect(&mut self, rect: PixelRect, color: Rgba) {
        self.for_each_cell(rect, |cell, paper| {
            let (r, g, b) = color.over(Self::base_color(cell.bg, paper));
            cell.set_bg(Color::Rgb(r, g, b));
        });
    }

    // A terminal row has no room for a frame, so the outline is drawn as an
    // underline in the outline color.
    fn outline_rect(&mut self, rect: PixelRect, color: Rgba) {
        self.for_each_cell(rect, |cell, paper| {
            let (r, g, b) = Rgba { a: 255, ..color }.over(paper);
            cell.set_fg(Color::Rgb(r, g, b));
            cell.modifier.insert(Modifier::UNDERLINED | Modifier::BOLD);
        });
    }
}
