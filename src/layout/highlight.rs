//! Multi-line drag selection: a per-row highlight rectangle state machine.
//!
//! One [`HighlightLine`] exists per visible row plus one for a trailing
//! partial row. A drag event runs [`HighlightTracker::drag`] as a single
//! transaction over the tracker and the current [`Gesture`]; releasing the
//! pointer runs [`HighlightTracker::commit`], which extracts the selected
//! text and resets every row for the next gesture.

use super::coords::{pixel_y_to_line_index, CaretMode, CharOffsetMapper, FixedWidthMapper, GlyphWidthMapper};
use super::geometry::{PageGeometry, PixelRect};
use crate::metrics::FontMetrics;

/// Highlight state of one visible row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightLine {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub shown: bool,
    /// Reset together with the row; nothing accumulates into it yet.
    pub text_len: usize,
}

impl HighlightLine {
    pub fn rect(&self) -> PixelRect {
        PixelRect::from_xywh(self.x, self.y, self.width, self.height)
    }
}

/// One pointer-down to pointer-up interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gesture {
    pub start_x: i32,
    pub end_x: i32,
    pub end_y: i32,
    /// True until a drag sample lands inside the text of its row.
    pub start_pending: bool,
    /// Visible row the selection started on, valid once `start_pending` is false.
    pub start_line: usize,
    pub dragged: bool,
}

impl Gesture {
    pub fn begin(x: i32, y: i32) -> Self {
        Self {
            start_x: x,
            end_x: x,
            end_y: y,
            start_pending: true,
            start_line: 0,
            dragged: false,
        }
    }

    pub fn drag_to(&mut self, x: i32, y: i32) {
        self.end_x = x;
        self.end_y = y;
        self.dragged = true;
    }
}

/// The page a gesture runs against: the wrapped lines, the first visible
/// line, and how to measure them.
pub struct PageView<'a> {
    pub lines: &'a [String],
    pub start_line: usize,
    pub geometry: &'a PageGeometry,
    pub metrics: &'a dyn FontMetrics,
    pub caret: CaretMode,
    pub char_unit: i32,
}

impl PageView<'_> {
    /// Text of the `row`-th visible line.
    pub fn text(&self, row: usize) -> Option<&str> {
        self.lines.get(self.start_line + row).map(String::as_str)
    }

    /// Last visible row that holds text.
    pub fn last_row(&self) -> Option<usize> {
        self.lines.len().checked_sub(self.start_line + 1)
    }

    /// Measured pixel width of the `row`-th visible line.
    pub fn line_width(&self, row: usize) -> Option<i32> {
        self.text(row)
            .map(|text| self.metrics.measure_width(self.geometry.font_size, text).round() as i32)
    }

    /// Pixel-x to character-offset mapping for the `row`-th visible line.
    pub fn offset_mapper(&self, row: usize) -> Box<dyn CharOffsetMapper> {
        match self.caret {
            CaretMode::Fixed => Box::new(FixedWidthMapper::new(self.char_unit)),
            CaretMode::Glyph => {
                let widths = self
                    .text(row)
                    .map(|text| self.metrics.char_widths(self.geometry.font_size, text))
                    .unwrap_or_default();
                Box::new(GlyphWidthMapper::new(self.geometry.margin_x, widths))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightTracker {
    lines: Vec<HighlightLine>,
    current_line: usize,
    origin_y: i32,
}

impl HighlightTracker {
    /// Tracker for a page of `visible_lines` rows (plus one trailing row),
    /// every rectangle starting at `(x, y)` with the given height.
    pub fn new(visible_lines: usize, x: i32, y: i32, height: i32) -> Self {
        let line = HighlightLine {
            x,
            y,
            height,
            ..HighlightLine::default()
        };
        Self {
            lines: vec![line; visible_lines + 1],
            current_line: 0,
            origin_y: y,
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[HighlightLine] {
        &self.lines
    }

    pub fn line(&self, row: usize) -> Option<&HighlightLine> {
        self.lines.get(row)
    }

    pub fn current_line(&self) -> usize {
        self.current_line
    }

    pub fn is_shown(&self, row: usize) -> bool {
        self.lines.get(row).is_some_and(|line| line.shown)
    }

    /// Rectangles of every shown row with a positive width.
    pub fn shown_rects(&self) -> impl Iterator<Item = PixelRect> + '_ {
        self.lines
            .iter()
            .filter(|line| line.shown && line.width > 0)
            .map(HighlightLine::rect)
    }

    /// Marks rows `start..=end` as shown.
    pub fn show(&mut self, start: usize, end: usize) {
        for (row, line) in self.lines.iter_mut().enumerate().skip(start) {
            if !line.shown && row <= end {
                line.shown = true;
            }
        }
    }

    pub fn unshow(&mut self, row: usize) {
        if let Some(line) = self.lines.get_mut(row) {
            line.shown = false;
        }
    }

    /// Hides `row` and every row after it.
    pub fn unshow_from(&mut self, row: usize) {
        for line in self.lines.iter_mut().skip(row) {
            line.shown = false;
        }
    }

    /// Hides every row and returns its geometry to the left margin.
    pub fn reset_all(&mut self, margin_x: i32) {
        for line in &mut self.lines {
            line.shown = false;
            line.x = margin_x;
            line.y = self.origin_y;
            line.width = 0;
            line.text_len = 0;
        }
        self.current_line = 0;
    }

    /// Applies one drag sample and returns the rectangles to paint.
    ///
    /// Moving down a row finalizes the row being left rather than the row
    /// being entered. Moving up retracts every row from the pointer's row on.
    /// All rows between the gesture's start row and the pointer's row are
    /// re-marked each time because motion events can skip rows. A pointer
    /// below the text acts on the last text row, selected to its end.
    pub fn drag(&mut self, gesture: &mut Gesture, page: &PageView) -> Vec<PixelRect> {
        let geometry = page.geometry;
        let pointer_row = pixel_y_to_line_index(gesture.end_y, geometry.line_height);

        let mut went_down = false;
        let mut mark_last = false;
        if self.current_line < pointer_row {
            self.current_line = pointer_row;
            went_down = true;
        } else if self.current_line > pointer_row {
            mark_last = true;
        }

        let Some(last_row) = page.last_row() else {
            return Vec::new();
        };
        let selected = pointer_row.min(last_row).min(self.lines.len() - 1);
        let past_text = pointer_row > selected;
        let Some(max_width) = page.line_width(selected) else {
            return Vec::new();
        };

        self.lines[selected].y = geometry.highlight_top(selected);

        if gesture.start_pending
            && gesture.start_x >= geometry.margin_x
            && gesture.start_x <= geometry.margin_x + max_width
        {
            self.lines[selected].x = gesture.start_x;
            gesture.start_pending = false;
            gesture.start_line = selected;
        }

        let end_x = gesture.end_x;
        if went_down && selected > 0 {
            let prev = selected - 1;
            let prev_width = page.line_width(prev).unwrap_or(0);
            self.lines[prev].width = prev_width - self.lines[prev].x;
        }
        if past_text || (!went_down && end_x > max_width) {
            self.lines[selected].width = max_width;
        } else if !went_down && end_x < max_width {
            self.lines[selected].width = end_x - self.lines[selected].x;
        }

        if mark_last {
            self.unshow_from(selected);
            self.current_line = pointer_row;
        }

        if !gesture.start_pending {
            self.show(gesture.start_line, selected);
        }

        let mut rects = Vec::new();
        for row in 0..selected {
            if !self.lines[row].shown {
                continue;
            }
            // the start row keeps the width it was given when the drag began
            if row != gesture.start_line {
                self.lines[row].y = geometry.highlight_top(row);
                self.lines[row].width = page.line_width(row).unwrap_or(0);
            }
            rects.push(self.lines[row].rect());
        }

        let live = self.lines[selected];
        if live.shown && live.width > 0 {
            rects.push(live.rect());
        }
        rects
    }

    /// Ends the gesture: resolves the selected text and resets every row.
    pub fn commit(&mut self, gesture: &Gesture, page: &PageView) -> Option<String> {
        let text = resolve_selection(gesture, page);
        self.reset_all(page.geometry.margin_x);
        text
    }
}

/// How a single-row selection is cut from its line, given the start offset
/// (already moved back by one) and the end offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitBranch {
    /// Both offsets are zero.
    Nothing,
    /// The start lies at or past the end of the line.
    PastEnd,
    /// Start and end coincide: the one character at `start`.
    Collapsed,
    /// Dragged right to left: characters `end - 1 ..= start`.
    Reversed,
    /// Characters `start .. min(end, len)`.
    Forward,
}

pub fn classify_commit(start: usize, end: usize, len: usize) -> CommitBranch {
    if start == 0 && end == 0 {
        CommitBranch::Nothing
    } else if start >= len {
        CommitBranch::PastEnd
    } else if end == start {
        CommitBranch::Collapsed
    } else if end < start {
        CommitBranch::Reversed
    } else {
        CommitBranch::Forward
    }
}

/// Characters `from..to` of `text`, clamped to its length.
fn char_slice(text: &str, from: usize, to: usize) -> &str {
    let byte = |chars: usize| {
        text.char_indices()
            .nth(chars)
            .map_or(text.len(), |(offset, _)| offset)
    };
    let (from, to) = (byte(from), byte(to));
    if from >= to {
        ""
    } else {
        &text[from..to]
    }
}

/// Cuts a selection made within one line.
pub fn select_on_line(text: &str, start: usize, end: usize) -> Option<String> {
    let len = text.chars().count();
    let selected = match classify_commit(start, end, len) {
        CommitBranch::Nothing | CommitBranch::PastEnd => return None,
        CommitBranch::Collapsed => char_slice(text, start, start + 1),
        CommitBranch::Reversed => char_slice(text, end.saturating_sub(1), start + 1),
        CommitBranch::Forward => char_slice(text, start, end.min(len)),
    };
    Some(selected.to_string())
}

/// Text covered by a finished gesture.
pub fn resolve_selection(gesture: &Gesture, page: &PageView) -> Option<String> {
    let end_row = pixel_y_to_line_index(gesture.end_y, page.geometry.line_height);
    let start_row = if gesture.start_pending {
        end_row
    } else {
        gesture.start_line
    };

    let start = page
        .offset_mapper(start_row)
        .char_offset(gesture.start_x)
        .saturating_sub(1);
    let end = page.offset_mapper(end_row).char_offset(gesture.end_x);

    if start_row == end_row {
        return select_on_line(page.text(end_row)?, start, end);
    }

    // Multi-row: the top row from its boundary on, whole middle rows, and
    // the bottom row up to its boundary.
    let (top, bottom, top_from, bottom_to) = if start_row < end_row {
        (start_row, end_row, start, end)
    } else {
        (end_row, start_row, end.saturating_sub(1), start + 1)
    };
    let mut parts = Vec::new();
    for row in top..=bottom {
        let Some(text) = page.text(row) else {
            break;
        };
        let part = if row == top {
            char_slice(text, top_from, usize::MAX)
        } else if row == bottom {
            char_slice(text, 0, bottom_to)
        } else {
            text
        };
        if !part.is_empty() {
            parts.push(part);
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
