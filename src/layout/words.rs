//! Per-page word rectangles: layout, pointer hit-testing and word resolution.
//!
//! [`WordRectBuffer`] is a fixed-capacity arena reused across redraws. Every
//! layout pass clears the whole buffer before filling it, so slots left over
//! from a longer page read as empty boxes that no pointer can hit.

use std::ops::Range;

use super::geometry::{PageGeometry, PixelRect, WordRect};
use super::tokenizer::{count_inter_word_gaps, trim_leading_punctuation, trim_trailing_punctuation};
use crate::metrics::FontMetrics;

fn visible_window(total: usize, start: usize, visible: usize) -> Range<usize> {
    let start = start.min(total);
    start..(start + visible).min(total)
}

#[derive(Debug, Clone, Default)]
pub struct WordRectBuffer {
    rects: Vec<WordRect>,
    hover: Vec<bool>,
    active: usize,
}

impl WordRectBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rects: vec![WordRect::EMPTY; capacity],
            hover: vec![false; capacity],
            active: 0,
        }
    }

    /// Slots needed for the page `start..start + visible`: twice the
    /// inter-word gaps, plus one per line so single-word lines fit too.
    pub fn page_capacity<S: AsRef<str>>(lines: &[S], start: usize, visible: usize) -> usize {
        let gaps: usize = lines[visible_window(lines.len(), start, visible)]
            .iter()
            .map(|line| count_inter_word_gaps(line.as_ref()))
            .sum();
        2 * gaps + visible
    }

    /// Grows the arena to at least `capacity` slots. Never shrinks.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        if capacity > self.rects.len() {
            self.rects.resize(capacity, WordRect::EMPTY);
            self.hover.resize(capacity, false);
        }
    }

    pub fn capacity(&self) -> usize {
        self.rects.len()
    }

    /// Number of words written by the last layout pass.
    pub fn len(&self) -> usize {
        self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    /// Every slot, including cleared ones past [`len`](Self::len).
    pub fn slots(&self) -> &[WordRect] {
        &self.rects
    }

    /// Words laid out by the last pass, in reading order.
    pub fn words(&self) -> &[WordRect] {
        &self.rects[..self.active]
    }

    pub fn get(&self, index: usize) -> Option<&WordRect> {
        self.words().get(index)
    }

    /// Resets every slot to an empty box and drops all hover flags.
    pub fn clear(&mut self) {
        self.rects.fill(WordRect::EMPTY);
        self.hover.fill(false);
        self.active = 0;
    }

    fn push(&mut self, word: WordRect) {
        assert!(
            self.active < self.rects.len(),
            "word rect buffer overflow: page sized for {} words",
            self.rects.len()
        );
        self.rects[self.active] = word;
        self.active += 1;
    }

    /// Lays out the words of lines `start..start + visible` (clipped to the
    /// text) left to right, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics when the page holds more words than the buffer has slots; size
    /// it with [`page_capacity`](Self::page_capacity) first.
    pub fn layout<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        start: usize,
        visible: usize,
        geometry: &PageGeometry,
        metrics: &dyn FontMetrics,
    ) {
        self.clear();
        let size = geometry.font_size;
        let space = metrics.measure_width(size, " ").round() as i32;
        let (band_top, band_bottom) = geometry.word_band;

        for (row, index) in visible_window(lines.len(), start, visible).enumerate() {
            let baseline = geometry.baseline(row);
            let mut x = geometry.margin_x;
            for (i, word) in lines[index].as_ref().split(' ').enumerate() {
                if i > 0 {
                    x += space;
                }
                let width = metrics.measure_width(size, word).round() as i32;
                if !word.is_empty() {
                    self.push(WordRect {
                        rect: PixelRect::new(x, baseline + band_top, x + width, baseline + band_bottom),
                        line: index,
                    });
                }
                x += width;
            }
        }
    }

    /// Recomputes the hover flag of every slot for a pointer at `(x, y)`.
    ///
    /// The pointer is over a word when it lies strictly inside the box
    /// horizontally and strictly between `min_y - ascent` and `max_y`.
    pub fn update_hover(&mut self, x: i32, y: i32, ascent: i32) {
        for (word, hovered) in self.rects.iter().zip(self.hover.iter_mut()) {
            let r = &word.rect;
            *hovered = x > r.min_x && x < r.max_x && y > r.min_y - ascent && y < r.max_y;
        }
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hover.get(index).copied().unwrap_or(false)
    }

    /// First word the pointer is over, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.hover.iter().position(|&h| h)
    }

    /// The literal word behind slot `index`, with surrounding punctuation
    /// stripped.
    pub fn resolve_word<S: AsRef<str>>(&self, lines: &[S], index: usize) -> Option<String> {
        let line = self.get(index)?.line;
        let position = self.rects[..=index]
            .iter()
            .rev()
            .take_while(|word| word.line == line)
            .count();
        let word = lines
            .get(line)?
            .as_ref()
            .split(' ')
            .filter(|piece| !piece.is_empty())
            .nth(position - 1)?;
        Some(trim_trailing_punctuation(trim_leading_punctuation(word)).to_string())
    }
}
