//! Pointer pixel coordinates to logical line and character positions.

/// Character width assumed by [`FixedWidthMapper::legacy`].
pub const LEGACY_CHAR_UNIT: i32 = 10;

/// Zero-based line index under pixel row `y`. Negative input clamps to 0.
pub fn pixel_y_to_line_index(y: i32, line_height: i32) -> usize {
    if y <= 0 || line_height <= 0 {
        return 0;
    }
    (y / line_height) as usize
}

/// Which [`CharOffsetMapper`] a selection uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaretMode {
    /// [`FixedWidthMapper`] with the configured character unit.
    #[default]
    Fixed,
    /// [`GlyphWidthMapper`] over the line's measured glyph advances.
    Glyph,
}

/// Maps a pointer x coordinate to a character offset on a line.
///
/// The offset is one-based: text starting at the left margin maps its first
/// glyph to 1, anything left of the text maps to 0.
pub trait CharOffsetMapper {
    fn char_offset(&self, x: i32) -> usize;
}

/// Whole units of a fixed character width. Only exact when every glyph is
/// `unit` pixels wide and the left margin is one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidthMapper {
    pub unit: i32,
}

impl FixedWidthMapper {
    pub fn new(unit: i32) -> Self {
        Self { unit: unit.max(1) }
    }

    pub fn legacy() -> Self {
        Self::new(LEGACY_CHAR_UNIT)
    }
}

impl CharOffsetMapper for FixedWidthMapper {
    fn char_offset(&self, x: i32) -> usize {
        if x <= 0 {
            return 0;
        }
        (x / self.unit) as usize
    }
}

/// Walks real per-glyph widths of one line, starting at the text origin.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphWidthMapper {
    origin: i32,
    widths: Vec<f32>,
}

impl GlyphWidthMapper {
    pub fn new(origin: i32, widths: Vec<f32>) -> Self {
        Self { origin, widths }
    }
}

impl CharOffsetMapper for GlyphWidthMapper {
    fn char_offset(&self, x: i32) -> usize {
        if x < self.origin {
            return 0;
        }
        let mut right = self.origin as f32;
        for (i, width) in self.widths.iter().enumerate() {
            right += width;
            if (x as f32) < right {
                return i + 1;
            }
        }
        self.widths.len() + 1
    }
}
