//! Pixel-space primitives shared by the layout engine and the renderer.

/// Axis-aligned box in page pixels. `min` is inclusive, `max` exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelRect {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl PixelRect {
    pub const ZERO: PixelRect = PixelRect {
        min_x: 0,
        min_y: 0,
        max_x: 0,
        max_y: 0,
    };

    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    pub fn center_y(&self) -> i32 {
        (self.min_y + self.max_y) / 2
    }
}

/// Bounding box of one laid-out word, tagged with the absolute index of the
/// display line it came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordRect {
    pub rect: PixelRect,
    pub line: usize,
}

impl WordRect {
    pub const EMPTY: WordRect = WordRect {
        rect: PixelRect::ZERO,
        line: 0,
    };
}

/// Straight (non-premultiplied) RGBA color handed to a rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Composites `self` over an opaque `base` color.
    pub fn over(self, base: (u8, u8, u8)) -> (u8, u8, u8) {
        let alpha = self.a as u32;
        let mix = |top: u8, bottom: u8| -> u8 {
            ((top as u32 * alpha + bottom as u32 * (255 - alpha)) / 255) as u8
        };
        (
            mix(self.r, base.0),
            mix(self.g, base.1),
            mix(self.b, base.2),
        )
    }
}

/// Vertical and horizontal page metrics for one font size.
///
/// Display row `k` has its baseline at `line_height * (k + 1) + baseline_pad`
/// and its word boxes sit in the band `word_band` below that baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub font_size: f32,
    pub line_height: i32,
    pub margin_x: i32,
    pub baseline_pad: i32,
    pub word_band: (i32, i32),
}

impl PageGeometry {
    pub fn new(font_size: f32, margin_x: i32, baseline_pad: i32, word_band: (i32, i32)) -> Self {
        Self {
            font_size,
            // 72 dpi: one point is one pixel
            line_height: (font_size.round() as i32).max(1),
            margin_x,
            baseline_pad,
            word_band,
        }
    }

    /// Baseline of the `row`-th visible line.
    pub fn baseline(&self, row: usize) -> i32 {
        self.line_height * (row as i32 + 1) + self.baseline_pad
    }

    /// Top edge of a highlight rectangle for the `row`-th visible line.
    pub fn highlight_top(&self, row: usize) -> i32 {
        self.line_height * (row as i32 + 1) - self.margin_x
    }
}
