//! Reader tunables. Defaults reproduce the classic 18 pt page.

use std::ops::RangeInclusive;

use crate::layout::{CaretMode, PageGeometry};
use crate::metrics::MonospaceMetrics;

#[derive(Debug, Clone, PartialEq)]
pub struct ReaderConfig {
    pub font_size: f32,
    /// Left text margin in pixels; also the x origin of highlight rows.
    pub margin_x: i32,
    /// Gap between a row's line-height boundary and its baseline.
    pub baseline_pad: i32,
    pub wrap_width: u32,
    /// Pixels per character for the fixed-width caret mapping at `font_size`;
    /// zooming scales it with the text.
    pub char_unit: i32,
    pub zoom_step: f32,
    pub font_size_range: RangeInclusive<f32>,
    /// Cell metrics advance, in pixels per point.
    pub advance_per_point: f32,
    /// Word box band, in pixels below the baseline.
    pub word_band: (i32, i32),
    /// Upper bound on rows per page; the terminal height can lower it.
    pub page_lines: usize,
    pub caret: CaretMode,
    pub show_word_boxes: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            font_size: 18.0,
            margin_x: 10,
            baseline_pad: 2,
            wrap_width: 400,
            char_unit: 10,
            zoom_step: 2.0,
            font_size_range: 14.0..=48.0,
            advance_per_point: 10.0 / 18.0,
            word_band: (2, 5),
            page_lines: 24,
            caret: CaretMode::Fixed,
            show_word_boxes: false,
        }
    }
}

impl ReaderConfig {
    pub fn clamp_font_size(&self, size: f32) -> f32 {
        size.clamp(*self.font_size_range.start(), *self.font_size_range.end())
    }

    pub fn geometry(&self, font_size: f32) -> PageGeometry {
        PageGeometry::new(font_size, self.margin_x, self.baseline_pad, self.word_band)
    }

    pub fn cell_metrics(&self) -> MonospaceMetrics {
        MonospaceMetrics::new(self.advance_per_point)
    }

    /// Approximate character width the wrapper budgets with.
    pub fn approx_char_px(font_size: f32) -> f32 {
        font_size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::FontMetrics;

    #[test]
    fn defaults_match_the_classic_page() {
        let config = ReaderConfig::default();
        let geometry = config.geometry(config.font_size);
        assert_eq!(geometry.line_height, 18);
        assert_eq!(geometry.baseline(0), 20);
        assert_eq!(config.cell_metrics().measure_width(18.0, "M"), 10.0);
        assert_eq!(ReaderConfig::approx_char_px(18.0), 9.0);
    }

    #[test]
    fn font_size_is_clamped() {
        let config = ReaderConfig::default();
        assert_eq!(config.clamp_font_size(8.0), 14.0);
        assert_eq!(config.clamp_font_size(60.0), 48.0);
        assert_eq!(config.clamp_font_size(20.0), 20.0);
    }
}
