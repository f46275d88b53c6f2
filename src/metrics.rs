//! Font metrics: the width-measurement contract the layout engine consumes.
//!
//! [`MonospaceMetrics`] describes the terminal cell grid (one advance per
//! column, two for wide characters). [`FontdueMetrics`] measures real
//! TrueType glyph advances and applies pair kerning.

use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};
use thiserror::Error;
use unicode_width::UnicodeWidthChar;

/// Errors from loading a font file.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse font {path}: {reason}")]
    Parse { path: PathBuf, reason: &'static str },
}

pub trait FontMetrics {
    /// Rendered width of `text` in pixels at `size` points (72 dpi), rounded.
    fn measure_width(&self, size: f32, text: &str) -> f32;

    /// Width of each character of `text`, including the kerning against the
    /// previous character.
    fn char_widths(&self, size: f32, text: &str) -> Vec<f32>;

    /// Distance from the baseline to the top of the tallest glyphs.
    fn ascent(&self, size: f32) -> f32;
}

/// Fixed-advance metrics for a character-cell display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Pixels of advance per point of font size.
    pub advance_per_point: f32,
}

impl MonospaceMetrics {
    pub fn new(advance_per_point: f32) -> Self {
        Self { advance_per_point }
    }

    /// Advance of a single-width character at `size`.
    pub fn advance(&self, size: f32) -> f32 {
        (size * self.advance_per_point).round().max(1.0)
    }

    fn columns(c: char) -> f32 {
        c.width().unwrap_or(0) as f32
    }
}

impl FontMetrics for MonospaceMetrics {
    fn measure_width(&self, size: f32, text: &str) -> f32 {
        let advance = self.advance(size);
        text.chars().map(|c| Self::columns(c) * advance).sum()
    }

    fn char_widths(&self, size: f32, text: &str) -> Vec<f32> {
        let advance = self.advance(size);
        text.chars().map(|c| Self::columns(c) * advance).collect()
    }

    fn ascent(&self, size: f32) -> f32 {
        size.round()
    }
}

/// Metrics backed by a parsed TrueType/OpenType font.
pub struct FontdueMetrics {
    font: Font,
}

impl FontdueMetrics {
    pub fn from_bytes(bytes: &[u8], path: &Path) -> Result<Self, FontError> {
        let font = Font::from_bytes(bytes, FontSettings::default()).map_err(|reason| {
            FontError::Parse {
                path: path.to_path_buf(),
                reason,
            }
        })?;
        Ok(Self { font })
    }

    pub fn load(path: &Path) -> Result<Self, FontError> {
        let bytes = std::fs::read(path).map_err(|source| FontError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes, path)
    }

    fn kerned_advances<'a>(&'a self, size: f32, text: &'a str) -> impl Iterator<Item = f32> + 'a {
        let mut prev: Option<char> = None;
        text.chars().map(move |c| {
            let kern = prev
                .and_then(|p| self.font.horizontal_kern(p, c, size))
                .unwrap_or(0.0);
            prev = Some(c);
            self.font.metrics(c, size).advance_width + kern
        })
    }
}

impl FontMetrics for FontdueMetrics {
    fn measure_width(&self, size: f32, text: &str) -> f32 {
        self.kerned_advances(size, text).sum::<f32>().round()
    }

    fn char_widths(&self, size: f32, text: &str) -> Vec<f32> {
        self.kerned_advances(size, text).map(f32::round).collect()
    }

    fn ascent(&self, size: f32) -> f32 {
        self.font
            .horizontal_line_metrics(size)
            .map(|m| m.ascent.round())
            .unwrap_or_else(|| size.round())
    }
}
