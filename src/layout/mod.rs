//! Text layout and interactive selection engine.
//!
//! Raw text flows through the tokenizer (dictionary) and the wrapper (display
//! lines) once per pagination. The word layout engine fills the per-page
//! [`words::WordRectBuffer`] on every redraw, pointer motion hit-tests that
//! buffer, and pointer drags drive the [`highlight::HighlightTracker`].

pub mod coords;
pub mod geometry;
pub mod highlight;
pub mod tokenizer;
pub mod words;
pub mod wrap;

pub use coords::{pixel_y_to_line_index, CaretMode, CharOffsetMapper, FixedWidthMapper, GlyphWidthMapper};
pub use geometry::{PageGeometry, PixelRect, Rgba, WordRect};
pub use highlight::{Gesture, HighlightLine, HighlightTracker, PageView};
pub use tokenizer::{WordDictionary, WordEntry};
pub use words::WordRectBuffer;
pub use wrap::wrap_lines;
