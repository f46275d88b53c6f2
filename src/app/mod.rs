use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::anim::ZoomAnimation;
use crate::components::status::Tone;
use crate::components::{header, status};
use crate::config::ReaderConfig;
use crate::layout::tokenizer::extract_unique_words;
use crate::layout::{
    wrap_lines, Gesture, HighlightTracker, PageGeometry, PageView, PixelRect, WordRectBuffer,
};
use crate::metrics::FontMetrics;
use crate::store::WordStore;
use crate::surface::{span_for, CellSurface, Surface};
use crate::theme;

/// How long status bar messages stay visible before auto-clearing.
const STATUS_DURATION: Duration = Duration::from_secs(5);

/// Lines to scroll per mouse wheel tick.
const SCROLL_LINES: isize = 1;

/// Maximum width for the UI. Wider terminals get a centered, capped layout.
const MAX_WIDTH: u16 = 120;

/// A pointer event in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Moved(u16, u16),
    Down(u16, u16),
    Dragged(u16, u16),
    Up(u16, u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zoom {
    In,
    Out,
}

/// Everything the event handlers collected since the last frame.
///
/// Handlers only record; [`App::update`] applies the whole input in one step
/// before the frame is drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub pointer: Vec<PointerEvent>,
    /// Net lines to scroll; positive moves toward the end of the text.
    pub scroll: isize,
    pub zoom: Option<Zoom>,
    pub toggle_word_boxes: bool,
}

pub struct App {
    // --- Core state ---
    pub file_path: PathBuf,
    pub config: ReaderConfig,
    text: String,
    lines: Vec<String>,
    pub should_quit: bool,

    // --- Page ---
    start_line: usize,
    font_size: f32,
    visible_lines: usize,
    metrics: Box<dyn FontMetrics>,
    words: WordRectBuffer,
    /// Page area from the last frame, used to map mouse cells to pixels.
    page_area: Rect,
    needs_layout: bool,

    // --- Pointer and selection ---
    pointer: Option<(i32, i32)>,
    hovered: Option<usize>,
    selected_word: Option<usize>,
    gesture: Option<Gesture>,
    highlight: HighlightTracker,
    drag_rects: Vec<PixelRect>,
    last_selection: Option<String>,

    // --- Zoom ---
    zoom: Option<ZoomAnimation>,

    // --- Lookup ---
    store: Box<dyn WordStore>,

    // --- Status bar ---
    pub status_message: String,
    pub status_time: Option<Instant>,
    pub status_tone: Tone,

    input: FrameInput,
}

impl App {
    /// Reads `file_path` and opens a reader over its text.
    pub fn open(
        file_path: PathBuf,
        config: ReaderConfig,
        metrics: Box<dyn FontMetrics>,
        store: Box<dyn WordStore>,
    ) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(&file_path)?;
        Ok(Self::new(file_path, text, config, metrics, store))
    }

    pub fn new(
        file_path: PathBuf,
        text: String,
        config: ReaderConfig,
        metrics: Box<dyn FontMetrics>,
        store: Box<dyn WordStore>,
    ) -> Self {
        let font_size = config.clamp_font_size(config.font_size);
        let lines = wrap_lines(&text, config.wrap_width, ReaderConfig::approx_char_px(font_size));
        let geometry = config.geometry(font_size);
        let visible_lines = config.page_lines;
        let highlight = HighlightTracker::new(visible_lines, config.margin_x, 0, geometry.line_height);

        let mut app = Self {
            file_path,
            config,
            text,
            lines,
            should_quit: false,
            start_line: 0,
            font_size,
            visible_lines,
            metrics,
            words: WordRectBuffer::default(),
            page_area: Rect::default(),
            needs_layout: true,
            pointer: None,
            hovered: None,
            selected_word: None,
            gesture: None,
            highlight,
            drag_rects: Vec::new(),
            last_selection: None,
            zoom: None,
            store,
            status_message: "Click a word to look it up | drag to select | f/b: zoom | q: quit"
                .to_string(),
            status_time: Some(Instant::now()),
            status_tone: Tone::Info,
            input: FrameInput::default(),
        };
        app.init_store();
        app
    }

    /// Seeds the lookup store with every word of the text.
    fn init_store(&mut self) {
        let dictionary = extract_unique_words(&self.lines);
        match self.store.init(&dictionary) {
            Ok(added) => {
                tracing::info!(words = dictionary.len(), added, "word store ready");
            }
            Err(err) => {
                tracing::warn!(%err, "failed to initialise word store");
                self.set_status_tone(&format!("Word store unavailable: {}", err), Tone::Error);
            }
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn start_line(&self) -> usize {
        self.start_line
    }

    pub fn visible_lines(&self) -> usize {
        self.visible_lines
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn is_zooming(&self) -> bool {
        self.zoom.is_some()
    }

    pub fn words(&self) -> &WordRectBuffer {
        &self.words
    }

    pub fn highlight(&self) -> &HighlightTracker {
        &self.highlight
    }

    pub fn pending_input(&self) -> &FrameInput {
        &self.input
    }

    /// The word under the pointer, punctuation stripped.
    pub fn hovered_word(&self) -> Option<String> {
        self.words.resolve_word(&self.lines, self.hovered?)
    }

    /// The last clicked word, punctuation stripped.
    pub fn selected_word(&self) -> Option<String> {
        self.words.resolve_word(&self.lines, self.selected_word?)
    }

    pub fn last_selection(&self) -> Option<&str> {
        self.last_selection.as_deref()
    }

    fn geometry(&self) -> PageGeometry {
        self.config.geometry(self.font_size)
    }

    /// Pixel width of one terminal column: the advance of "M".
    fn col_px(&self) -> i32 {
        (self.metrics.measure_width(self.font_size, "M").round() as i32).max(1)
    }

    /// Fixed caret unit at the current size. The configured unit belongs to
    /// the configured font size and scales with zoom like the columns do.
    fn char_unit(&self) -> i32 {
        let scale = self.font_size / self.config.clamp_font_size(self.config.font_size);
        ((self.config.char_unit as f32 * scale).round() as i32).max(1)
    }

    // ─── Tick / timers ───────────────────────────────────────────────────

    /// Called once per frame after drawing. Clears expired status messages.
    pub fn tick(&mut self) {
        if let Some(time) = self.status_time {
            if time.elapsed() >= STATUS_DURATION {
                self.status_message.clear();
                self.status_time = None;
                self.status_tone = Tone::Info;
            }
        }
    }

    /// Shows a temporary message in the status bar.
    pub fn set_status(&mut self, msg: &str) {
        self.set_status_tone(msg, Tone::Info);
    }

    pub fn set_status_tone(&mut self, msg: &str, tone: Tone) {
        self.status_message = msg.to_string();
        self.status_tone = tone;
        self.status_time = Some(Instant::now());
    }

    // ─── Frame step ──────────────────────────────────────────────────────

    /// Splits the terminal into header, page and status rows.
    fn frame_layout(full: Rect) -> [Rect; 5] {
        let capped_width = full.width.min(MAX_WIDTH);
        let x_offset = (full.width - capped_width) / 2;
        let usable = Rect::new(full.x + x_offset, full.y, capped_width, full.height);
        Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Divider
            Constraint::Min(1),    // Page
            Constraint::Length(1), // Divider
            Constraint::Length(1), // Status
        ])
        .areas(usable)
    }

    /// Applies the input collected since the last frame to a terminal of
    /// size `full`, leaving the page laid out and ready to draw.
    pub fn update(&mut self, full: Rect) {
        let input = std::mem::take(&mut self.input);

        let page = Self::frame_layout(full)[2];
        if page != self.page_area {
            self.resize(page);
        }

        if input.toggle_word_boxes {
            self.config.show_word_boxes = !self.config.show_word_boxes;
        }
        if input.scroll != 0 {
            self.scroll_by(input.scroll);
        }
        if let Some(direction) = input.zoom {
            self.request_zoom(direction);
        }
        self.step_zoom();

        if self.needs_layout {
            self.relayout();
        }

        for event in input.pointer {
            self.apply_pointer(event);
        }
    }

    fn resize(&mut self, page: Rect) {
        self.page_area = page;
        let visible = self.config.page_lines.min(page.height as usize).max(1);
        if visible != self.visible_lines {
            tracing::debug!(visible, "page resized");
            self.visible_lines = visible;
            self.cancel_gesture();
        }
        self.needs_layout = true;
    }

    /// Clears and refills the word buffer for the current page.
    fn relayout(&mut self) {
        let geometry = self.geometry();
        let capacity = WordRectBuffer::page_capacity(&self.lines, self.start_line, self.visible_lines);
        self.words.ensure_capacity(capacity);
        self.words.layout(
            &self.lines,
            self.start_line,
            self.visible_lines,
            &geometry,
            self.metrics.as_ref(),
        );
        if self.gesture.is_none() {
            self.highlight = HighlightTracker::new(
                self.visible_lines,
                self.config.margin_x,
                0,
                geometry.line_height,
            );
        }
        self.selected_word = None;
        self.refresh_hover();
        self.needs_layout = false;
    }

    fn scroll_by(&mut self, delta: isize) {
        let last = self.lines.len().saturating_sub(1);
        let target = if delta < 0 {
            self.start_line.saturating_sub(delta.unsigned_abs())
        } else {
            self.start_line.saturating_add(delta as usize).min(last)
        };
        if target != self.start_line {
            tracing::debug!(from = self.start_line, to = target, "scrolled");
            self.start_line = target;
            self.cancel_gesture();
            self.needs_layout = true;
        }
    }

    fn request_zoom(&mut self, direction: Zoom) {
        if self.zoom.is_some() {
            return;
        }
        let step = match direction {
            Zoom::In => self.config.zoom_step,
            Zoom::Out => -self.config.zoom_step,
        };
        let target = self.config.clamp_font_size(self.font_size + step);
        if target != self.font_size {
            tracing::debug!(from = self.font_size, to = target, "zoom started");
            self.cancel_gesture();
            self.zoom = Some(ZoomAnimation::new(self.font_size, target));
        }
    }

    /// Advances a running zoom by one frame; on the last frame the text is
    /// re-wrapped for the new size.
    fn step_zoom(&mut self) {
        let Some(anim) = self.zoom.as_mut() else {
            return;
        };
        let (size, done) = anim.step(self.font_size);
        self.font_size = size;
        self.needs_layout = true;
        if done {
            self.zoom = None;
            self.lines = wrap_lines(
                &self.text,
                self.config.wrap_width,
                ReaderConfig::approx_char_px(size),
            );
            self.start_line = self.start_line.min(self.lines.len().saturating_sub(1));
            tracing::debug!(font_size = size, lines = self.lines.len(), "zoom finished");
        }
    }
}

mod clipboard;
mod input;
mod render;
mod selection;
