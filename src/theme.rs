use ratatui::style::{Color, Modifier, Style};

use crate::layout::Rgba;

// Page: black ink on white paper
pub const PAPER: Color = Color::Rgb(255, 255, 255);
pub const PAPER_RGB: (u8, u8, u8) = (255, 255, 255);
pub const INK: Color = Color::Rgb(0, 0, 0);
pub const BORDER: Color = Color::DarkGray;

// UI elements
pub const DIM: Color = Color::DarkGray;

// Page overlays, blended over the paper
pub const WORD_BOX: Rgba = Rgba::new(0, 255, 0, 108);
pub const SELECTED_WORD: Rgba = Rgba::new(0, 0, 244, 108);
pub const HOVER: Rgba = Rgba::new(0, 0, 244, 255);
pub const HIGHLIGHT: Rgba = Rgba::new(200, 100, 80, 100);

// Status indicators
pub const SUCCESS: Color = Color::Green;
pub const WARNING: Color = Color::Yellow;
pub const ERROR: Color = Color::Red;

// Pre-built styles
pub fn page_style() -> Style {
    Style::default().fg(INK).bg(PAPER)
}

pub fn header_style() -> Style {
    Style::default()
}

pub fn status_style() -> Style {
    Style::default()
}

pub fn title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn dim_style() -> Style {
    Style::default().fg(DIM)
}
