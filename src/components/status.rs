use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme;

/// How a status message reads: lookups report hits, misses and failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Tone::Info => theme::status_style(),
            Tone::Success => theme::status_style().fg(theme::SUCCESS),
            Tone::Warning => theme::status_style().fg(theme::WARNING),
            Tone::Error => theme::status_style().fg(theme::ERROR).add_modifier(Modifier::BOLD),
        }
    }
}

pub struct StatusInfo<'a> {
    pub hovered: &'a str,
    pub message: &'a str,
    pub tone: Tone,
    pub page_words: usize,
    pub word_boxes: bool,
}

pub fn render(frame: &mut Frame, area: Rect, info: StatusInfo) {
    // Fill the entire status bar background
    let bg = Paragraph::new("").style(theme::status_style());
    frame.render_widget(bg, area);

    let chunks = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Fill(2),
        Constraint::Fill(1),
    ])
    .split(area);

    // Left: word under the pointer
    let left = Paragraph::new(Line::from(Span::styled(
        format!("  {}", info.hovered),
        theme::title_style(),
    )));
    frame.render_widget(left, chunks[0]);

    // Center: status message
    if !info.message.is_empty() {
        let center = Paragraph::new(Line::from(Span::styled(
            info.message.to_string(),
            info.tone.style(),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(center, chunks[1]);
    }

    // Right: words on page + box toggle
    let boxes = if info.word_boxes { " | boxes" } else { "" };
    let right = Paragraph::new(Line::from(Span::styled(
        format!("{} words{}  ", info.page_words, boxes),
        theme::status_style(),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(right, chunks[2]);
}
