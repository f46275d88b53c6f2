use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme;

pub struct HeaderInfo<'a> {
    pub filename: &'a str,
    pub font_size: f32,
    /// One-based number of the first visible line.
    pub first_line: usize,
    pub last_line: usize,
    pub total_lines: usize,
    /// Size a running zoom is heading for.
    pub zoom_target: Option<f32>,
}

pub fn render(frame: &mut Frame, area: Rect, info: HeaderInfo) {
    // Left side: filename
    let left_spans = vec![Span::styled(
        format!("  {}", info.filename),
        theme::title_style(),
    )];

    // Right side: font size and visible range
    let (size_text, size_style) = match info.zoom_target {
        Some(target) => (
            format!("{:.0} -> {:.0} pt", info.font_size, target),
            Style::default().fg(theme::WARNING),
        ),
        None => (format!("{:.0} pt", info.font_size), theme::header_style()),
    };
    let right_spans = vec![
        Span::styled(size_text, size_style),
        Span::styled(" | ", theme::dim_style()),
        Span::styled(line_range(&info), theme::header_style()),
        Span::raw("  "),
    ];

    let chunks = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(right_spans.iter().map(|s| s.width() as u16).sum()),
    ])
    .split(area);

    // Fill background
    let bg = Paragraph::new("").style(theme::header_style());
    frame.render_widget(bg, area);

    let left = Paragraph::new(Line::from(left_spans));
    frame.render_widget(left, chunks[0]);

    let right = Paragraph::new(Line::from(right_spans));
    frame.render_widget(right, chunks[1]);
}

fn line_range(info: &HeaderInfo) -> String {
    if info.total_lines == 0 {
        "empty".to_string()
    } else {
        format!(
            "lines {}-{} of {}",
            info.first_line, info.last_line, info.total_lines
        )
    }
}
