use lexiview::layout::Rgba;
use ratatui::style::{Color, Modifier};

// Theme color verification tests.
// The page is always black ink on white paper; the bars inherit the terminal.

#[test]
fn test_page_colors() {
    assert_eq!(lexiview::theme::PAPER, Color::Rgb(255, 255, 255));
    assert_eq!(lexiview::theme::INK, Color::Rgb(0, 0, 0));
    let (r, g, b) = lexiview::theme::PAPER_RGB;
    assert_eq!(lexiview::theme::PAPER, Color::Rgb(r, g, b));
}

#[test]
fn test_ui_colors() {
    assert_eq!(lexiview::theme::BORDER, Color::DarkGray);
    assert_eq!(lexiview::theme::DIM, Color::DarkGray);
}

#[test]
fn test_overlay_colors() {
    assert_eq!(lexiview::theme::WORD_BOX, Rgba::new(0, 255, 0, 108));
    assert_eq!(lexiview::theme::SELECTED_WORD, Rgba::new(0, 0, 244, 108));
    assert_eq!(lexiview::theme::HOVER, Rgba::new(0, 0, 244, 255));
    assert_eq!(lexiview::theme::HIGHLIGHT, Rgba::new(200, 100, 80, 100));
}

#[test]
fn test_status_indicator_colors() {
    assert_eq!(lexiview::theme::SUCCESS, Color::Green);
    assert_eq!(lexiview::theme::WARNING, Color::Yellow);
    assert_eq!(lexiview::theme::ERROR, Color::Red);
}

#[test]
fn test_styles() {
    let page = lexiview::theme::page_style();
    assert_eq!(page.fg, Some(lexiview::theme::INK));
    assert_eq!(page.bg, Some(lexiview::theme::PAPER));
    assert!(lexiview::theme::title_style()
        .add_modifier
        .contains(Modifier::BOLD));
    assert_eq!(lexiview::theme::dim_style().fg, Some(lexiview::theme::DIM));
}

#[test]
fn test_translucent_overlays_stay_readable_on_paper() {
    // blended overlays must leave black ink legible
    for overlay in [
        lexiview::theme::WORD_BOX,
        lexiview::theme::SELECTED_WORD,
        lexiview::theme::HIGHLIGHT,
    ] {
        let (r, g, b) = overlay.over(lexiview::theme::PAPER_RGB);
        let luma = (r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000;
        assert!(luma > 90, "{:?} blends to luma {}", overlay, luma);
    }
}
