//! Line wrapping: splits raw text into display lines that fit a pixel budget.
//!
//! The budget is converted to a character count with a fixed approximate
//! character width, so wrapping is measured in runes rather than glyph
//! widths. Breaks fall on spaces and swallow the whole run of spaces there;
//! a run with no space inside the window is force-broken at the rune budget.

/// Characters that fit on one display line for a given pixel budget.
pub fn char_budget(pixel_width: u32, approx_char_px: f32) -> usize {
    if approx_char_px <= 0.0 {
        return 1;
    }
    let cells = (pixel_width as f32 / approx_char_px).round_ties_even() as i64;
    (cells - 1).max(1) as usize
}

/// Wraps `text` into display lines of at most [`char_budget`] runes.
///
/// Explicit newlines always start a new line, blank lines are kept, and a
/// trailing `\r` on each paragraph is dropped. A single empty line produced by
/// a trailing newline is removed.
pub fn wrap_lines(text: &str, pixel_width: u32, approx_char_px: f32) -> Vec<String> {
    let budget = char_budget(pixel_width, approx_char_px);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        wrap_paragraph(paragraph, budget, &mut lines);
    }
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

fn wrap_paragraph(paragraph: &str, budget: usize, out: &mut Vec<String>) {
    let mut rest = paragraph;
    loop {
        // Byte offset of the first rune past the budget; None when the rest fits.
        let end = match rest.char_indices().nth(budget) {
            Some((offset, _)) => offset,
            None => {
                out.push(rest.to_string());
                return;
            }
        };

        let break_at = if rest[end..].starts_with(' ') {
            Some(end)
        } else {
            rest[..end].rfind(' ').filter(|&pos| pos > 0)
        };

        match break_at {
            Some(pos) => {
                out.push(rest[..pos].to_string());
                // the next window starts at a word, never inside a run of spaces
                rest = rest[pos + 1..].trim_start_matches(' ');
            }
            None => {
                out.push(rest[..end].to_string());
                rest = &rest[end..];
            }
        }

        if rest.is_empty() {
            return;
        }
    }
}
