//! Header strip: title left, right-aligned status with a colored dot.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::style::{background_style, border_style, text_muted_style, text_style};
use crate::theme::ChromePalette;
use crate::utils::horizontal_padding;

/// Title shown in the header.
pub const HEADER_TITLE: &str = "tintboard";

/// Status when none is set.
pub const HEADER_STATUS_READY: &str = "Ready";

/// Build the header line: title (bold) left, then right-aligned status with colored dot.
/// has_error: danger dot; else success dot.
pub fn header_line(title: &str, right: &str, has_error: bool, palette: &ChromePalette, width: u16) -> Line<'static> {
    let title_style = text_style(palette.text).add_modifier(Modifier::BOLD);
    let dot = if has_error { palette.danger } else { palette.success };
    let left_len = title.width() + 1;
    let right_len = 2 + right.width();
    let gap = (width as usize).saturating_sub(left_len + right_len);
    Line::from(vec![
        Span::styled(title.to_string(), title_style),
        Span::raw(" ".repeat(gap)),
        Span::styled("● ".to_string(), text_style(dot)),
        Span::styled(right.to_string(), text_muted_style(palette.text_muted)),
    ])
}

/// Draw the header: title line, then bottom border.
pub fn render_header(frame: &mut Frame, area: Rect, palette: &ChromePalette, title: &str, status: &str, has_error: bool) {
    let inner = horizontal_padding(area);
    let bg = background_style(palette.status_bar_background);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style(palette.border))
        .style(bg);
    let line = header_line(title, status, has_error, palette, inner.width);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(line).style(bg), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_line_right_aligns_status() {
        let palette = ChromePalette::dark();
        let line = header_line("tintboard", "Ready", false, &palette, 40);
        assert_eq!(line.width(), 40 - 1);
        assert_eq!(line.spans[3].content, "Ready");
    }

    #[test]
    fn header_line_error_dot() {
        let palette = ChromePalette::dark();
        let line = header_line("t", "Copy failed", true, &palette, 30);
        assert_eq!(line.spans[2].style.fg, Some(super::super::style::rgb_to_color(palette.danger)));
    }
}
