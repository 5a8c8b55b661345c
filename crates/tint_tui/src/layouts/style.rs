//! Map chrome palette and picker colors to ratatui styles.
//!
//! All chrome colors come from [ChromePalette]; preview colors come from
//! [tint_core] and pass through [rgb_to_color] the same way.

use ratatui::style::{Color, Style};
use tint_core::Rgb;

/// Convert [Rgb] to ratatui [Color].
#[inline]
pub fn rgb_to_color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.tuple();
    Color::Rgb(r, g, b)
}

/// Style for panel borders (border color, no fill).
pub fn border_style(border_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(border_rgb))
}

/// Style for background only (e.g. inner fill).
pub fn background_style(bg_rgb: Rgb) -> Style {
    Style::default().bg(rgb_to_color(bg_rgb))
}

/// Style for primary text.
pub fn text_style(text_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(text_rgb))
}

/// Style for muted/secondary text.
pub fn text_muted_style(text_muted_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(text_muted_rgb))
}

/// Text on a filled background (preview regions, buttons, swatches).
pub fn filled_style(text_rgb: Rgb, bg_rgb: Rgb) -> Style {
    Style::default()
        .fg(rgb_to_color(text_rgb))
        .bg(rgb_to_color(bg_rgb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_style_sets_both() {
        let style = filled_style(Rgb::WHITE, Rgb(0x26, 0xA6, 0x9A));
        assert_eq!(style.fg, Some(Color::Rgb(255, 255, 255)));
        assert_eq!(style.bg, Some(Color::Rgb(0x26, 0xA6, 0x9A)));
    }
}
