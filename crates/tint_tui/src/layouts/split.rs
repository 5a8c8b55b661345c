//! Split the terminal area into header, body, and footer regions.
//!
//! The body splits again into the controls column and the dashboard preview;
//! the footer holds the palette strip and the shortcut line.

use ratatui::layout::Rect;

use crate::utils::{CONTROLS_WIDTH, PALETTE_STRIP_HEIGHT};

/// Fixed height for the header (top, two lines: title + border).
pub const HEADER_HEIGHT: u16 = 2;

/// Fixed height for the footer: palette strip + shortcut line.
pub const FOOTER_HEIGHT: u16 = PALETTE_STRIP_HEIGHT + 1;

/// Regions for the main screen.
#[derive(Debug, Clone)]
pub struct MainSplits {
    pub header: Rect,
    /// Left column with sliders, hex field and buttons.
    pub controls: Rect,
    /// Right area with the dashboard preview.
    pub preview: Rect,
    pub palettes: Rect,
    pub shortcut: Rect,
}

/// Split `area` into the main screen regions. Body height = area.height - header - footer.
pub fn main_splits(area: Rect) -> MainSplits {
    let (header, rest) = vertical_split(area, HEADER_HEIGHT);
    let body_h = rest.height.saturating_sub(FOOTER_HEIGHT);
    let (body, footer) = vertical_split(rest, body_h);
    let (palettes, shortcut) = vertical_split(footer, PALETTE_STRIP_HEIGHT);
    let (controls, preview) = horizontal_split(body, CONTROLS_WIDTH);
    MainSplits {
        header,
        controls,
        preview,
        palettes,
        shortcut,
    }
}

/// Cut `area` into a top part of at most `top_height` rows and the rest below it.
pub fn vertical_split(area: Rect, top_height: u16) -> (Rect, Rect) {
    let cut = top_height.min(area.height);
    (
        Rect::new(area.x, area.y, area.width, cut),
        Rect::new(area.x, area.y.saturating_add(cut), area.width, area.height - cut),
    )
}

/// Cut `area` into a left part of at most `left_width` columns and the rest to its right.
pub fn horizontal_split(area: Rect, left_width: u16) -> (Rect, Rect) {
    let cut = left_width.min(area.width);
    (
        Rect::new(area.x, area.y, cut, area.height),
        Rect::new(area.x.saturating_add(cut), area.y, area.width - cut, area.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_splits_assigns_regions() {
        let area = Rect::new(0, 0, 100, 30);
        let s = main_splits(area);
        assert_eq!(s.header.height, HEADER_HEIGHT);
        assert_eq!(s.controls.y, HEADER_HEIGHT);
        assert_eq!(s.controls.width, CONTROLS_WIDTH);
        assert_eq!(s.preview.x, CONTROLS_WIDTH);
        assert_eq!(s.preview.width, 100 - CONTROLS_WIDTH);
        assert_eq!(s.controls.height, 30 - HEADER_HEIGHT - FOOTER_HEIGHT);
        assert_eq!(s.palettes.height, PALETTE_STRIP_HEIGHT);
        assert_eq!(s.shortcut.y, 29);
        assert_eq!(s.shortcut.height, 1);
    }

    #[test]
    fn short_terminal_gets_no_body() {
        let s = main_splits(Rect::new(0, 0, 80, 3));
        assert_eq!(s.header.height, HEADER_HEIGHT);
        assert_eq!(s.controls.height, 0);
        assert_eq!(s.preview.height, 0);
    }

    #[test]
    fn oversized_cut_takes_everything() {
        let (top, bottom) = vertical_split(Rect::new(0, 0, 80, 5), 10);
        assert_eq!((top.height, bottom.height), (5, 0));
        let (left, right) = horizontal_split(Rect::new(3, 0, 0, 24), 10);
        assert_eq!((left.width, right.width, right.x), (0, 0, 3));
    }
}
