//! Bordered panel layout: outer area, inner padded content area, and chrome-backed block.

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};

use super::style::{background_style, border_style, text_style};
use crate::theme::ChromePalette;
use crate::utils::{HORIZONTAL_PADDING, padding};

/// Bordered panel: computes inner [Rect] and a [Block] to render.
#[derive(Debug, Clone)]
pub struct PanelLayout {
    /// Full area of the panel (including border).
    pub outer: Rect,
    /// Inner area after border and padding (where content goes).
    pub inner: Rect,
}

impl PanelLayout {
    /// Build panel layout for `area`; inner rect is inset by the border then by padding.
    pub fn new(area: Rect, padding_h: u16, padding_v: u16) -> Self {
        let after_border = Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };
        Self {
            outer: area,
            inner: padding(after_border, padding_h, padding_v),
        }
    }

    /// Panel with default horizontal padding, no vertical padding.
    pub fn bordered(area: Rect) -> Self {
        Self::new(area, HORIZONTAL_PADDING, 0)
    }
}

/// Titled [Block] for a panel. Draw it in `layout.outer`, then render content in `layout.inner`.
pub fn block_for_panel(title: &str, palette: &ChromePalette, focused: bool) -> Block<'static> {
    let border = if focused {
        palette.border_focused
    } else {
        palette.border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(border))
        .title(format!(" {} ", title))
        .title_style(text_style(palette.text_muted))
        .style(background_style(palette.surface_background))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_bordered_inner_smaller() {
        let area = Rect::new(0, 0, 20, 10);
        let layout = PanelLayout::bordered(area);
        assert_eq!(layout.outer, area);
        assert_eq!(layout.inner.x, 1 + HORIZONTAL_PADDING);
        assert_eq!(layout.inner.y, 1);
        assert_eq!(layout.inner.height, 8);
    }

    #[test]
    fn panel_zero_area() {
        let layout = PanelLayout::bordered(Rect::new(0, 0, 0, 0));
        assert_eq!(layout.inner.width, 0);
        assert_eq!(layout.inner.height, 0);
    }
}
