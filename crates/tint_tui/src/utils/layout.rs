//! Layout helpers for Rects.
//!
//! Use these with [ratatui::layout::Rect] to apply padding and to find which
//! region a mouse position falls in.

use ratatui::layout::Rect;

use crate::utils::constants::*;

/// Apply horizontal padding to a Rect (symmetric left/right).
#[inline]
pub fn horizontal_padding(area: Rect) -> Rect {
    horizontal_padding_with(area, HORIZONTAL_PADDING)
}

/// Apply horizontal padding with a custom amount.
#[inline]
pub fn horizontal_padding_with(area: Rect, pad: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(pad),
        y: area.y,
        width: area.width.saturating_sub(pad.saturating_mul(2)),
        height: area.height,
    }
}

/// Apply padding on all four sides.
#[inline]
pub fn padding(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(horizontal),
        y: area.y.saturating_add(vertical),
        width: area.width.saturating_sub(horizontal.saturating_mul(2)),
        height: area.height.saturating_sub(vertical.saturating_mul(2)),
    }
}

/// One-line row `offset` lines below the top of `area`, or `None` when it does not fit.
pub fn row(area: Rect, offset: u16) -> Option<Rect> {
    (offset < area.height).then(|| Rect {
        x: area.x,
        y: area.y + offset,
        width: area.width,
        height: 1,
    })
}

/// True if the cell (`column`, `row`) lies inside `area`.
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_shrinks_both_axes() {
        let r = padding(Rect::new(0, 0, 20, 10), 2, 1);
        assert_eq!(r, Rect::new(2, 1, 16, 8));
    }

    #[test]
    fn padding_saturates() {
        let r = horizontal_padding(Rect::new(0, 0, 3, 1));
        assert_eq!(r.width, 0);
    }

    #[test]
    fn row_inside_and_outside() {
        let area = Rect::new(1, 1, 10, 3);
        assert_eq!(row(area, 2), Some(Rect::new(1, 3, 10, 1)));
        assert_eq!(row(area, 3), None);
    }

    #[test]
    fn contains_edges() {
        let area = Rect::new(2, 2, 4, 2);
        assert!(contains(area, 2, 2));
        assert!(contains(area, 5, 3));
        assert!(!contains(area, 6, 3));
        assert!(!contains(area, 1, 2));
    }
}
