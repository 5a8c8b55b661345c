//! Shortcut hint line at the bottom of the screen, context-aware.

use ratatui::text::{Line, Span};

use super::style::text_muted_style;
use crate::theme::ChromePalette;

/// What the shortcut line should describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintContext {
    Slider,
    HexField,
    Button,
    Palettes,
    Logs,
}

/// Build the shortcut line for the current focus.
pub fn shortcut_line(palette: &ChromePalette, context: HintContext) -> Line<'static> {
    let hint = match context {
        HintContext::Slider => "←→: adjust  ·  Shift: ×10  ·  Tab: next  ·  c: copy  ·  r: reset  ·  q: quit",
        HintContext::HexField => "Enter: apply  ·  Esc: revert  ·  Tab: next  ·  Ctrl+C: quit",
        HintContext::Button => "Enter: press  ·  Tab: next  ·  c: copy  ·  r: reset  ·  q: quit",
        HintContext::Palettes => "←→: select  ·  Enter/1-9: apply  ·  Tab: next  ·  q: quit",
        HintContext::Logs => "↑↓: scroll  ·  Ctrl+D: back  ·  q: quit",
    };
    Line::from(vec![Span::styled(hint.to_string(), text_muted_style(palette.text_muted))])
}
