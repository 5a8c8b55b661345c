//! Chrome theme: colors for the picker's own frame (borders, labels, focus).
//!
//! These never change with the edited color; the edited color only paints the
//! swatch, the palette bands and the dashboard preview.
//!
//! # Example
//!
//! ```ignore
//! use tint_tui::theme::{Appearance, ChromePalette};
//!
//! let chrome = ChromePalette::for_appearance(Appearance::Light);
//! let text = chrome.text.tuple(); // (r, g, b) for ratatui
//! ```

mod appearance;
mod palette;

pub use appearance::Appearance;
pub use palette::ChromePalette;
