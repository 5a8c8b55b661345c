//! Layout components built from [crate::utils] and [crate::theme].
//!
//! - **[split]**: Split the screen into header, controls, preview, palettes, shortcut.
//! - **[panel]**: Bordered panel with inner padded rect and chrome-backed block.
//! - **[style]**: Map [tint_core::Rgb] to ratatui [Style](ratatui::style::Style)/[Color](ratatui::style::Color).
//! - **[head]**: Header strip with status dot.
//! - **[shortcut]**: Shortcut hint line.

mod head;
mod panel;
mod shortcut;
mod split;
mod style;

pub use head::{HEADER_STATUS_READY, HEADER_TITLE, header_line, render_header};
pub use panel::{PanelLayout, block_for_panel};
pub use shortcut::{HintContext, shortcut_line};
pub use split::{FOOTER_HEIGHT, HEADER_HEIGHT, MainSplits, horizontal_split, main_splits, vertical_split};
pub use style::{background_style, border_style, filled_style, rgb_to_color, text_muted_style, text_style};
