//! Shared utilities for the tintboard TUI.
//!
//! - **[constants]**: Spacing, padding, and sizing constants.
//! - **[layout]**: Rect padding, single rows, hit testing.
//! - **[format]**: Truncation and slider fill for fixed-width text.

mod constants;
mod format;
mod layout;

pub use constants::*;
pub use format::{slider_fill, truncate_ellipsis, truncate_with_suffix};
pub use layout::{contains, horizontal_padding, horizontal_padding_with, padding, row};
