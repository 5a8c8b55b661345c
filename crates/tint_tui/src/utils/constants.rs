//! TUI spacing and sizing constants.
//!
//! Use these when building layout or rendering so padding and spacing stay uniform.

/// Horizontal padding in characters (each side).
pub const HORIZONTAL_PADDING: u16 = 2;

/// Width of the controls column (sliders, hex field, buttons) including its border.
pub const CONTROLS_WIDTH: u16 = 46;

/// Height of the palette strip including its border.
pub const PALETTE_STRIP_HEIGHT: u16 = 4;

/// Width of one palette swatch in the strip (bands + gap).
pub const SWATCH_WIDTH: u16 = 16;

/// Max characters typed into the hex field.
pub const HEX_FIELD_MAX_LEN: usize = 16;

/// Minimum terminal size the main screen is laid out for.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;
