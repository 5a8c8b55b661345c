//! tint-core: headless model of the tintboard color picker.
//!
//! - **[color]**: [Rgb]/[Rgba], hex and CSS conversions, brightness.
//! - **[contrast]**: text color for a region background.
//! - **[palette]**: preset palettes and the default colors.
//! - **[region]**: the four dashboard regions and their styles.
//! - **[view_state]**: sliders, readouts, swatch, hex field, region styles as data.
//! - **[controller]**: [ThemeController], the user actions over [ViewState].

pub mod color;
pub mod contrast;
pub mod controller;
pub mod error;
pub mod palette;
pub mod region;
pub mod view_state;

pub use color::{Rgb, Rgba, brightness, component_to_hex, hex_to_rgb, rgb_to_hex};
pub use contrast::text_color_for;
pub use controller::{CatalogSwatch, HexCommit, ThemeController};
pub use error::{HexParseError, Result, TintError};
pub use palette::{DEFAULT_COLOR, DEFAULT_DASHBOARD, Palette, presets};
pub use region::{Background, Region, RegionStyle};
pub use view_state::{Channel, Readouts, Sliders, ViewState};
