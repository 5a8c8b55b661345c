//! Preset palettes and default colors.
//!
//! A palette is four hex colors in region slot order: header, sidebar, main, action.

use serde::Serialize;

use crate::color::{Rgb, Rgba, hex_to_rgb, rgb_to_hex};
use crate::region::Region;

/// Generic mid-gray the sliders hold before the dashboard default is applied.
pub const DEFAULT_COLOR: Rgba = Rgba {
    rgb: Rgb(128, 128, 128),
    alpha: 1.0,
};

/// Per-region defaults for the dashboard, used by reset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashboardDefaults {
    pub header: Rgba,
    pub sidebar: Rgba,
    pub main: Rgba,
    pub action: Rgba,
}

impl DashboardDefaults {
    /// The defaults as a palette named "Default".
    pub fn to_palette(&self) -> Palette {
        let hex = |c: Rgba| rgb_to_hex(c.rgb.0, c.rgb.1, c.rgb.2);
        Palette {
            name: "Default".to_string(),
            colors: [
                hex(self.header),
                hex(self.sidebar),
                hex(self.main),
                hex(self.action),
            ],
        }
    }
}

pub const DEFAULT_DASHBOARD: DashboardDefaults = DashboardDefaults {
    // #2B313B
    header: Rgba {
        rgb: Rgb(43, 49, 59),
        alpha: 1.0,
    },
    // #4A5462
    sidebar: Rgba {
        rgb: Rgb(74, 84, 98),
        alpha: 1.0,
    },
    // #F5F5F5, light so main content text stays dark
    main: Rgba {
        rgb: Rgb(245, 245, 245),
        alpha: 1.0,
    },
    // #26A69A
    action: Rgba {
        rgb: Rgb(38, 166, 154),
        alpha: 1.0,
    },
};

/// A named set of four colors mapped onto the regions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub name: String,
    /// Hex strings in slot order: header, sidebar, main, action.
    pub colors: [String; 4],
}

impl Palette {
    pub fn new(name: impl Into<String>, colors: [&str; 4]) -> Self {
        Self {
            name: name.into(),
            colors: colors.map(str::to_string),
        }
    }

    /// Raw hex for a region's slot.
    pub fn hex_for(&self, region: Region) -> &str {
        &self.colors[region.slot()]
    }

    /// Parsed color for a region's slot; `None` if the preset hex is malformed.
    pub fn color_for(&self, region: Region) -> Option<Rgb> {
        hex_to_rgb(self.hex_for(region)).ok()
    }
}

/// The built-in catalog, in display order.
pub fn presets() -> Vec<Palette> {
    vec![
        Palette::new("Charcoal Teal", ["#2B313B", "#4A5462", "#F0F2F5", "#26A69A"]),
        Palette::new("Cream & Mint", ["#F5F0E1", "#A0D2DB", "#FFFFFF", "#00897B"]),
        Palette::new("Navy Beige", ["#1A237E", "#3949AB", "#FAF0E6", "#D7CCC8"]),
        Palette::new("Mono Light Dark", ["#F5F5F5", "#333333", "#FFFFFF", "#0D47A1"]),
        Palette::new("Oceanic Blues", ["#2C3E50", "#4A90E2", "#E9F3FF", "#A0D2DB"]),
        Palette::new("Coral Contrast", ["#FF7F50", "#34495E", "#FAFAFA", "#F0F0F0"]),
        Palette::new("Clear Sky", ["#4285F4", "#E0EFFF", "#FFFFFF", "#0D47A1"]),
        Palette::new("Forest Greens", ["#1B5E20", "#388E3C", "#F1F8E9", "#81C784"]),
    ]
}

/// Case-insensitive lookup by name.
pub fn find<'a>(catalog: &'a [Palette], name: &str) -> Option<&'a Palette> {
    catalog.iter().find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}
