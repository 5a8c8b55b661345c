//! Chrome palette: semantic color roles for the frame around the picker.

use tint_core::Rgb;

use super::Appearance;

/// One full chrome palette for an appearance (dark or light). All colors are semantic roles.
#[derive(Clone, Debug, PartialEq)]
pub struct ChromePalette {
    // --- Surfaces
    /// App / window background.
    pub background: Rgb,
    /// Panel background.
    pub surface_background: Rgb,
    /// Page color behind the dashboard preview; translucent region colors blend onto it.
    pub preview_backdrop: Rgb,

    // --- Borders
    pub border: Rgb,
    pub border_focused: Rgb,

    // --- Text
    pub text: Rgb,
    pub text_muted: Rgb,
    pub text_accent: Rgb,

    // --- Sliders
    pub slider_red: Rgb,
    pub slider_green: Rgb,
    pub slider_blue: Rgb,
    pub slider_alpha: Rgb,
    pub slider_track: Rgb,

    // --- Buttons
    pub button_background: Rgb,
    pub button_focused_background: Rgb,

    // --- Semantic
    pub success: Rgb,
    pub danger: Rgb,

    // --- UI chrome
    pub status_bar_background: Rgb,
}

impl ChromePalette {
    /// Dark chrome.
    pub fn dark() -> Self {
        Self {
            background: Rgb(8, 8, 12),
            surface_background: Rgb(16, 17, 24),
            preview_backdrop: Rgb(255, 255, 255),
            border: Rgb(28, 30, 42),
            border_focused: Rgb(99, 148, 255),
            text: Rgb(200, 210, 245),
            text_muted: Rgb(70, 78, 110),
            text_accent: Rgb(99, 148, 255),
            slider_red: Rgb(255, 100, 120),
            slider_green: Rgb(120, 220, 120),
            slider_blue: Rgb(100, 160, 255),
            slider_alpha: Rgb(200, 210, 245),
            slider_track: Rgb(36, 40, 59),
            button_background: Rgb(26, 27, 38),
            button_focused_background: Rgb(36, 40, 59),
            success: Rgb(120, 220, 120),
            danger: Rgb(255, 100, 120),
            status_bar_background: Rgb(16, 17, 24),
        }
    }

    /// Light chrome.
    pub fn light() -> Self {
        Self {
            background: Rgb(255, 255, 255),
            surface_background: Rgb(255, 255, 255),
            preview_backdrop: Rgb(255, 255, 255),
            border: Rgb(229, 229, 229),
            border_focused: Rgb(122, 162, 247),
            text: Rgb(26, 27, 38),
            text_muted: Rgb(86, 95, 137),
            text_accent: Rgb(122, 162, 247),
            slider_red: Rgb(223, 81, 76),
            slider_green: Rgb(76, 175, 80),
            slider_blue: Rgb(66, 133, 244),
            slider_alpha: Rgb(26, 27, 38),
            slider_track: Rgb(229, 229, 229),
            button_background: Rgb(244, 244, 245),
            button_focused_background: Rgb(229, 229, 229),
            success: Rgb(76, 175, 80),
            danger: Rgb(223, 81, 76),
            status_bar_background: Rgb(255, 255, 255),
        }
    }

    /// Palette for the given appearance.
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::dark(),
            Appearance::Light => Self::light(),
        }
    }
}

impl Default for ChromePalette {
    fn default() -> Self {
        Self::dark()
    }
}
