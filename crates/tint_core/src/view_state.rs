//! Everything the picker shows, as plain data.
//!
//! [ViewState] stands in for the live controls: slider positions, their numeric
//! readouts, the swatch, the combined color code, the hex field, and the four
//! region styles. Front ends read it to draw; only [crate::ThemeController]
//! mutates it.

use crate::color::{Rgb, Rgba};
use crate::contrast::text_color_for;
use crate::palette::DEFAULT_COLOR;
use crate::region::{Background, Region, RegionStyle};

/// Alpha slider granularity.
pub const ALPHA_STEP: f64 = 0.01;

/// One of the four sliders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
            Channel::Alpha => "A",
        }
    }

    /// Value change for one slider step.
    pub fn step(self) -> f64 {
        match self {
            Channel::Alpha => ALPHA_STEP,
            _ => 1.0,
        }
    }

    /// Upper bound of the slider range (lower bound is 0).
    pub fn max(self) -> f64 {
        match self {
            Channel::Alpha => 1.0,
            _ => 255.0,
        }
    }
}

/// Slider positions. Channels are whole numbers, alpha sits on the 0.01 grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sliders {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Sliders {
    pub fn from_rgba(color: Rgba) -> Self {
        let Rgb(red, green, blue) = color.rgb;
        Self {
            red,
            green,
            blue,
            alpha: quantize_alpha(color.alpha),
        }
    }

    pub fn rgb(&self) -> Rgb {
        Rgb(self.red, self.green, self.blue)
    }

    pub fn rgba(&self) -> Rgba {
        Rgba::new(self.rgb(), self.alpha)
    }

    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => f64::from(self.red),
            Channel::Green => f64::from(self.green),
            Channel::Blue => f64::from(self.blue),
            Channel::Alpha => self.alpha,
        }
    }

    /// Move a slider, clamping to its range. Channels round to the nearest integer.
    pub fn set(&mut self, channel: Channel, value: f64) {
        let value = if value.is_nan() { 0.0 } else { value };
        match channel {
            Channel::Red => self.red = to_channel(value),
            Channel::Green => self.green = to_channel(value),
            Channel::Blue => self.blue = to_channel(value),
            Channel::Alpha => self.alpha = quantize_alpha(value),
        }
    }

    /// Replace red, green and blue, leaving alpha where it is.
    pub fn set_rgb(&mut self, rgb: Rgb) {
        self.red = rgb.0;
        self.green = rgb.1;
        self.blue = rgb.2;
    }
}

fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn quantize_alpha(alpha: f64) -> f64 {
    if alpha.is_nan() {
        return 0.0;
    }
    let steps = (alpha.clamp(0.0, 1.0) / ALPHA_STEP).round();
    // divide instead of multiplying by the step so 0.3 prints as 0.3
    steps / (1.0 / ALPHA_STEP).round()
}

/// Numeric labels next to each slider.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Readouts {
    pub red: String,
    pub green: String,
    pub blue: String,
    /// Always two decimals, e.g. `0.50`.
    pub alpha: String,
}

impl Readouts {
    pub fn for_color(color: Rgba) -> Self {
        Self {
            red: color.rgb.0.to_string(),
            green: color.rgb.1.to_string(),
            blue: color.rgb.2.to_string(),
            alpha: format!("{:.2}", color.alpha),
        }
    }

    pub fn get(&self, channel: Channel) -> &str {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
            Channel::Alpha => &self.alpha,
        }
    }
}

/// When a programmatic update may replace the hex field's text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HexFieldWrite {
    /// Only if the user is not editing it.
    UnlessEditing,
    Always,
}

/// The full visible state of the picker.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub sliders: Sliders,
    pub readouts: Readouts,
    /// Live swatch background.
    pub swatch: Rgba,
    /// `"rgba(r, g, b, a) / #RRGGBB"`.
    pub code_display: String,
    /// Hex text field content.
    pub hex_field: String,
    /// True while the hex field has focus; programmatic updates leave it alone.
    pub has_pending_user_edit: bool,
    /// Region styles in slot order.
    pub regions: [RegionStyle; 4],
}

impl Default for ViewState {
    /// Controls at [DEFAULT_COLOR] with every region painted from the sliders.
    fn default() -> Self {
        let sliders = Sliders::from_rgba(DEFAULT_COLOR);
        let color = sliders.rgba();
        let mut state = Self {
            sliders,
            readouts: Readouts::default(),
            swatch: color,
            code_display: String::new(),
            hex_field: String::new(),
            has_pending_user_edit: false,
            regions: Region::ALL.map(|region| RegionStyle {
                background: Background::Translucent(color),
                text: text_color_for(region, color.rgb, color.alpha),
            }),
        };
        state.show_color(color, HexFieldWrite::Always);
        state
    }
}

impl ViewState {
    pub fn region(&self, region: Region) -> &RegionStyle {
        &self.regions[region.slot()]
    }

    /// Readouts, swatch, code display and (per `hex`) the hex field for `color`.
    /// Sliders are not touched.
    pub(crate) fn show_color(&mut self, color: Rgba, hex: HexFieldWrite) {
        let hex_color = color.rgb.to_hex();
        self.readouts = Readouts::for_color(color);
        self.swatch = color;
        self.code_display = format!("{} / {}", color.css(), hex_color);
        if hex == HexFieldWrite::Always || !self.has_pending_user_edit {
            self.hex_field = hex_color;
        }
    }

    /// Paint a region and pick its text color.
    pub(crate) fn paint(&mut self, region: Region, background: Background) {
        self.regions[region.slot()] = RegionStyle {
            background,
            text: text_color_for(region, background.rgb(), background.alpha()),
        };
    }
}
