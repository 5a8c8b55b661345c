//! Color values and conversions: hex strings, CSS notations, brightness.
//!
//! [Rgb] is the opaque triplet used everywhere (regions, palettes, text colors).
//! [Rgba] adds the slider alpha. Hex output is always `#RRGGBB` uppercase.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::HexParseError;

/// RGB triplet, one byte per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }

    pub fn r(self) -> u8 {
        self.0
    }
    pub fn g(self) -> u8 {
        self.1
    }
    pub fn b(self) -> u8 {
        self.2
    }

    /// Tuple for ratatui/crossterm: `(r, g, b)`.
    pub fn tuple(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }

    /// `#RRGGBB`, uppercase.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.0, self.1, self.2)
    }

    /// CSS `rgb(r, g, b)`.
    pub fn css(self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }

    /// Luma-weighted brightness, see [brightness].
    pub fn brightness(self) -> f64 {
        brightness(self.0, self.1, self.2)
    }

    /// Same color with the given alpha.
    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba::new(self, alpha)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        c.tuple()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// JSON output shows colors the way users type them.
impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl std::str::FromStr for Rgb {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}

/// RGB plus opacity. Alpha is kept in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgba {
    /// Build a color; alpha is clamped to `0.0..=1.0` (NaN becomes 0).
    pub fn new(rgb: Rgb, alpha: f64) -> Self {
        let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        Self { rgb, alpha }
    }

    pub fn opaque(rgb: Rgb) -> Self {
        Self { rgb, alpha: 1.0 }
    }

    /// CSS `rgba(r, g, b, a)`; alpha in shortest decimal form (`1`, `0.5`).
    pub fn css(&self) -> String {
        let Rgb(r, g, b) = self.rgb;
        format!("rgba({}, {}, {}, {})", r, g, b, self.alpha)
    }

    /// Source-over blend onto an opaque backdrop. Terminals cannot show alpha,
    /// so translucent backgrounds are flattened against the page color first.
    pub fn composite_over(&self, backdrop: Rgb) -> Rgb {
        let mix = |src: u8, dst: u8| -> u8 {
            let v = f64::from(src) * self.alpha + f64::from(dst) * (1.0 - self.alpha);
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb(
            mix(self.rgb.0, backdrop.0),
            mix(self.rgb.1, backdrop.1),
            mix(self.rgb.2, backdrop.2),
        )
    }
}

/// Two-digit uppercase hex for one channel.
pub fn component_to_hex(c: u8) -> String {
    format!("{:02X}", c)
}

/// `#RRGGBB`, uppercase.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!(
        "#{}{}{}",
        component_to_hex(r),
        component_to_hex(g),
        component_to_hex(b)
    )
}

/// Parse `#RGB`, `#RRGGBB` (the `#` is optional, digits are case-insensitive).
///
/// Shorthand is expanded by doubling each digit, so `#abc` is `#aabbcc`.
/// Surrounding whitespace is not trimmed here; the hex field commit does that.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, HexParseError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.is_empty() {
        return Err(HexParseError::Empty);
    }

    let mut nibbles = Vec::with_capacity(6);
    for c in digits.chars() {
        let n = c.to_digit(16).ok_or(HexParseError::InvalidDigit(c))?;
        nibbles.push(n as u8);
    }

    match nibbles.as_slice() {
        [r, g, b] => Ok(Rgb(r * 17, g * 17, b * 17)),
        [r1, r2, g1, g2, b1, b2] => Ok(Rgb(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2)),
        other => Err(HexParseError::InvalidLength(other.len())),
    }
}

/// Perceived brightness `(299r + 587g + 114b) / 1000`, in `0.0..=255.0`.
pub fn brightness(r: u8, g: u8, b: u8) -> f64 {
    (f64::from(r) * 299.0 + f64::from(g) * 587.0 + f64::from(b) * 114.0) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_to_hex_pads() {
        assert_eq!(component_to_hex(0), "00");
        assert_eq!(component_to_hex(9), "09");
        assert_eq!(component_to_hex(171), "AB");
        assert_eq!(component_to_hex(255), "FF");
    }

    #[test]
    fn rgb_to_hex_uppercase() {
        assert_eq!(rgb_to_hex(43, 49, 59), "#2B313B");
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(Rgb(38, 166, 154).to_hex(), "#26A69A");
    }

    #[test]
    fn hex_to_rgb_six_digits() {
        assert_eq!(hex_to_rgb("#2B313B"), Ok(Rgb(43, 49, 59)));
        assert_eq!(hex_to_rgb("2b313b"), Ok(Rgb(43, 49, 59)));
    }

    #[test]
    fn hex_to_rgb_shorthand() {
        assert_eq!(hex_to_rgb("#abc"), Ok(Rgb(0xAA, 0xBB, 0xCC)));
        assert_eq!(hex_to_rgb("FFF"), Ok(Rgb::WHITE));
    }

    #[test]
    fn hex_to_rgb_rejects() {
        assert_eq!(hex_to_rgb(""), Err(HexParseError::Empty));
        assert_eq!(hex_to_rgb("#"), Err(HexParseError::Empty));
        assert_eq!(hex_to_rgb("#12"), Err(HexParseError::InvalidLength(2)));
        assert_eq!(hex_to_rgb("#1234"), Err(HexParseError::InvalidLength(4)));
        assert_eq!(hex_to_rgb("zzz"), Err(HexParseError::InvalidDigit('z')));
        assert!(hex_to_rgb("notacolor").is_err());
        assert!(hex_to_rgb("##abc").is_err());
        assert!(hex_to_rgb("+f+f+f").is_err());
        assert!(hex_to_rgb(" #abc").is_err());
    }

    #[test]
    fn brightness_extremes() {
        assert_eq!(brightness(255, 255, 255), 255.0);
        assert_eq!(brightness(0, 0, 0), 0.0);
        assert!(brightness(0, 255, 0) > brightness(255, 0, 0));
    }

    #[test]
    fn rgba_css_formats_alpha() {
        assert_eq!(Rgba::new(Rgb(200, 10, 10), 0.5).css(), "rgba(200, 10, 10, 0.5)");
        assert_eq!(Rgba::opaque(Rgb(1, 2, 3)).css(), "rgba(1, 2, 3, 1)");
        assert_eq!(Rgb(1, 2, 3).css(), "rgb(1, 2, 3)");
    }

    #[test]
    fn rgba_clamps_alpha() {
        assert_eq!(Rgba::new(Rgb::BLACK, 1.7).alpha, 1.0);
        assert_eq!(Rgba::new(Rgb::BLACK, -0.2).alpha, 0.0);
        assert_eq!(Rgba::new(Rgb::BLACK, f64::NAN).alpha, 0.0);
    }

    #[test]
    fn composite_over_backdrop() {
        let half_black = Rgba::new(Rgb::BLACK, 0.5);
        assert_eq!(half_black.composite_over(Rgb::WHITE), Rgb(128, 128, 128));
        assert_eq!(Rgba::opaque(Rgb(10, 20, 30)).composite_over(Rgb::WHITE), Rgb(10, 20, 30));
        assert_eq!(Rgba::new(Rgb(10, 20, 30), 0.0).composite_over(Rgb::WHITE), Rgb::WHITE);
    }

    #[test]
    fn serializes_as_hex() {
        let json = serde_json::to_string(&Rgb(74, 84, 98)).unwrap();
        assert_eq!(json, "\"#4A5462\"");
    }
}
