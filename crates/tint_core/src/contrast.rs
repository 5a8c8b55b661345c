//! Readable text color for a region background.
//!
//! A luminance threshold, not a WCAG contrast-ratio computation.

use crate::color::Rgb;
use crate::region::Region;

/// Dark text for light backgrounds (#333333).
pub const DARK_TEXT: Rgb = Rgb(0x33, 0x33, 0x33);
/// Softer dark text used on darker main-content backgrounds (#555555).
pub const MUTED_DARK_TEXT: Rgb = Rgb(0x55, 0x55, 0x55);
/// Light text for dark backgrounds (#FFFFFF).
pub const LIGHT_TEXT: Rgb = Rgb::WHITE;

/// Text color for `region` painted with `rgb` at `alpha`.
///
/// - main content above 0.8 alpha always gets dark text, assuming the area is light
///   (ad hoc: applies to no other region);
/// - below 0.4 alpha the page shows through, so text is dark;
/// - otherwise dark text above brightness 128, light text at or below.
pub fn text_color_for(region: Region, rgb: Rgb, alpha: f64) -> Rgb {
    let brightness = rgb.brightness();
    if region == Region::MainContent && alpha > 0.8 {
        if brightness > 180.0 {
            DARK_TEXT
        } else {
            MUTED_DARK_TEXT
        }
    } else if alpha < 0.4 {
        DARK_TEXT
    } else if brightness > 128.0 {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_background_gets_light_text() {
        assert_eq!(text_color_for(Region::Header, Rgb(43, 49, 59), 1.0), LIGHT_TEXT);
        assert_eq!(text_color_for(Region::ActionButton, Rgb::BLACK, 0.5), LIGHT_TEXT);
    }

    #[test]
    fn light_background_gets_dark_text() {
        assert_eq!(text_color_for(Region::Sidebar, Rgb::WHITE, 1.0), DARK_TEXT);
    }

    #[test]
    fn brightness_threshold_is_exclusive() {
        // brightness of (128,128,128) is exactly 128
        assert_eq!(text_color_for(Region::Header, Rgb(128, 128, 128), 1.0), LIGHT_TEXT);
        assert_eq!(text_color_for(Region::Header, Rgb(129, 129, 129), 1.0), DARK_TEXT);
    }

    #[test]
    fn low_alpha_forces_dark_text() {
        assert_eq!(text_color_for(Region::Header, Rgb::BLACK, 0.39), DARK_TEXT);
        assert_eq!(text_color_for(Region::MainContent, Rgb::BLACK, 0.2), DARK_TEXT);
        assert_eq!(text_color_for(Region::Header, Rgb::BLACK, 0.4), LIGHT_TEXT);
    }

    #[test]
    fn opaque_main_content_stays_dark() {
        assert_eq!(text_color_for(Region::MainContent, Rgb(245, 245, 245), 1.0), DARK_TEXT);
        assert_eq!(text_color_for(Region::MainContent, Rgb::BLACK, 1.0), MUTED_DARK_TEXT);
        assert_eq!(text_color_for(Region::MainContent, Rgb(180, 180, 180), 0.81), MUTED_DARK_TEXT);
    }

    #[test]
    fn main_content_at_point_eight_uses_general_rule() {
        assert_eq!(text_color_for(Region::MainContent, Rgb::BLACK, 0.8), LIGHT_TEXT);
    }
}
