//! Behavior of the picker as a whole, driven through the controller.

use tint_core::{
    Background, Channel, HexCommit, Palette, Region, Rgb, Rgba, ThemeController, brightness,
    hex_to_rgb, rgb_to_hex,
};

#[test]
fn hex_round_trip() {
    for r in (0..=255u8).step_by(3) {
        for g in (0..=255u8).step_by(3) {
            for b in (0..=255u8).step_by(3) {
                assert_eq!(hex_to_rgb(&rgb_to_hex(r, g, b)), Ok(Rgb(r, g, b)));
            }
        }
    }
    for v in 0..=255u8 {
        assert_eq!(hex_to_rgb(&rgb_to_hex(v, 255 - v, v / 2)), Ok(Rgb(v, 255 - v, v / 2)));
    }
}

#[test]
fn shorthand_expands() {
    assert_eq!(hex_to_rgb("#abc"), hex_to_rgb("#aabbcc"));
    assert_eq!(hex_to_rgb("#ABC"), hex_to_rgb("aabbcc"));
}

#[test]
fn invalid_hex_rejected() {
    assert!(hex_to_rgb("").is_err());
    assert!(hex_to_rgb("#12").is_err());
    assert!(hex_to_rgb("notacolor").is_err());
}

#[test]
fn brightness_bounds() {
    assert!(brightness(255, 255, 255) > brightness(0, 0, 0));
    assert_eq!(brightness(255, 255, 255), 255.0);
    assert_eq!(brightness(0, 0, 0), 0.0);
}

#[test]
fn slider_change_paints_all_regions_alike() {
    let mut c = ThemeController::with_presets();
    c.set_channel(Channel::Red, 200.0);
    c.set_channel(Channel::Green, 10.0);
    c.set_channel(Channel::Blue, 10.0);
    c.set_channel(Channel::Alpha, 0.5);

    let expected = Background::Translucent(Rgba::new(Rgb(200, 10, 10), 0.5));
    for region in Region::ALL {
        let style = c.state().region(region);
        assert_eq!(style.background, expected);
        assert_eq!(style.background.css(), "rgba(200, 10, 10, 0.5)");
    }
    assert_eq!(c.state().code_display, "rgba(200, 10, 10, 0.5) / #C80A0A");
    assert_eq!(c.state().hex_field, "#C80A0A");
    assert_eq!(c.state().readouts.alpha, "0.50");
}

#[test]
fn palette_paints_each_region_opaque() {
    let mut c = ThemeController::with_presets();
    c.set_channel(Channel::Alpha, 0.2);
    let palette = Palette::new("Test", ["#102030", "#405060", "#F0F0F0", "#AA0000"]);
    c.apply_palette(&palette);

    let expected = [
        Rgb(0x10, 0x20, 0x30),
        Rgb(0x40, 0x50, 0x60),
        Rgb(0xF0, 0xF0, 0xF0),
        Rgb(0xAA, 0x00, 0x00),
    ];
    for (region, rgb) in Region::ALL.into_iter().zip(expected) {
        let style = c.state().region(region);
        assert_eq!(style.background, Background::Opaque(rgb));
        assert_eq!(style.background.css(), rgb.css());
    }

    let state = c.state();
    assert_eq!(state.sliders.rgb(), expected[0]);
    assert_eq!(state.sliders.alpha, 1.0);
    assert_eq!(state.swatch, Rgba::opaque(expected[0]));
    assert_eq!(state.hex_field, "#102030");
    assert_eq!(state.code_display, "rgba(16, 32, 48, 1) / #102030");
}

#[test]
fn palette_while_editing_keeps_field() {
    let mut c = ThemeController::with_presets();
    c.focus_hex_field();
    c.edit_hex_field("#00");
    c.apply_catalog_entry(1).unwrap();
    assert_eq!(c.state().hex_field, "#00");
    assert_eq!(c.state().sliders.rgb(), Rgb(0xF5, 0xF0, 0xE1));
}

#[test]
fn reset_is_idempotent() {
    let mut c = ThemeController::with_presets();
    c.set_channel(Channel::Blue, 3.0);
    c.apply_catalog_entry(4).unwrap();
    c.reset_to_default();
    let first = c.state().clone();
    c.reset_to_default();
    assert_eq!(c.state(), &first);
    assert_eq!(first, ThemeController::with_presets().state().clone());
}

#[test]
fn invalid_hex_commit_restores_field() {
    let mut c = ThemeController::with_presets();
    c.set_channel(Channel::Green, 99.0);
    let sliders = c.state().sliders;
    c.focus_hex_field();
    c.edit_hex_field("zzz");
    assert_eq!(c.blur_hex_field(), Some(HexCommit::Reverted));
    assert_eq!(c.state().sliders, sliders);
    assert_eq!(c.state().hex_field, sliders.rgb().to_hex());
    assert_eq!(c.state().hex_field, "#2B633B");
}

#[test]
fn sliders_leave_field_alone_while_editing() {
    let mut c = ThemeController::with_presets();
    c.focus_hex_field();
    c.edit_hex_field("#4");
    c.nudge_channel(Channel::Red, 1);
    assert_eq!(c.state().hex_field, "#4");
    assert!(c.state().code_display.ends_with("#2C313B"));

    c.edit_hex_field("#2B313B");
    c.blur_hex_field();
    assert_eq!(c.state().hex_field, "#2B313B");
}

#[test]
fn enter_commit_then_blur_is_single_commit() {
    let mut c = ThemeController::with_presets();
    c.focus_hex_field();
    c.edit_hex_field("#abc");
    assert_eq!(c.commit_hex("#abc"), HexCommit::Applied(Rgb(0xAA, 0xBB, 0xCC)));
    // still focused: field keeps what the user typed
    assert_eq!(c.state().hex_field, "#abc");
    assert_eq!(c.blur_hex_field(), None);
}
