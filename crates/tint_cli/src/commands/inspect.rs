//! `tintboard inspect <HEX>`: channels, brightness and per-region text color.

use anyhow::{Context, Result};
use serde::Serialize;
use tint_core::{Region, Rgb, hex_to_rgb, text_color_for};

use crate::output;

#[derive(Debug, Serialize)]
pub struct RegionText {
    pub region: Region,
    /// Text color at full opacity.
    pub text: Rgb,
}

#[derive(Debug, Serialize)]
pub struct Inspection {
    pub hex: Rgb,
    pub rgb: String,
    pub rgba: String,
    pub brightness: f64,
    pub regions: Vec<RegionText>,
}

/// Parse `input` and work out what the picker would show for it at alpha 1.
pub fn inspect(input: &str) -> Result<Inspection> {
    let rgb = hex_to_rgb(input.trim()).with_context(|| format!("cannot inspect {:?}", input))?;
    Ok(Inspection {
        hex: rgb,
        rgb: rgb.css(),
        rgba: rgb.with_alpha(1.0).css(),
        brightness: rgb.brightness(),
        regions: Region::ALL
            .iter()
            .map(|&region| RegionText {
                region,
                text: text_color_for(region, rgb, 1.0),
            })
            .collect(),
    })
}

pub fn handle(input: &str) -> Result<()> {
    let inspection = inspect(input)?;
    if !output::is_text() {
        output::data("color", &inspection);
        return Ok(());
    }

    output::header(&format!("Color {}", inspection.hex));
    output::kv("rgb", &inspection.rgb);
    output::kv("rgba", &inspection.rgba);
    output::kv("brightness", &format!("{:.1}", inspection.brightness));

    let mut table = output::table();
    output::table_header(&mut table, &["Region", "Text color"]);
    for entry in &inspection.regions {
        table.add_row(vec![
            comfy_table::Cell::new(entry.region.label()),
            output::color_cell(&entry.text.to_hex(), Some(entry.text)),
        ]);
    }
    println!("{table}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspects_teal() {
        let i = inspect("#26A69A").unwrap();
        assert_eq!(i.rgb, "rgb(38, 166, 154)");
        assert_eq!(i.rgba, "rgba(38, 166, 154, 1)");
        assert!((i.brightness - 126.36).abs() < 1e-9);
        let texts: Vec<String> = i.regions.iter().map(|r| r.text.to_hex()).collect();
        // brightness 126.36: light text, except main content which stays dark
        assert_eq!(texts, ["#FFFFFF", "#FFFFFF", "#555555", "#FFFFFF"]);
    }

    #[test]
    fn accepts_shorthand_and_whitespace() {
        let i = inspect(" fff ").unwrap();
        assert_eq!(i.hex, Rgb::WHITE);
        assert_eq!(i.regions[2].text.to_hex(), "#333333");
    }

    #[test]
    fn rejects_garbage() {
        let err = inspect("notacolor").unwrap_err();
        assert!(format!("{:#}", err).contains("cannot inspect"));
    }

    #[test]
    fn serializes_hex_strings() {
        let json = serde_json::to_value(inspect("#000").unwrap()).unwrap();
        assert_eq!(json["hex"], "#000000");
        assert_eq!(json["regions"][0]["region"], "header");
        assert_eq!(json["regions"][0]["text"], "#FFFFFF");
    }
}
