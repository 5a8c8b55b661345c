//! The theme controller: every user action on the picker, applied to [ViewState].
//!
//! Front ends call these methods from their input handlers and redraw from
//! [ThemeController::state]. Nothing here touches a terminal or a clipboard.

use tracing::{debug, warn};

use crate::color::{Rgb, Rgba, hex_to_rgb};
use crate::error::{Result, TintError};
use crate::palette::{DEFAULT_DASHBOARD, Palette, presets};
use crate::region::{Background, Region};
use crate::view_state::{Channel, HexFieldWrite, Sliders, ViewState};

/// One clickable entry of the palette catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogSwatch {
    /// Position in the catalog, passed back to [ThemeController::apply_catalog_entry].
    pub index: usize,
    /// Tooltip, `"Apply <name>"`.
    pub title: String,
    /// Color bands in slot order; `None` where the palette hex is malformed.
    pub bands: [Option<Rgb>; 4],
}

/// What a hex field commit did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HexCommit {
    /// Parsed; sliders now hold this color.
    Applied(Rgb),
    /// Rejected; the field was restored from the sliders.
    Reverted,
}

#[derive(Debug, Clone)]
pub struct ThemeController {
    state: ViewState,
    catalog: Vec<Palette>,
    swatches: Vec<CatalogSwatch>,
    /// Hex field text when it gained focus; a blur commits only if it changed.
    hex_at_focus: Option<String>,
}

impl ThemeController {
    /// Start up with `catalog`: render the swatches, then reset to the dashboard default.
    pub fn new(catalog: Vec<Palette>) -> Self {
        let mut controller = Self {
            state: ViewState::default(),
            catalog,
            swatches: Vec::new(),
            hex_at_focus: None,
        };
        controller.render_catalog();
        controller.reset_to_default();
        debug!(palettes = controller.catalog.len(), "theme controller started");
        controller
    }

    /// Start up with the built-in presets.
    pub fn with_presets() -> Self {
        Self::new(presets())
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn catalog(&self) -> &[Palette] {
        &self.catalog
    }

    pub fn swatches(&self) -> &[CatalogSwatch] {
        &self.swatches
    }

    // ---- Sliders

    /// Slider input: move one slider and repaint.
    pub fn set_channel(&mut self, channel: Channel, value: f64) {
        self.state.sliders.set(channel, value);
        self.update_from_sliders();
    }

    /// Move a slider by `steps` increments (negative moves down).
    pub fn nudge_channel(&mut self, channel: Channel, steps: i32) {
        let value = self.state.sliders.get(channel) + f64::from(steps) * channel.step();
        self.set_channel(channel, value);
    }

    /// Re-derive everything from the slider positions. Slider mode is one global
    /// color: all four regions get the same translucent background.
    pub fn update_from_sliders(&mut self) {
        let color = self.state.sliders.rgba();
        self.state.show_color(color, HexFieldWrite::UnlessEditing);
        for region in Region::ALL {
            self.state.paint(region, Background::Translucent(color));
        }
        debug!(color = %color.css(), "sliders applied to all regions");
    }

    // ---- Palettes

    /// Rebuild the catalog swatches from scratch.
    pub fn render_catalog(&mut self) {
        self.swatches = self
            .catalog
            .iter()
            .enumerate()
            .map(|(index, palette)| CatalogSwatch {
                index,
                title: format!("Apply {}", palette.name),
                bands: Region::ALL.map(|region| palette.color_for(region)),
            })
            .collect();
    }

    /// Click on a catalog swatch.
    pub fn apply_catalog_entry(&mut self, index: usize) -> Result<()> {
        let palette = self
            .catalog
            .get(index)
            .cloned()
            .ok_or_else(|| TintError::UnknownPalette(format!("#{}", index + 1)))?;
        self.apply_palette(&palette);
        Ok(())
    }

    /// Apply by name (case-insensitive).
    pub fn apply_named(&mut self, name: &str) -> Result<()> {
        let palette = crate::palette::find(&self.catalog, name)
            .cloned()
            .ok_or_else(|| TintError::UnknownPalette(name.to_string()))?;
        self.apply_palette(&palette);
        Ok(())
    }

    /// Header color goes to the controls at full opacity; each slot color goes
    /// opaque to its own region. Malformed slots are skipped.
    pub fn apply_palette(&mut self, palette: &Palette) {
        if let Some(header) = palette.color_for(Region::Header) {
            self.state.sliders = Sliders::from_rgba(Rgba::opaque(header));
            self.state
                .show_color(Rgba::opaque(header), HexFieldWrite::UnlessEditing);
        }

        for region in Region::ALL {
            match palette.color_for(region) {
                Some(rgb) => self.state.paint(region, Background::Opaque(rgb)),
                None => warn!(
                    palette = %palette.name,
                    region = %region,
                    hex = %palette.hex_for(region),
                    "skipping malformed palette color"
                ),
            }
        }
        debug!(palette = %palette.name, "palette applied");
    }

    // ---- Hex field

    /// The hex field gained focus: programmatic updates stop overwriting it.
    pub fn focus_hex_field(&mut self) {
        self.state.has_pending_user_edit = true;
        self.hex_at_focus = Some(self.state.hex_field.clone());
    }

    /// The user changed the field text.
    pub fn edit_hex_field(&mut self, text: impl Into<String>) {
        self.state.hex_field = text.into();
    }

    /// The hex field lost focus. Commits only when the text changed since focus.
    pub fn blur_hex_field(&mut self) -> Option<HexCommit> {
        self.state.has_pending_user_edit = false;
        let before = self.hex_at_focus.take();
        if before.as_deref() == Some(self.state.hex_field.as_str()) {
            return None;
        }
        let text = self.state.hex_field.clone();
        Some(self.commit_hex(&text))
    }

    /// Commit typed text. Valid hex moves the RGB sliders (alpha untouched);
    /// anything else restores the field from the sliders.
    pub fn commit_hex(&mut self, raw: &str) -> HexCommit {
        let input = raw.trim();
        // the text now matches what the field commits, so a later blur is a no-op
        if self.hex_at_focus.is_some() {
            self.hex_at_focus = Some(self.state.hex_field.clone());
        }
        match hex_to_rgb(input) {
            Ok(rgb) => {
                self.state.sliders.set_rgb(rgb);
                self.update_from_sliders();
                HexCommit::Applied(rgb)
            }
            Err(e) => {
                debug!(input = %input, error = %e, "hex input rejected, restoring field");
                self.state.hex_field = self.state.sliders.rgb().to_hex();
                if self.hex_at_focus.is_some() {
                    self.hex_at_focus = Some(self.state.hex_field.clone());
                }
                HexCommit::Reverted
            }
        }
    }

    // ---- Copy / reset

    /// The rgba part of the code display, for the clipboard.
    pub fn copy_text(&self) -> String {
        let display = &self.state.code_display;
        display
            .split('/')
            .next()
            .unwrap_or(display)
            .trim()
            .to_string()
    }

    /// Apply the dashboard default palette, then pin the controls to the default
    /// header color with its own alpha. The hex field is overwritten even mid-edit.
    pub fn reset_to_default(&mut self) {
        self.apply_palette(&DEFAULT_DASHBOARD.to_palette());

        let header = DEFAULT_DASHBOARD.header;
        self.state.sliders = Sliders::from_rgba(header);
        self.state.show_color(self.state.sliders.rgba(), HexFieldWrite::Always);
        if self.hex_at_focus.is_some() {
            self.hex_at_focus = Some(self.state.hex_field.clone());
        }
        debug!("reset to default dashboard theme");
    }
}

impl Default for ThemeController {
    fn default() -> Self {
        Self::with_presets()
    }
}
