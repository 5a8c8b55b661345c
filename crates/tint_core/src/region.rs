//! The four dashboard regions that receive colors, and what each one shows.

use std::fmt;

use serde::Serialize;

use crate::color::{Rgb, Rgba};

/// A themed area of the dashboard preview. Order matches palette slot order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Header,
    Sidebar,
    MainContent,
    ActionButton,
}

impl Region {
    /// All regions in palette slot order: header, sidebar, main, action.
    pub const ALL: [Region; 4] = [
        Region::Header,
        Region::Sidebar,
        Region::MainContent,
        Region::ActionButton,
    ];

    /// Palette slot for this region.
    pub fn slot(self) -> usize {
        match self {
            Region::Header => 0,
            Region::Sidebar => 1,
            Region::MainContent => 2,
            Region::ActionButton => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Region::Header => "Header",
            Region::Sidebar => "Sidebar",
            Region::MainContent => "Main content",
            Region::ActionButton => "Action button",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Background fill of a region. Slider mode paints translucent `rgba(...)`,
/// palette mode paints opaque `rgb(...)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Background {
    Translucent(Rgba),
    Opaque(Rgb),
}

impl Background {
    pub fn rgb(&self) -> Rgb {
        match self {
            Background::Translucent(c) => c.rgb,
            Background::Opaque(c) => *c,
        }
    }

    pub fn alpha(&self) -> f64 {
        match self {
            Background::Translucent(c) => c.alpha,
            Background::Opaque(_) => 1.0,
        }
    }

    /// CSS notation as the region would declare it.
    pub fn css(&self) -> String {
        match self {
            Background::Translucent(c) => c.css(),
            Background::Opaque(c) => c.css(),
        }
    }

    /// Color to actually paint on an opaque surface.
    pub fn flatten(&self, backdrop: Rgb) -> Rgb {
        match self {
            Background::Translucent(c) => c.composite_over(backdrop),
            Background::Opaque(c) => *c,
        }
    }
}

/// Background and text color of one region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionStyle {
    pub background: Background,
    pub text: Rgb,
}
