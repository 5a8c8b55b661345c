//! tint-tui: terminal front end for tintboard.
//!
//! Theming in `theme`; layout in `layouts`; state and view in [state] and [view].
//! The color logic lives in [tint_core::ThemeController]; this crate draws it and
//! turns keys and clicks into controller calls. Run with [run_tui].

pub mod clipboard;
pub mod layouts;
pub mod run;
pub mod state;
pub mod theme;
pub mod utils;
pub mod view;

pub use clipboard::{ClipboardWriter, SystemClipboard};
pub use run::{Action, TuiOptions, handle_key, handle_mouse, run_tui};
pub use state::{Focus, Hit, Screen, TuiState};
pub use theme::Appearance;
pub use view::draw as draw_view;
