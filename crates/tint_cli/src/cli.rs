//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};
use tint_tui::Appearance;

/// Color picker that themes a dashboard mock-up live in the terminal
#[derive(Parser, Debug)]
#[command(name = "tintboard", about, version, propagate_version = true)]
pub struct Cli {
    /// Defaults to `tui` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,

    /// Log filter, e.g. "debug" or "tint_core=debug". Overrides TINTBOARD_LOG and RUST_LOG.
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// One JSON object per line for scripts
    Json,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Run the interactive picker
    Tui {
        /// Chrome appearance: dark or light. Uses TINTBOARD_APPEARANCE if not set.
        #[arg(long)]
        appearance: Option<Appearance>,
        /// Start with this preset palette applied instead of the default dashboard
        #[arg(long)]
        palette: Option<String>,
    },
    /// List the preset palettes
    Palettes,
    /// Show a color's channels, brightness and the text color each region would use
    Inspect {
        /// Hex color, e.g. #26A69A or 3f3
        hex: String,
    },
}

impl Cli {
    /// The subcommand to run; no subcommand means the TUI.
    pub fn command_or_default(&mut self) -> Command {
        self.command.take().unwrap_or(Command::Tui {
            appearance: None,
            palette: None,
        })
    }
}
