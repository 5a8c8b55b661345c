//! Command dispatch.

pub mod inspect;
pub mod palettes;
pub mod tui;

use anyhow::Result;
use tintboard_observability::{ObservabilityConfig, init};

use crate::cli::{Cli, Command};
use crate::config::TintConfig;
use crate::output;

pub async fn handle(mut cli: Cli) -> Result<()> {
    let config = TintConfig::from_env()?.with_log_level(cli.log_level.take());
    let verbose = cli.verbose;
    match cli.command_or_default() {
        Command::Tui { appearance, palette } => {
            tui::handle(config.with_appearance(appearance), palette, verbose).await
        }
        Command::Palettes => {
            init_console_logging(&config, verbose);
            palettes::handle()
        }
        Command::Inspect { hex } => {
            init_console_logging(&config, verbose);
            inspect::handle(&hex)
        }
    }
}

/// Logging for one-shot commands: stderr only, quiet unless `--verbose` or a filter is set.
fn init_console_logging(config: &TintConfig, verbose: bool) {
    let obs_config = ObservabilityConfig::new("tintboard").with_log_level(config.log_filter(verbose, "warn"));
    if let Err(e) = init(obs_config) {
        output::warning(&format!("Observability init failed (continuing): {}", e));
    }
}
