//! `tintboard tui`: run the interactive picker.

use std::sync::Arc;

use anyhow::{Context, Result};
use tint_tui::{TuiOptions, run_tui};
use tintboard_observability::{LogSink, ObservabilityConfig, init};
use tokio::sync::mpsc;

use crate::config::TintConfig;
use crate::output;

pub async fn handle(config: TintConfig, palette: Option<String>, verbose: bool) -> Result<()> {
    // Channel for log lines → TUI Logs screen (Ctrl+D)
    let (log_tx, log_rx) = mpsc::channel::<String>(512);
    let log_sink: LogSink = Arc::new(move |line: String| {
        let _ = log_tx.try_send(line);
    });

    // No console layer: stderr would tear the alternate screen
    let obs_config = ObservabilityConfig::new("tintboard")
        .with_console(false)
        .with_log_sink(log_sink)
        .with_log_level(config.log_filter(verbose, "info"));
    if let Err(e) = init(obs_config) {
        output::warning(&format!("Observability init failed (continuing): {}", e));
    }

    let mut options = TuiOptions::new(config.appearance).with_log_rx(log_rx);
    options.palette = palette;
    tokio::task::spawn_blocking(move || run_tui(options))
        .await
        .context("TUI thread panicked")??;
    Ok(())
}
