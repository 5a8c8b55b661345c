//! Subscriber initialization: env filter, optional console output, optional log sink.

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{DEFAULT_LOG_LEVEL, ObservabilityConfig};
use crate::error::ObservabilityError;
use crate::tui_log_layer;

/// Build the filter from the config, falling back to `RUST_LOG`, then [DEFAULT_LOG_LEVEL].
pub fn env_filter(config: &ObservabilityConfig) -> Result<EnvFilter, ObservabilityError> {
    match config.log_level.as_deref() {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|e| ObservabilityError::Config(format!("invalid log filter {:?}: {}", level, e))),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))),
    }
}

/// Initialize the global tracing subscriber with the given configuration
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the filter is invalid or a
/// subscriber is already installed
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = env_filter(&config)?;

    // Build layers first (build separately, then compose once to avoid type mismatch)
    let fmt_layer = config
        .enable_console
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    // Optional sink (e.g. the TUI log screen)
    let sink_layer = tui_log_layer::tui_log_layer(config.log_sink.clone());

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .with(sink_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::info!(service.name = %config.service_name, "Tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_level_parses() {
        let config = ObservabilityConfig::default().with_log_level("info,tint_core=debug");
        assert!(env_filter(&config).is_ok());
    }

    #[test]
    fn bad_level_is_config_error() {
        let config = ObservabilityConfig::default().with_log_level("tint_core=loud");
        assert!(matches!(env_filter(&config), Err(ObservabilityError::Config(_))));
    }
}
