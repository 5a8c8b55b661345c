//! Configuration for logging

use std::sync::Arc;

/// Sink for formatted log lines (e.g. the TUI log screen). Called from the tracing layer; must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

/// Default filter when neither the config nor the environment sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Observability configuration
#[derive(Clone)]
pub struct ObservabilityConfig {
    /// Service name recorded on the startup event (e.g. "tintboard")
    pub service_name: String,

    /// Log level filter (e.g. "info", "debug", "tint_core=debug")
    /// Defaults to `RUST_LOG`, then "info", if not set
    pub log_level: Option<String>,

    /// Enable console (stderr) output
    pub enable_console: bool,

    /// Optional sink for each formatted log line.
    pub log_sink: Option<LogSink>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "tintboard".to_string(),
            log_level: None,
            enable_console: true,
            log_sink: None,
        }
    }
}

impl std::fmt::Debug for ObservabilityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservabilityConfig")
            .field("service_name", &self.service_name)
            .field("log_level", &self.log_level)
            .field("enable_console", &self.enable_console)
            .field("log_sink", &self.log_sink.as_ref().map(|_| "Some(LogSink)"))
            .finish()
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Sink for log lines (e.g. the TUI log screen). Called from the tracing layer; must not block.
    pub fn with_log_sink(mut self, sink: LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }
}
