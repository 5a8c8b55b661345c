//! Utility functions for tracing

/// Create a span for handling one user input event
///
/// Wrap each key or mouse action in the TUI loop so the log screen groups
/// everything the action caused.
///
/// # Example
///
/// ```rust
/// use tintboard_observability::ui_event_span;
///
/// let span = ui_event_span!("key", "Tab");
/// let _guard = span.enter();
/// // ... apply the action ...
/// ```
#[macro_export]
macro_rules! ui_event_span {
    ($kind:expr, $detail:expr) => {
        tracing::debug_span!("ui.event", ui.kind = $kind, ui.detail = $detail)
    };
}

/// Record an error on the current span and log it
///
/// # Example
///
/// ```rust
/// use tintboard_observability::record_error;
///
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "clipboard unavailable");
/// record_error(&err);
/// ```
pub fn record_error<E: std::error::Error>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::error!(error = %error, "Operation failed");
}
