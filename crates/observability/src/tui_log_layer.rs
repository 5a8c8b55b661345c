//! Tracing layer that forwards formatted log lines to a sink (e.g. the TUI log screen).

use std::fmt::Write;

use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};

use crate::config::LogSink;

/// Longest line forwarded; longer ones are cut and marked with their length.
const MAX_LINE_LEN: usize = 4_000;

/// Builds a single line from an event: "[LEVEL] target: message key=value ..."
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl LineVisitor {
    fn push_field(&mut self, name: &str, value: impl std::fmt::Display) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        write!(self.fields, "{}={}", name, value).ok();
    }

    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (true, _) => self.fields,
            (false, true) => self.message,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            write!(self.message, "{:?}", value).ok();
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }
}

/// Layer that sends each formatted event to the given sink when present. The sink must not block.
pub(crate) fn tui_log_layer(sink: Option<LogSink>) -> TuiLogLayer {
    TuiLogLayer { sink }
}

#[derive(Clone)]
pub(crate) struct TuiLogLayer {
    sink: Option<LogSink>,
}

impl<S> Layer<S> for TuiLogLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let Some(sink) = self.sink.as_ref() else {
            return;
        };
        let meta = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        let rest = visitor.finish();
        let line = if rest.is_empty() {
            format!("[{}] {}", meta.level(), meta.target())
        } else {
            format!("[{}] {}: {}", meta.level(), meta.target(), rest)
        };
        sink(truncate_line(line));
    }
}

fn truncate_line(line: String) -> String {
    if line.len() <= MAX_LINE_LEN {
        return line;
    }
    let len = line.len();
    let cut: String = line.chars().take(MAX_LINE_LEN).collect();
    format!("{}… ({} bytes)", cut, len)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::{Registry, layer::SubscriberExt};

    use super::*;

    fn capture(f: impl FnOnce()) -> Vec<String> {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink_lines = Arc::clone(&lines);
        let sink: LogSink = Arc::new(move |line: String| sink_lines.lock().unwrap().push(line));
        let subscriber = Registry::default().with(tui_log_layer(Some(sink)));
        tracing::subscriber::with_default(subscriber, f);
        let out = lines.lock().unwrap().clone();
        out
    }

    #[test]
    fn formats_level_target_message_fields() {
        let lines = capture(|| {
            tracing::error!(target: "clipboard", error = "no display", "Failed to copy");
        });
        assert_eq!(lines, vec![r#"[ERROR] clipboard: Failed to copy error="no display""#]);
    }

    #[test]
    fn message_only() {
        let lines = capture(|| tracing::info!(target: "app", "started"));
        assert_eq!(lines, vec!["[INFO] app: started"]);
    }

    #[test]
    fn no_sink_is_silent() {
        let subscriber = Registry::default().with(tui_log_layer(None));
        tracing::subscriber::with_default(subscriber, || tracing::info!("ignored"));
    }

    #[test]
    fn long_lines_are_cut() {
        let line = "x".repeat(MAX_LINE_LEN + 10);
        let out = truncate_line(line);
        assert!(out.ends_with(&format!("… ({} bytes)", MAX_LINE_LEN + 10)));
    }
}
