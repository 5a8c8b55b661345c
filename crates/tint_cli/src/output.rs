//! Terminal output helpers. Dual-mode: styled text for humans, structured JSON for machines.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `comfy-table` for structured data

use std::sync::atomic::{AtomicBool, Ordering};

use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use console::style;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;

// ── Global format flag ─────────────────────────────────────────────

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    JSON_MODE.store(matches!(format, OutputFormat::Json), Ordering::Relaxed);
}

fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

// ── JSON envelope ──────────────────────────────────────────────────

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn envelope(level: &str, message: &str, data: Option<&JsonValue>) -> String {
    let msg = Msg { level, message, data };
    serde_json::to_string(&msg).unwrap_or_else(|_| format!("{{\"level\":\"{level}\",\"message\":\"{message}\"}}"))
}

fn emit_json(level: &str, message: &str, data: Option<&JsonValue>) {
    println!("{}", envelope(level, message, data));
}

// ── Public helpers ─────────────────────────────────────────────────

pub fn header(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).bold().cyan());
    }
}

pub fn error(text: &str) {
    if is_json() {
        eprintln!("{}", envelope("error", text, None));
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

pub fn warning(text: &str) {
    if is_json() {
        emit_json("warning", text, None);
    } else {
        println!("{} {}", style("!").yellow(), style(text).bright());
    }
}

/// Print a key-value pair with styled key. Text mode only; JSON callers use [data].
pub fn kv(key: &str, value: &str) {
    if !is_json() {
        println!("  {} {}", style(key).cyan().bold(), value);
    }
}

/// Emit a serializable value as one JSON envelope. Text mode prints nothing.
pub fn data<T: Serialize>(label: &str, value: &T) {
    if is_json() {
        let json_val = serde_json::to_value(value).unwrap_or(JsonValue::Null);
        emit_json("data", label, Some(&json_val));
    }
}

/// Whether text-mode rendering (tables, kv lines) should run.
pub fn is_text() -> bool {
    !is_json()
}

// ── Tables ─────────────────────────────────────────────────────────

/// Create a styled table for listing items.
pub fn table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Bold cyan header row.
pub fn table_header(table: &mut Table, columns: &[&str]) {
    table.set_header(
        columns
            .iter()
            .map(|c| Cell::new(c).fg(Color::Cyan).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
}

/// A cell whose background shows `rgb`.
pub fn color_cell(hex: &str, rgb: Option<tint_core::Rgb>) -> Cell {
    match rgb {
        Some(rgb) => {
            let (r, g, b) = rgb.tuple();
            let text = tint_core::contrast::text_color_for(tint_core::Region::ActionButton, rgb, 1.0);
            let (tr, tg, tb) = text.tuple();
            Cell::new(hex)
                .bg(Color::Rgb { r, g, b })
                .fg(Color::Rgb { r: tr, g: tg, b: tb })
        }
        None => Cell::new(format!("{hex} (invalid)")).fg(Color::Red),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_skips_missing_data() {
        let json = envelope("info", "Presets", None);
        assert_eq!(json, r#"{"level":"info","message":"Presets"}"#);
    }

    #[test]
    fn envelope_embeds_data() {
        let data = serde_json::json!({ "hex": "#26A69A" });
        let json = envelope("data", "color", Some(&data));
        let back: JsonValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back["data"]["hex"], "#26A69A");
        assert_eq!(back["level"], "data");
    }
}
