//! TUI state: the theme controller plus focus, hex cursor, status and log buffer.
//!
//! [TuiState] holds everything the view needs to render. Color semantics live in
//! [ThemeController]; this module only tracks what belongs to the terminal.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tint_core::{Channel, HexCommit, ThemeController, TintError};
use tracing::{debug, error};

use crate::theme::{Appearance, ChromePalette};
use crate::utils::{HEX_FIELD_MAX_LEN, contains};

/// Which screen is currently shown (picker vs logs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    Logs,
}

/// Focusable controls, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Red,
    Green,
    Blue,
    Alpha,
    Hex,
    Copy,
    Reset,
    Palettes,
}

impl Focus {
    pub const ALL: [Focus; 8] = [
        Focus::Red,
        Focus::Green,
        Focus::Blue,
        Focus::Alpha,
        Focus::Hex,
        Focus::Copy,
        Focus::Reset,
        Focus::Palettes,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// The slider channel this focus drives, if any.
    pub fn channel(self) -> Option<Channel> {
        match self {
            Focus::Red => Some(Channel::Red),
            Focus::Green => Some(Channel::Green),
            Focus::Blue => Some(Channel::Blue),
            Focus::Alpha => Some(Channel::Alpha),
            _ => None,
        }
    }
}

impl From<Channel> for Focus {
    fn from(channel: Channel) -> Self {
        match channel {
            Channel::Red => Focus::Red,
            Channel::Green => Focus::Green,
            Channel::Blue => Focus::Blue,
            Channel::Alpha => Focus::Alpha,
        }
    }
}

/// Clickable element recorded by the view during draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// Slider bar; the click column picks the value.
    Slider(Channel),
    Hex,
    Copy,
    Reset,
    /// Catalog swatch by index.
    Palette(usize),
}

/// Max log lines to keep (older lines dropped).
const MAX_TRACE_LINES: usize = 2000;

/// How long a transient status stays in the header.
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

/// How long the copy button reads "Copied!" after a successful copy.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(1500);

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";

/// TUI application state.
#[derive(Debug)]
pub struct TuiState {
    pub controller: ThemeController,
    /// Chrome colors (dark/light).
    pub chrome: ChromePalette,
    pub focus: Focus,
    /// Highlighted swatch in the palette strip.
    pub selected_palette: usize,
    pub screen: Screen,
    /// Optional status text for header right side.
    pub status: String,
    /// When set, status is transient and should auto-clear after [STATUS_TIMEOUT].
    pub status_set_at: Option<Instant>,
    /// The copy button shows [COPIED_LABEL] until this instant. Re-armed by every successful copy.
    pub copied_until: Option<Instant>,
    /// Byte offset of the cursor in the hex field (0..=len).
    pub hex_cursor: usize,
    /// Log lines (tracing output). Newest at end.
    pub trace_lines: Vec<String>,
    /// First visible line of the log view.
    pub trace_scroll: usize,
    /// An error was logged since the log screen was last opened.
    pub unseen_errors: bool,
    /// When true, next draw should run; cleared after draw.
    pub needs_redraw: bool,
    /// Incremented on each draw.
    pub frame_count: u64,
    /// Clickable areas from the last draw.
    pub hitboxes: Vec<(Rect, Hit)>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            controller: ThemeController::with_presets(),
            chrome: ChromePalette::dark(),
            focus: Focus::Red,
            selected_palette: 0,
            screen: Screen::Main,
            status: String::new(),
            status_set_at: None,
            copied_until: None,
            hex_cursor: 0,
            trace_lines: Vec::new(),
            trace_scroll: 0,
            unseen_errors: false,
            needs_redraw: true,
            frame_count: 0,
            hitboxes: Vec::new(),
        }
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_appearance(appearance: Appearance) -> Self {
        Self {
            chrome: ChromePalette::for_appearance(appearance),
            ..Self::default()
        }
    }

    // ---- Focus

    /// Move focus; leaving the hex field blurs it (and commits a changed value).
    pub fn set_focus(&mut self, focus: Focus) {
        if focus == self.focus {
            return;
        }
        if self.focus == Focus::Hex
            && let Some(outcome) = self.controller.blur_hex_field()
        {
            debug!(?outcome, "hex field committed on blur");
        }
        self.focus = focus;
        if focus == Focus::Hex {
            self.controller.focus_hex_field();
            self.hex_cursor = self.hex_text().len();
        }
        self.needs_redraw = true;
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    // ---- Sliders

    /// Move the focused slider by `steps` increments.
    pub fn nudge(&mut self, channel: Channel, steps: i32) {
        self.controller.nudge_channel(channel, steps);
        self.needs_redraw = true;
    }

    pub fn set_channel(&mut self, channel: Channel, value: f64) {
        self.controller.set_channel(channel, value);
        self.needs_redraw = true;
    }

    // ---- Hex field

    pub fn hex_text(&self) -> &str {
        &self.controller.state().hex_field
    }

    fn edit_hex(&mut self, edit: impl FnOnce(&mut String, &mut usize)) {
        let mut text = self.hex_text().to_string();
        let mut cursor = self.hex_cursor.min(text.len());
        edit(&mut text, &mut cursor);
        self.hex_cursor = cursor;
        self.controller.edit_hex_field(text);
        self.needs_redraw = true;
    }

    /// Insert character at cursor.
    pub fn hex_insert(&mut self, c: char) {
        if self.hex_text().chars().count() >= HEX_FIELD_MAX_LEN {
            return;
        }
        self.edit_hex(|text, cursor| {
            text.insert(*cursor, c);
            *cursor += c.len_utf8();
        });
    }

    /// Delete character before cursor (UTF-8 safe).
    pub fn hex_backspace(&mut self) {
        if self.hex_cursor == 0 {
            return;
        }
        self.edit_hex(|text, cursor| {
            let start = prev_boundary(text, *cursor);
            text.drain(start..*cursor);
            *cursor = start;
        });
    }

    /// Delete character at cursor (forward delete, UTF-8 safe).
    pub fn hex_delete(&mut self) {
        if self.hex_cursor >= self.hex_text().len() {
            return;
        }
        self.edit_hex(|text, cursor| {
            let end = next_boundary(text, *cursor);
            text.drain(*cursor..end);
        });
    }

    pub fn hex_cursor_left(&mut self) {
        self.hex_cursor = prev_boundary(self.hex_text(), self.hex_cursor);
        self.needs_redraw = true;
    }

    pub fn hex_cursor_right(&mut self) {
        self.hex_cursor = next_boundary(self.hex_text(), self.hex_cursor);
        self.needs_redraw = true;
    }

    pub fn hex_cursor_home(&mut self) {
        self.hex_cursor = 0;
        self.needs_redraw = true;
    }

    pub fn hex_cursor_end(&mut self) {
        self.hex_cursor = self.hex_text().len();
        self.needs_redraw = true;
    }

    /// Enter in the hex field: commit the typed text.
    pub fn hex_submit(&mut self) -> HexCommit {
        let text = self.hex_text().to_string();
        let outcome = self.controller.commit_hex(&text);
        self.hex_cursor = self.hex_cursor.min(self.hex_text().len());
        self.needs_redraw = true;
        outcome
    }

    /// Esc in the hex field: drop the typed text and show the slider color again.
    pub fn hex_revert(&mut self) {
        let hex = self.controller.state().sliders.rgb().to_hex();
        self.hex_cursor = hex.len();
        self.controller.edit_hex_field(hex);
        self.needs_redraw = true;
    }

    // ---- Palettes

    pub fn select_next_palette(&mut self) {
        let len = self.controller.swatches().len();
        if len > 0 {
            self.selected_palette = (self.selected_palette + 1) % len;
            self.needs_redraw = true;
        }
    }

    pub fn select_prev_palette(&mut self) {
        let len = self.controller.swatches().len();
        if len > 0 {
            self.selected_palette = (self.selected_palette + len - 1) % len;
            self.needs_redraw = true;
        }
    }

    /// Apply catalog entry `index` and select it in the strip.
    pub fn apply_palette(&mut self, index: usize) -> Result<(), TintError> {
        self.controller.apply_catalog_entry(index)?;
        self.selected_palette = index;
        let name = self.controller.catalog()[index].name.clone();
        self.set_status(format!("Applied {}", name));
        Ok(())
    }

    /// Apply a preset by name (case-insensitive) and select it in the strip.
    pub fn apply_named_palette(&mut self, name: &str) -> Result<(), TintError> {
        self.controller.apply_named(name)?;
        let wanted = name.trim();
        if let Some(index) = self
            .controller
            .catalog()
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(wanted))
        {
            self.selected_palette = index;
        }
        self.needs_redraw = true;
        Ok(())
    }

    // ---- Copy / reset

    pub fn reset(&mut self) {
        self.controller.reset_to_default();
        self.hex_cursor = self.hex_text().len();
        self.set_status("Reset to default");
    }

    /// Label for the copy button at `now`.
    pub fn copy_label(&self, now: Instant) -> &'static str {
        match self.copied_until {
            Some(until) if now < until => COPIED_LABEL,
            _ => COPY_LABEL,
        }
    }

    /// A clipboard write finished. Success arms the "Copied!" label; failure is logged only.
    pub fn copy_finished(&mut self, result: Result<String, TintError>, now: Instant) {
        match result {
            Ok(text) => {
                debug!(text = %text, "copied to clipboard");
                self.copied_until = Some(now + COPY_FEEDBACK);
                self.needs_redraw = true;
            }
            Err(e) => {
                error!(target: "clipboard", error = %e, "Failed to copy");
            }
        }
    }

    // ---- Status / timers

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.status_set_at = Some(Instant::now());
        self.needs_redraw = true;
    }

    /// Clear the transient status and the copy feedback once they are due.
    pub fn expire(&mut self, now: Instant) {
        if let Some(set_at) = self.status_set_at
            && now.duration_since(set_at) > STATUS_TIMEOUT
        {
            self.status.clear();
            self.status_set_at = None;
            self.needs_redraw = true;
        }
        if let Some(until) = self.copied_until
            && now >= until
        {
            self.copied_until = None;
            self.needs_redraw = true;
        }
    }

    // ---- Logs

    /// Append a line to the log buffer with a local timestamp. Drops oldest if over capacity.
    pub fn push_trace_line(&mut self, line: String) {
        if line.starts_with("[ERROR]") {
            self.unseen_errors = true;
        }
        let ts = chrono::Local::now().format("%H:%M:%S");
        self.trace_lines.push(format!("{} {}", ts, line));
        if self.trace_lines.len() > MAX_TRACE_LINES {
            self.trace_lines.drain(0..self.trace_lines.len() - MAX_TRACE_LINES);
        }
        if self.screen == Screen::Logs {
            self.needs_redraw = true;
        }
    }

    pub fn toggle_logs(&mut self) {
        self.screen = match self.screen {
            Screen::Main => {
                self.unseen_errors = false;
                self.trace_scroll = self.trace_lines.len();
                Screen::Logs
            }
            Screen::Logs => Screen::Main,
        };
        self.needs_redraw = true;
    }

    pub fn trace_scroll_up(&mut self, delta: usize) {
        self.trace_scroll = self.trace_scroll.saturating_sub(delta);
        self.needs_redraw = true;
    }

    pub fn trace_scroll_down(&mut self, delta: usize) {
        self.trace_scroll = self.trace_scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    // ---- Mouse

    /// Clickable element under (`column`, `row`) from the last draw.
    pub fn hit_at(&self, column: u16, row: u16) -> Option<(Rect, Hit)> {
        self.hitboxes
            .iter()
            .rev()
            .find(|(area, _)| contains(*area, column, row))
            .copied()
    }
}

fn prev_boundary(text: &str, cursor: usize) -> usize {
    if cursor == 0 {
        return 0;
    }
    let mut start = cursor - 1;
    while start > 0 && !text.is_char_boundary(start) {
        start -= 1;
    }
    start
}

fn next_boundary(text: &str, cursor: usize) -> usize {
    if cursor >= text.len() {
        return text.len();
    }
    let mut end = cursor + 1;
    while end < text.len() && !text.is_char_boundary(end) {
        end += 1;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_focused() -> TuiState {
        let mut s = TuiState::new();
        s.set_focus(Focus::Hex);
        s
    }

    #[test]
    fn starts_on_default_dashboard() {
        let s = TuiState::new();
        assert_eq!(s.hex_text(), "#2B313B");
        assert_eq!(s.focus, Focus::Red);
        assert_eq!(s.screen, Screen::Main);
    }

    #[test]
    fn focus_cycles_both_ways() {
        assert_eq!(Focus::Palettes.next(), Focus::Red);
        assert_eq!(Focus::Red.prev(), Focus::Palettes);
        assert_eq!(Focus::Alpha.next(), Focus::Hex);
    }

    #[test]
    fn focusing_hex_guards_the_field() {
        let mut s = hex_focused();
        assert!(s.controller.state().has_pending_user_edit);
        assert_eq!(s.hex_cursor, 7);
        s.set_focus(Focus::Copy);
        assert!(!s.controller.state().has_pending_user_edit);
    }

    #[test]
    fn hex_typing_then_blur_commits() {
        let mut s = hex_focused();
        for _ in 0..7 {
            s.hex_backspace();
        }
        assert_eq!(s.hex_text(), "");
        for c in "#ff0000".chars() {
            s.hex_insert(c);
        }
        s.focus_next();
        assert_eq!(s.controller.state().sliders.rgb().tuple(), (255, 0, 0));
        assert_eq!(s.hex_text(), "#FF0000");
    }

    #[test]
    fn hex_revert_restores_slider_hex() {
        let mut s = hex_focused();
        s.hex_insert('z');
        assert_eq!(s.hex_text(), "#2B313Bz");
        s.hex_revert();
        assert_eq!(s.hex_text(), "#2B313B");
        s.set_focus(Focus::Red);
        assert_eq!(s.controller.state().sliders.rgb().to_hex(), "#2B313B");
    }

    #[test]
    fn hex_cursor_moves_and_deletes() {
        let mut s = hex_focused();
        s.hex_cursor_home();
        s.hex_delete();
        assert_eq!(s.hex_text(), "2B313B");
        s.hex_cursor_right();
        assert_eq!(s.hex_cursor, 1);
        s.hex_cursor_end();
        assert_eq!(s.hex_cursor, 6);
        s.hex_cursor_left();
        s.hex_insert('é');
        assert_eq!(s.hex_text(), "2B313éB");
        s.hex_cursor_left();
        assert_eq!(s.hex_cursor, 5);
        s.hex_cursor_right();
        s.hex_backspace();
        assert_eq!(s.hex_text(), "2B313B");
    }

    #[test]
    fn hex_field_length_is_capped() {
        let mut s = hex_focused();
        for _ in 0..40 {
            s.hex_insert('a');
        }
        assert_eq!(s.hex_text().chars().count(), HEX_FIELD_MAX_LEN);
    }

    #[test]
    fn hex_submit_invalid_reverts() {
        let mut s = hex_focused();
        s.hex_insert('!');
        assert_eq!(s.hex_submit(), HexCommit::Reverted);
        assert_eq!(s.hex_text(), "#2B313B");
    }

    #[test]
    fn apply_palette_selects_and_reports() {
        let mut s = TuiState::new();
        s.apply_palette(2).unwrap();
        assert_eq!(s.selected_palette, 2);
        assert_eq!(s.status, "Applied Navy Beige");
        assert!(s.apply_palette(99).is_err());
        assert_eq!(s.selected_palette, 2);
    }

    #[test]
    fn apply_named_palette_selects_it() {
        let mut s = TuiState::new();
        s.apply_named_palette("clear sky").unwrap();
        assert_eq!(s.selected_palette, 6);
        assert_eq!(s.hex_text(), "#4285F4");
        assert!(matches!(
            s.apply_named_palette("Sepia"),
            Err(TintError::UnknownPalette(_))
        ));
    }

    #[test]
    fn palette_selection_wraps() {
        let mut s = TuiState::new();
        s.select_prev_palette();
        assert_eq!(s.selected_palette, s.controller.swatches().len() - 1);
        s.select_next_palette();
        assert_eq!(s.selected_palette, 0);
    }

    #[test]
    fn copy_label_reverts_after_feedback() {
        let mut s = TuiState::new();
        let t0 = Instant::now();
        assert_eq!(s.copy_label(t0), COPY_LABEL);
        s.copy_finished(Ok("rgba(43, 49, 59, 1)".to_string()), t0);
        assert_eq!(s.copy_label(t0 + Duration::from_millis(100)), COPIED_LABEL);
        assert_eq!(s.copy_label(t0 + COPY_FEEDBACK), COPY_LABEL);
    }

    #[test]
    fn second_copy_rearms_single_deadline() {
        let mut s = TuiState::new();
        let t0 = Instant::now();
        s.copy_finished(Ok("a".to_string()), t0);
        let t1 = t0 + Duration::from_millis(1000);
        s.copy_finished(Ok("a".to_string()), t1);
        s.expire(t0 + COPY_FEEDBACK);
        assert_eq!(s.copy_label(t0 + COPY_FEEDBACK), COPIED_LABEL);
        s.expire(t1 + COPY_FEEDBACK);
        assert!(s.copied_until.is_none());
        assert_eq!(s.copy_label(t1 + COPY_FEEDBACK), COPY_LABEL);
    }

    #[test]
    fn failed_copy_keeps_label() {
        let mut s = TuiState::new();
        let t0 = Instant::now();
        s.copy_finished(Err(TintError::Clipboard("no display".to_string())), t0);
        assert_eq!(s.copy_label(t0), COPY_LABEL);
        assert!(s.status.is_empty());
    }

    #[test]
    fn status_expires() {
        let mut s = TuiState::new();
        s.set_status("Reset to default");
        let set_at = s.status_set_at.unwrap();
        s.expire(set_at + Duration::from_secs(1));
        assert!(!s.status.is_empty());
        s.expire(set_at + STATUS_TIMEOUT + Duration::from_millis(1));
        assert!(s.status.is_empty());
    }

    #[test]
    fn reset_overrides_hex_edit() {
        let mut s = hex_focused();
        s.hex_insert('0');
        s.reset();
        assert_eq!(s.hex_text(), "#2B313B");
        assert_eq!(s.hex_cursor, 7);
    }

    #[test]
    fn trace_lines_capped_and_timestamped() {
        let mut s = TuiState::new();
        for i in 0..2500 {
            s.push_trace_line(format!("line {}", i));
        }
        assert_eq!(s.trace_lines.len(), MAX_TRACE_LINES);
        assert!(s.trace_lines.last().unwrap().ends_with(" line 2499"));
    }

    #[test]
    fn error_lines_flag_until_logs_open() {
        let mut s = TuiState::new();
        s.push_trace_line("[INFO] app: started".to_string());
        assert!(!s.unseen_errors);
        s.push_trace_line("[ERROR] clipboard: Failed to copy".to_string());
        assert!(s.unseen_errors);
        s.toggle_logs();
        assert_eq!(s.screen, Screen::Logs);
        assert!(!s.unseen_errors);
        s.toggle_logs();
        assert_eq!(s.screen, Screen::Main);
    }

    #[test]
    fn hit_at_prefers_last_recorded() {
        let mut s = TuiState::new();
        s.hitboxes.push((Rect::new(0, 0, 10, 2), Hit::Copy));
        s.hitboxes.push((Rect::new(5, 0, 5, 1), Hit::Reset));
        assert_eq!(s.hit_at(6, 0).map(|(_, h)| h), Some(Hit::Reset));
        assert_eq!(s.hit_at(1, 1).map(|(_, h)| h), Some(Hit::Copy));
        assert_eq!(s.hit_at(20, 20), None);
    }
}
