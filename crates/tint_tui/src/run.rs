//! TUI run loop: terminal setup, event handling, draw.
//!
//! Key events are read in a dedicated thread so the main loop never blocks on terminal
//! input; clipboard outcomes and log lines arrive on channels drained every tick.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use tint_core::Channel;
use tintboard_observability::{record_error, ui_event_span};
use tokio::sync::mpsc as tokio_mpsc;
use tracing::{debug, info};

use crate::clipboard::{ClipboardWriter, CopyOutcome, SystemClipboard, spawn_copy};
use crate::state::{Focus, Hit, Screen, TuiState};
use crate::theme::Appearance;
use crate::view;

/// Slider steps moved by Shift+←/→.
const COARSE_STEPS: i32 = 10;

/// What the loop should do after an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    /// Write this text to the clipboard.
    Copy(String),
}

/// Everything [run_tui] needs from the caller.
pub struct TuiOptions {
    pub appearance: Appearance,
    /// Formatted log lines for the Logs screen (Ctrl+D).
    pub log_rx: Option<tokio_mpsc::Receiver<String>>,
    pub clipboard: Arc<dyn ClipboardWriter>,
    /// Preset applied at startup instead of the default dashboard.
    pub palette: Option<String>,
}

impl TuiOptions {
    pub fn new(appearance: Appearance) -> Self {
        Self {
            appearance,
            log_rx: None,
            clipboard: Arc::new(SystemClipboard),
            palette: None,
        }
    }

    pub fn with_log_rx(mut self, log_rx: tokio_mpsc::Receiver<String>) -> Self {
        self.log_rx = Some(log_rx);
        self
    }
}

/// Run the TUI: alternate screen, raw mode, event loop.
pub fn run_tui(options: TuiOptions) -> anyhow::Result<()> {
    let mut state = TuiState::with_appearance(options.appearance);
    if let Some(name) = options.palette.as_deref() {
        state.apply_named_palette(name)?;
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    state.push_trace_line("[INFO] tintboard: TUI started. Ctrl+D toggles this screen.".to_string());
    let result = run_loop(&mut terminal, &mut state, options.log_rx, options.clipboard);

    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    disable_raw_mode()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    mut log_rx: Option<tokio_mpsc::Receiver<String>>,
    clipboard: Arc<dyn ClipboardWriter>,
) -> anyhow::Result<()> {
    let (key_tx, key_rx) = mpsc::channel();
    let stop = Arc::new(AtomicBool::new(false));
    let reader_stop = Arc::clone(&stop);
    let _reader = std::thread::spawn(move || {
        while !reader_stop.load(Ordering::Relaxed) {
            if !event::poll(Duration::from_millis(50)).unwrap_or(false) {
                continue;
            }
            match event::read() {
                Ok(ev) => {
                    if key_tx.send(ev).is_err() {
                        break;
                    }
                }
                Err(e) => record_error(&e),
            }
        }
    });
    let (copy_tx, mut copy_rx) = tokio_mpsc::unbounded_channel::<CopyOutcome>();

    let result = loop {
        // Log lines (multi-line logs split into separate lines)
        if let Some(ref mut rx) = log_rx {
            while let Ok(line) = rx.try_recv() {
                for l in line.split('\n') {
                    state.push_trace_line(l.to_string());
                }
            }
        }
        while let Ok(outcome) = copy_rx.try_recv() {
            state.copy_finished(outcome, Instant::now());
        }
        state.expire(Instant::now());

        if state.needs_redraw {
            state.frame_count = state.frame_count.wrapping_add(1);
            if let Err(e) = terminal.draw(|f| {
                let area = f.area();
                view::draw(f, state, area)
            }) {
                break Err(e.into());
            }
            state.needs_redraw = false;
        }

        let Ok(ev) = key_rx.try_recv() else {
            std::thread::sleep(Duration::from_millis(50));
            continue;
        };
        let action = match ev {
            Event::Key(key) => {
                let span = ui_event_span!("key", tracing::field::debug(key.code));
                let _guard = span.enter();
                handle_key(state, key)
            }
            Event::Mouse(mouse) => {
                let span = ui_event_span!("mouse", tracing::field::debug(mouse.kind));
                let _guard = span.enter();
                handle_mouse(state, mouse)
            }
            Event::Resize(_, _) => {
                state.needs_redraw = true;
                Action::None
            }
            _ => Action::None,
        };
        match action {
            Action::None => {}
            Action::Quit => break Ok(()),
            Action::Copy(text) => {
                debug!(text = %text, "copy requested");
                spawn_copy(Arc::clone(&clipboard), text, copy_tx.clone());
            }
        }
    };
    stop.store(true, Ordering::Relaxed);
    info!("TUI closed");
    result
}

/// Apply one key press to the state.
pub fn handle_key(state: &mut TuiState, key: KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => return Action::Quit,
        KeyCode::Char('d') if ctrl => {
            state.toggle_logs();
            return Action::None;
        }
        _ => {}
    }
    match state.screen {
        Screen::Logs => handle_logs_key(state, key),
        Screen::Main if state.focus == Focus::Hex => handle_hex_key(state, key),
        Screen::Main => handle_main_key(state, key),
    }
}

fn handle_logs_key(state: &mut TuiState, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Esc => state.toggle_logs(),
        KeyCode::Up => state.trace_scroll_up(1),
        KeyCode::Down => state.trace_scroll_down(1),
        KeyCode::PageUp => state.trace_scroll_up(10),
        KeyCode::PageDown => state.trace_scroll_down(10),
        _ => {}
    }
    Action::None
}

/// Keys while the hex field has focus: printable characters are typed, not shortcuts.
fn handle_hex_key(state: &mut TuiState, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Tab => state.focus_next(),
        KeyCode::BackTab => state.focus_prev(),
        KeyCode::Enter => {
            let outcome = state.hex_submit();
            debug!(?outcome, "hex field submitted");
        }
        KeyCode::Esc => state.hex_revert(),
        KeyCode::Backspace => state.hex_backspace(),
        KeyCode::Delete => state.hex_delete(),
        KeyCode::Left => state.hex_cursor_left(),
        KeyCode::Right => state.hex_cursor_right(),
        KeyCode::Home => state.hex_cursor_home(),
        KeyCode::End => state.hex_cursor_end(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => state.hex_insert(c),
        _ => {}
    }
    Action::None
}

fn handle_main_key(state: &mut TuiState, key: KeyEvent) -> Action {
    let steps = if key.modifiers.contains(KeyModifiers::SHIFT) {
        COARSE_STEPS
    } else {
        1
    };
    match key.code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Char('c') => return copy_action(state),
        KeyCode::Char('r') => state.reset(),
        KeyCode::Char(d @ '1'..='9') => {
            let index = d as usize - '1' as usize;
            if state.apply_palette(index).is_err() {
                debug!(index, "no palette for digit shortcut");
            }
        }
        KeyCode::Tab => state.focus_next(),
        KeyCode::BackTab => state.focus_prev(),
        KeyCode::Left | KeyCode::Right => {
            let sign = if key.code == KeyCode::Left { -1 } else { 1 };
            if let Some(channel) = state.focus.channel() {
                state.nudge(channel, sign * steps);
            } else if state.focus == Focus::Palettes {
                if sign < 0 {
                    state.select_prev_palette();
                } else {
                    state.select_next_palette();
                }
            }
        }
        KeyCode::Home => {
            if let Some(channel) = state.focus.channel() {
                state.set_channel(channel, 0.0);
            }
        }
        KeyCode::End => {
            if let Some(channel) = state.focus.channel() {
                state.set_channel(channel, channel.max());
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => match state.focus {
            Focus::Copy => return copy_action(state),
            Focus::Reset => state.reset(),
            Focus::Palettes => {
                let index = state.selected_palette;
                if state.apply_palette(index).is_err() {
                    debug!(index, "selected palette missing");
                }
            }
            _ => {}
        },
        _ => {}
    }
    Action::None
}

fn copy_action(state: &TuiState) -> Action {
    Action::Copy(state.controller.copy_text())
}

/// Value for a click at `column` on a slider bar drawn in `bar`.
fn slider_value_at(bar: Rect, column: u16, channel: Channel) -> f64 {
    let span = bar.width.saturating_sub(1).max(1);
    let offset = column.saturating_sub(bar.x).min(span);
    f64::from(offset) / f64::from(span) * channel.max()
}

/// Apply one mouse event to the state using the hitboxes from the last draw.
pub fn handle_mouse(state: &mut TuiState, mouse: MouseEvent) -> Action {
    if state.screen == Screen::Logs {
        match mouse.kind {
            MouseEventKind::ScrollUp => state.trace_scroll_up(3),
            MouseEventKind::ScrollDown => state.trace_scroll_down(3),
            _ => {}
        }
        return Action::None;
    }
    let Some((area, hit)) = state.hit_at(mouse.column, mouse.row) else {
        return Action::None;
    };
    match (mouse.kind, hit) {
        (MouseEventKind::Down(MouseButton::Left), Hit::Slider(channel)) => {
            state.set_focus(Focus::from(channel));
            state.set_channel(channel, slider_value_at(area, mouse.column, channel));
        }
        (MouseEventKind::ScrollUp, Hit::Slider(channel)) => state.nudge(channel, 1),
        (MouseEventKind::ScrollDown, Hit::Slider(channel)) => state.nudge(channel, -1),
        (MouseEventKind::Down(MouseButton::Left), Hit::Hex) => state.set_focus(Focus::Hex),
        (MouseEventKind::Down(MouseButton::Left), Hit::Copy) => {
            state.set_focus(Focus::Copy);
            return copy_action(state);
        }
        (MouseEventKind::Down(MouseButton::Left), Hit::Reset) => {
            state.set_focus(Focus::Reset);
            state.reset();
        }
        (MouseEventKind::Down(MouseButton::Left), Hit::Palette(index)) => {
            state.set_focus(Focus::Palettes);
            if state.apply_palette(index).is_err() {
                debug!(index, "clicked palette missing");
            }
        }
        _ => {}
    }
    Action::None
}
