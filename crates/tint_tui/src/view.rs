//! TUI view: header, controls column, dashboard preview, palette strip, shortcut line.
//!
//! Drawing records clickable areas in [TuiState::hitboxes] for mouse handling.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tint_core::{Channel, Region, RegionStyle};
use unicode_width::UnicodeWidthStr;

use crate::layouts::{
    HEADER_STATUS_READY, HEADER_TITLE, HintContext, PanelLayout, background_style, block_for_panel, border_style,
    filled_style, horizontal_split, main_splits, render_header, rgb_to_color, shortcut_line, text_muted_style,
    text_style, vertical_split,
};
use crate::state::{Focus, Hit, Screen, TuiState};
use crate::theme::ChromePalette;
use crate::utils::{MIN_HEIGHT, MIN_WIDTH, SWATCH_WIDTH, horizontal_padding, row, slider_fill, truncate_ellipsis};

/// Draw the full TUI: picker or logs depending on state.screen.
pub fn draw(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    state.hitboxes.clear();
    match state.screen {
        Screen::Logs => draw_logs(frame, state, area),
        Screen::Main => draw_main(frame, state, area),
    }
}

/// Log screen: scrollable list of tracing output. Ctrl+D to close.
fn draw_logs(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let (body, footer) = vertical_split(area, area.height.saturating_sub(1));
    let chrome = &state.chrome;
    let block = Block::default()
        .title(" Logs (Ctrl+D to close) ")
        .borders(Borders::ALL)
        .border_style(border_style(chrome.border))
        .style(background_style(chrome.background));
    let inner = block.inner(body);
    frame.render_widget(block, body);

    let viewport_height = inner.height as usize;
    let max_scroll = state.trace_lines.len().saturating_sub(viewport_height);
    state.trace_scroll = state.trace_scroll.min(max_scroll);

    let lines: Vec<Line> = state
        .trace_lines
        .iter()
        .skip(state.trace_scroll)
        .take(viewport_height)
        .map(|s| {
            let style = if s.contains("[ERROR]") {
                text_style(chrome.danger)
            } else {
                text_muted_style(chrome.text_muted)
            };
            Line::from(Span::styled(s.clone(), style))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    frame.render_widget(
        Paragraph::new(shortcut_line(chrome, HintContext::Logs)).style(background_style(chrome.background)),
        horizontal_padding(footer),
    );
}

fn hint_context(focus: Focus) -> HintContext {
    match focus {
        Focus::Red | Focus::Green | Focus::Blue | Focus::Alpha => HintContext::Slider,
        Focus::Hex => HintContext::HexField,
        Focus::Copy | Focus::Reset => HintContext::Button,
        Focus::Palettes => HintContext::Palettes,
    }
}

/// Picker screen.
fn draw_main(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    frame.render_widget(Block::default().style(background_style(state.chrome.background)), area);
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!("Terminal too small (need {}×{})", MIN_WIDTH, MIN_HEIGHT);
        frame.render_widget(
            Paragraph::new(Span::styled(msg, text_muted_style(state.chrome.text_muted))).wrap(Wrap { trim: true }),
            horizontal_padding(area),
        );
        return;
    }
    let splits = main_splits(area);

    let (status, has_error) = if state.unseen_errors {
        ("Errors logged · Ctrl+D", true)
    } else if state.status.is_empty() {
        (HEADER_STATUS_READY, false)
    } else {
        (state.status.as_str(), false)
    };
    render_header(frame, splits.header, &state.chrome, HEADER_TITLE, status, has_error);

    draw_controls(frame, state, splits.controls);
    draw_preview(frame, state, splits.preview);
    draw_palettes(frame, state, splits.palettes);

    frame.render_widget(
        Paragraph::new(shortcut_line(&state.chrome, hint_context(state.focus))),
        horizontal_padding(splits.shortcut),
    );
}

fn slider_color(chrome: &ChromePalette, channel: Channel) -> tint_core::Rgb {
    match channel {
        Channel::Red => chrome.slider_red,
        Channel::Green => chrome.slider_green,
        Channel::Blue => chrome.slider_blue,
        Channel::Alpha => chrome.slider_alpha,
    }
}

/// Width of the readout column after each slider bar.
const READOUT_WIDTH: usize = 5;

fn draw_controls(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let focused = !matches!(state.focus, Focus::Palettes);
    let layout = PanelLayout::bordered(area);
    frame.render_widget(block_for_panel("Color", &state.chrome, focused), layout.outer);
    let inner = layout.inner;
    let chrome = state.chrome.clone();
    let view = state.controller.state().clone();

    // ---- Sliders: "R ██████░░░░   128"
    let bar_width = (inner.width as usize).saturating_sub(2 + 1 + READOUT_WIDTH);
    for (i, channel) in Channel::ALL.into_iter().enumerate() {
        let Some(line_area) = row(inner, i as u16) else {
            continue;
        };
        let is_focused = state.focus == Focus::from(channel);
        let label_style = if is_focused {
            text_style(chrome.text_accent).add_modifier(Modifier::BOLD)
        } else {
            text_style(chrome.text)
        };
        let filled = slider_fill(view.sliders.get(channel), channel.max(), bar_width);
        let line = Line::from(vec![
            Span::styled(format!("{} ", channel.label()), label_style),
            Span::styled("█".repeat(filled), text_style(slider_color(&chrome, channel))),
            Span::styled("░".repeat(bar_width - filled), text_style(chrome.slider_track)),
            Span::raw(" "),
            Span::styled(
                format!("{:>width$}", view.readouts.get(channel), width = READOUT_WIDTH),
                label_style,
            ),
        ]);
        frame.render_widget(Paragraph::new(line), line_area);
        let bar = Rect {
            x: line_area.x + 2,
            y: line_area.y,
            width: bar_width as u16,
            height: 1,
        };
        state.hitboxes.push((bar, Hit::Slider(channel)));
    }

    // ---- Hex field
    if let Some(line_area) = row(inner, 5) {
        let is_focused = state.focus == Focus::Hex;
        let label = "Hex ";
        let field_style = if is_focused {
            filled_style(chrome.text, chrome.button_focused_background)
        } else {
            filled_style(chrome.text, chrome.button_background)
        };
        let field_width = (line_area.width as usize).saturating_sub(label.width());
        let text = truncate_ellipsis(&view.hex_field, field_width.saturating_sub(1));
        let pad = field_width.saturating_sub(text.width() + 1);
        let line = Line::from(vec![
            Span::styled(label, text_muted_style(chrome.text_muted)),
            Span::styled(format!(" {}{}", text, " ".repeat(pad)), field_style),
        ]);
        frame.render_widget(Paragraph::new(line), line_area);
        let field = Rect {
            x: line_area.x + label.width() as u16,
            y: line_area.y,
            width: field_width as u16,
            height: 1,
        };
        state.hitboxes.push((field, Hit::Hex));
        if is_focused {
            let cursor = state.hex_cursor.min(view.hex_field.len());
            let before = view.hex_field.get(..cursor).unwrap_or_default().width() as u16;
            let x = (field.x + 1 + before).min(field.x + field.width.saturating_sub(1));
            frame.set_cursor_position((x, field.y));
        }
    }

    // ---- Live swatch, flattened over the preview page color
    let swatch_rgb = view.swatch.composite_over(chrome.preview_backdrop);
    for offset in [7, 8] {
        if let Some(line_area) = row(inner, offset) {
            frame.render_widget(Block::default().style(background_style(swatch_rgb)), line_area);
        }
    }
    if let Some(line_area) = row(inner, 9) {
        let code = truncate_ellipsis(&view.code_display, line_area.width as usize);
        frame.render_widget(Paragraph::new(Span::styled(code, text_style(chrome.text))), line_area);
    }

    // ---- Buttons
    if let Some(line_area) = row(inner, 11) {
        let copy_label = state.copy_label(Instant::now());
        let copy = format!(" {} ", copy_label);
        let reset = " Reset ".to_string();
        let button_style = |focus: Focus, success: bool| {
            let fg = if success { chrome.success } else { chrome.text };
            if state.focus == focus {
                filled_style(fg, chrome.button_focused_background).add_modifier(Modifier::BOLD)
            } else {
                filled_style(fg, chrome.button_background)
            }
        };
        let copy_style = button_style(Focus::Copy, copy_label != crate::state::COPY_LABEL);
        let reset_style = button_style(Focus::Reset, false);
        let copy_width = copy.width() as u16;
        let reset_width = reset.width() as u16;
        let line = Line::from(vec![
            Span::styled(copy, copy_style),
            Span::raw("  "),
            Span::styled(reset, reset_style),
        ]);
        frame.render_widget(Paragraph::new(line), line_area);
        let (copy_area, rest) = horizontal_split(line_area, copy_width);
        let (_, rest) = horizontal_split(rest, 2);
        let (reset_area, _) = horizontal_split(rest, reset_width);
        state.hitboxes.push((copy_area, Hit::Copy));
        state.hitboxes.push((reset_area, Hit::Reset));
    }
}

/// Fill `area` with a region's flattened background and draw `lines` in its text color.
fn paint_region(frame: &mut Frame, area: Rect, style: &RegionStyle, backdrop: tint_core::Rgb, lines: Vec<Line<'static>>) {
    let bg = style.background.flatten(backdrop);
    let paint = filled_style(style.text, bg);
    frame.render_widget(Block::default().style(paint), area);
    frame.render_widget(Paragraph::new(lines).style(paint), horizontal_padding(area));
}

/// Dashboard mock: header strip over sidebar + main content with an action button.
fn draw_preview(frame: &mut Frame, state: &TuiState, area: Rect) {
    let layout = PanelLayout::new(area, 0, 0);
    frame.render_widget(block_for_panel("Preview", &state.chrome, false), layout.outer);
    let inner = layout.inner;
    let backdrop = state.chrome.preview_backdrop;
    frame.render_widget(Block::default().style(background_style(backdrop)), inner);
    let view = state.controller.state();

    let (header, body) = vertical_split(inner, 3);
    let header_style = view.region(Region::Header);
    paint_region(
        frame,
        header,
        header_style,
        backdrop,
        vec![
            Line::from(""),
            Line::from(Span::styled("Dashboard", Style::default().add_modifier(Modifier::BOLD))),
        ],
    );

    let (sidebar, main) = horizontal_split(body, (body.width / 4).max(12).min(body.width));
    paint_region(
        frame,
        sidebar,
        view.region(Region::Sidebar),
        backdrop,
        ["", "Overview", "Reports", "Team", "Settings"]
            .into_iter()
            .map(Line::from)
            .collect(),
    );

    paint_region(
        frame,
        main,
        view.region(Region::MainContent),
        backdrop,
        vec![
            Line::from(""),
            Line::from(Span::styled("Welcome back", Style::default().add_modifier(Modifier::BOLD))),
            Line::from("Here is what changed since your last visit."),
        ],
    );

    let label = " Get started ";
    let button_area = Rect {
        x: main.x.saturating_add(2),
        y: main.y.saturating_add(5),
        width: (label.width() as u16).min(main.width.saturating_sub(2)),
        height: 1,
    };
    if button_area.bottom() <= main.bottom() && button_area.width > 0 {
        let action = view.region(Region::ActionButton);
        let bg = action.background.flatten(backdrop);
        frame.render_widget(
            Paragraph::new(Span::styled(label, filled_style(action.text, bg).add_modifier(Modifier::BOLD))),
            button_area,
        );
    }
}

/// Palette strip: one swatch per catalog entry, four color bands over the name.
fn draw_palettes(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let focused = state.focus == Focus::Palettes;
    let layout = PanelLayout::new(area, 1, 0);
    frame.render_widget(block_for_panel("Palettes", &state.chrome, focused), layout.outer);
    let inner = layout.inner;
    let chrome = &state.chrome;
    let band_width = ((SWATCH_WIDTH as usize).saturating_sub(4) / 4).max(1);

    let mut x = inner.x;
    let mut hits = Vec::new();
    for swatch in state.controller.swatches() {
        let width = SWATCH_WIDTH.saturating_sub(2).min(inner.right().saturating_sub(x));
        if width == 0 {
            break;
        }
        let cell = Rect::new(x, inner.y, width, inner.height.min(2));
        let bands: Vec<Span> = swatch
            .bands
            .iter()
            .map(|band| match band {
                Some(rgb) => Span::styled(" ".repeat(band_width), Style::default().bg(rgb_to_color(*rgb))),
                None => Span::styled(format!("{:^w$}", "?", w = band_width), text_muted_style(chrome.text_muted)),
            })
            .collect();
        let digit = if swatch.index < 9 {
            format!("{} ", swatch.index + 1)
        } else {
            "  ".to_string()
        };
        let selected = swatch.index == state.selected_palette;
        let name_style = if selected && focused {
            text_style(chrome.text_accent).add_modifier(Modifier::BOLD)
        } else if selected {
            text_style(chrome.text)
        } else {
            text_muted_style(chrome.text_muted)
        };
        let name = state
            .controller
            .catalog()
            .get(swatch.index)
            .map(|p| p.name.as_str())
            .unwrap_or_default();
        let mut top = vec![Span::styled(digit, text_muted_style(chrome.text_muted))];
        top.extend(bands);
        let lines = vec![
            Line::from(top),
            Line::from(Span::styled(
                format!("  {}", truncate_ellipsis(name, (width as usize).saturating_sub(2))),
                name_style,
            )),
        ];
        frame.render_widget(Paragraph::new(lines), cell);
        hits.push((cell, Hit::Palette(swatch.index)));
        x = x.saturating_add(SWATCH_WIDTH);
    }
    state.hitboxes.extend(hits);
}
