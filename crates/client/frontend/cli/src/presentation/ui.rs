//! Screen layout.
//!
//! ```text
//! ┌ title bar ─────────────────────────────┐
//! │ board            │ log                 │
//! │                  │                     │
//! │ status           │ input               │
//! └──────────────────┴─────────────────────┘
//! ```
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use client_frontend_core::PanelSnapshot;

use crate::{
    config::UiConfig,
    presentation::{terminal::Tui, widgets},
    state::InputLine,
};

/// Everything one frame needs.
pub struct RenderContext<'a> {
    pub panels: &'a PanelSnapshot,
    pub input: &'a InputLine,
    /// A command is in flight; input is paused.
    pub busy: bool,
    pub ui: &'a UiConfig,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| draw(frame, ctx))?;
    Ok(())
}

pub fn draw(frame: &mut Frame, ctx: &RenderContext) {
    let [title_area, body] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .areas(frame.area());

    let [left, right] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100 - ctx.ui.log_panel_percent),
            Constraint::Percentage(ctx.ui.log_panel_percent),
        ])
        .areas(body);

    let [board_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(ctx.ui.status_panel_height),
        ])
        .areas(left);

    let [log_area, input_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .areas(right);

    widgets::header::render(frame, title_area);
    widgets::board::render_board(frame, board_area, &ctx.panels.board);
    widgets::board::render_status(frame, status_area, &ctx.panels.status);
    widgets::log::render(frame, log_area, &ctx.panels.log);
    widgets::input::render(frame, input_area, ctx.input, ctx.busy);
}
