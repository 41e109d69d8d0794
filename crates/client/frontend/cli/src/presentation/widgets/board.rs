//! Board and status panels.
use ratatui::{
    Frame,
    layout::Rect,
    text::Text,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::theme;

pub fn render_board(frame: &mut Frame, area: Rect, board: &str) {
    // The rendered board opens with a blank line; drop it to save a row.
    let rows = board.strip_prefix('\n').unwrap_or(board);
    let text = Text::from(rows.lines().map(theme::board_line).collect::<Vec<_>>());

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(" Board "));
    frame.render_widget(paragraph, area);
}

pub fn render_status(frame: &mut Frame, area: Rect, status: &str) {
    let paragraph = Paragraph::new(status)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Player "));
    frame.render_widget(paragraph, area);
}
