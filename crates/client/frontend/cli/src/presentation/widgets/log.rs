//! Log panel: notices above the event lines.
use client_frontend_core::LogLine;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::theme;

pub fn render(frame: &mut Frame, area: Rect, lines: &[LogLine]) {
    let visible = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = lines
        .iter()
        .take(visible)
        .map(|line| match line.level {
            Some(level) => ListItem::new(line.text.as_str()).style(theme::notice_style(level)),
            None => ListItem::new(line.text.as_str()),
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Log "));
    frame.render_widget(list, area);
}
