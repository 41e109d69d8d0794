//! Command input box.
use ratatui::{
    Frame,
    layout::{Position, Rect},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme;
use crate::state::InputLine;

pub const HINT: &str = "commands: (m)ove, (a)ttack, (p)ickup <direction / x,y>, (u)se <id>";

pub fn render(frame: &mut Frame, area: Rect, input: &InputLine, busy: bool) {
    let title = if busy { " Command (sending...) " } else { " Command " };
    let block = Block::default().borders(Borders::ALL).title(title);

    let inner_width = area.width.saturating_sub(2) as usize;
    // Scroll so the cursor stays visible on long lines.
    let scroll = input.cursor().saturating_sub(inner_width.saturating_sub(1));

    let paragraph = if input.is_empty() {
        Paragraph::new(HINT).style(theme::hint_style())
    } else {
        Paragraph::new(input.as_str()).scroll((0, scroll as u16))
    };
    frame.render_widget(paragraph.block(block), area);

    if !busy {
        let x = area.x + 1 + (input.cursor() - scroll) as u16;
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}
