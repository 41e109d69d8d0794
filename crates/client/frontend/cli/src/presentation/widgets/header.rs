//! Title bar.
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};

pub const TITLE: &str = " sconwar-client  (press ctrl-q to quit.)";

pub fn render(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_widget(title, area);
}
