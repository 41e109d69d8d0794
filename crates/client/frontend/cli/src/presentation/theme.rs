//! Colors for board cells and log lines.
use game_core::EntityKind;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use runtime::MessageLevel;

pub fn entity_style(kind: EntityKind) -> Style {
    match kind {
        EntityKind::Player => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        EntityKind::Creep => Style::default().fg(Color::LightRed),
        EntityKind::PowerUp => Style::default().fg(Color::LightGreen),
    }
}

pub fn notice_style(level: MessageLevel) -> Style {
    match level {
        MessageLevel::Info => Style::default().fg(Color::Cyan),
        MessageLevel::Warning => Style::default().fg(Color::Yellow),
        MessageLevel::Error => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    }
}

pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Splits a rendered board row into spans, coloring occupied cells.
pub fn board_line(row: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut rest = row;

    while let Some(start) = rest.find('[') {
        let Some(len) = rest[start..].find(']') else {
            break;
        };
        let cell = &rest[start..=start + len];
        let code = &cell[1..cell.len() - 1];

        if start > 0 {
            spans.push(Span::raw(&rest[..start]));
        }
        let kind = code
            .parse::<u8>()
            .ok()
            .and_then(EntityKind::from_repr);
        spans.push(match kind {
            Some(kind) => Span::styled(cell, entity_style(kind)),
            None => Span::raw(cell),
        });
        rest = &rest[start + len + 1..];
    }

    if !rest.is_empty() {
        spans.push(Span::raw(rest));
    }
    Line::from(spans)
}
