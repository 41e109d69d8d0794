//! Point-in-time copy of every panel, ready to render.
use std::sync::Arc;

use runtime::{MessageLevel, ViewState};

/// One line of the log panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    pub text: String,
    /// `None` for event lines, the notice level otherwise.
    pub level: Option<MessageLevel>,
}

/// Board, status and log text captured together.
#[derive(Clone, Debug)]
pub struct PanelSnapshot {
    pub board: Arc<str>,
    pub status: Arc<str>,
    /// Notices (newest first) followed by the event lines.
    pub log: Vec<LogLine>,
}

impl PanelSnapshot {
    pub fn capture(view: &ViewState) -> Self {
        let notices = view.notices();
        let events = view.log();

        let log = notices
            .recent(notices.len())
            .map(|entry| LogLine {
                text: format!("[{}] {}", entry.level, entry.text),
                level: Some(entry.level),
            })
            .chain(events.lines().map(|line| LogLine {
                text: line.to_string(),
                level: None,
            }))
            .collect();

        Self {
            board: view.board(),
            status: view.status(),
            log,
        }
    }
}
