//! Text snapshots shared between the refresh loops and the display.
//!
//! Each panel is a `watch` channel of an immutable string: writers swap in a
//! whole new snapshot, readers always see a complete one. Notices (command
//! warnings, rejected actions, loop failures) live in a bounded
//! [`MessageLog`] so a later event refresh cannot wipe them.
use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::watch;

pub const PLACEHOLDER: &str = "press ctrl+r to start";

/// Severity level for notices shown to the player.
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Snapshot of a single notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }
}

/// Circular buffer of notices displayed to the player.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Board, status and log panels plus the notice log.
///
/// Cloning shares the same channels. Each text panel has one writer: the
/// refresh loop that owns it.
#[derive(Clone, Debug)]
pub struct ViewState {
    inner: Arc<Channels>,
}

#[derive(Debug)]
struct Channels {
    board: watch::Sender<Arc<str>>,
    status: watch::Sender<Arc<str>>,
    log: watch::Sender<Arc<str>>,
    notices: watch::Sender<MessageLog>,
}

impl ViewState {
    pub fn new(notice_capacity: usize) -> Self {
        let placeholder: Arc<str> = Arc::from(PLACEHOLDER);
        Self {
            inner: Arc::new(Channels {
                board: watch::Sender::new(placeholder.clone()),
                status: watch::Sender::new(placeholder.clone()),
                log: watch::Sender::new(placeholder),
                notices: watch::Sender::new(MessageLog::new(notice_capacity)),
            }),
        }
    }

    pub fn set_board(&self, text: impl Into<Arc<str>>) {
        self.inner.board.send_replace(text.into());
    }

    pub fn set_status(&self, text: impl Into<Arc<str>>) {
        self.inner.status.send_replace(text.into());
    }

    pub fn set_log(&self, text: impl Into<Arc<str>>) {
        self.inner.log.send_replace(text.into());
    }

    pub fn push_notice(&self, level: MessageLevel, text: impl Into<String>) {
        let entry = MessageEntry::new(text, level);
        self.inner.notices.send_modify(|log| log.push(entry));
    }

    pub fn board(&self) -> Arc<str> {
        self.inner.board.borrow().clone()
    }

    pub fn status(&self) -> Arc<str> {
        self.inner.status.borrow().clone()
    }

    pub fn log(&self) -> Arc<str> {
        self.inner.log.borrow().clone()
    }

    pub fn notices(&self) -> MessageLog {
        self.inner.notices.borrow().clone()
    }

    pub fn subscribe(&self) -> ViewWatcher {
        ViewWatcher {
            board: self.inner.board.subscribe(),
            status: self.inner.status.subscribe(),
            log: self.inner.log.subscribe(),
            notices: self.inner.notices.subscribe(),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(64)
    }
}

/// Wakes the display whenever any panel changes.
#[derive(Debug)]
pub struct ViewWatcher {
    board: watch::Receiver<Arc<str>>,
    status: watch::Receiver<Arc<str>>,
    log: watch::Receiver<Arc<str>>,
    notices: watch::Receiver<MessageLog>,
}

impl ViewWatcher {
    /// Waits for the next change on any channel and marks it seen.
    pub async fn changed(&mut self) {
        // The senders live as long as the ViewState held by this watcher's
        // creator; a closed channel just means nothing will change again.
        let closed = tokio::select! {
            res = self.board.changed() => res.is_err(),
            res = self.status.changed() => res.is_err(),
            res = self.log.changed() => res.is_err(),
            res = self.notices.changed() => res.is_err(),
        };
        if closed {
            std::future::pending::<()>().await;
        }
    }
}
