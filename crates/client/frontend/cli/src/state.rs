//! Editable command line with history and verb completion.
use std::collections::VecDeque;

use game_core::Verb;

/// The single-line input box.
///
/// `cursor` counts characters, not bytes.
#[derive(Clone, Debug)]
pub struct InputLine {
    text: String,
    cursor: usize,
    history: VecDeque<String>,
    history_capacity: usize,
    /// Index into `history` while browsing, counted from the newest entry.
    browsing: Option<usize>,
    /// Line being edited before history browsing started.
    draft: String,
}

impl InputLine {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            history: VecDeque::new(),
            history_capacity: history_capacity.max(1),
            browsing: None,
            draft: String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn insert(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        self.browsing = None;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        self.browsing = None;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    /// Clears the line and returns what was typed. Non-blank lines are
    /// remembered in the history.
    pub fn take(&mut self) -> String {
        let line = std::mem::take(&mut self.text);
        self.cursor = 0;
        self.browsing = None;
        self.draft.clear();

        let trimmed = line.trim();
        if !trimmed.is_empty() && self.history.back().map(String::as_str) != Some(trimmed) {
            if self.history.len() == self.history_capacity {
                self.history.pop_front();
            }
            self.history.push_back(trimmed.to_string());
        }

        line
    }

    /// Completes the verb being typed.
    ///
    /// A unique match becomes `"<verb> "`; several matches extend the line to
    /// their common prefix. Does nothing once the verb is followed by a space.
    pub fn complete(&mut self) {
        if self.text.contains(char::is_whitespace) {
            return;
        }

        let prefix = self.text.to_ascii_lowercase();
        let matches: Vec<Verb> = Verb::completions(&prefix).collect();

        let completed = match matches.as_slice() {
            [] => return,
            [verb] => format!("{verb} "),
            [first, rest @ ..] => {
                let mut common = first.as_ref().to_string();
                for verb in rest {
                    let shared = common
                        .chars()
                        .zip(verb.as_ref().chars())
                        .take_while(|(a, b)| a == b)
                        .count();
                    common.truncate(shared);
                }
                common
            }
        };

        self.set_text(completed);
    }

    /// Steps back to an older submitted line.
    pub fn history_prev(&mut self) {
        let next = match self.browsing {
            None if self.history.is_empty() => return,
            None => {
                self.draft = self.text.clone();
                0
            }
            Some(index) if index + 1 < self.history.len() => index + 1,
            Some(_) => return,
        };

        self.browsing = Some(next);
        let entry = self.history[self.history.len() - 1 - next].clone();
        self.set_text(entry);
    }

    /// Steps forward to a newer line, ending at the draft.
    pub fn history_next(&mut self) {
        match self.browsing {
            None => {}
            Some(0) => {
                self.browsing = None;
                let draft = std::mem::take(&mut self.draft);
                self.set_text(draft);
            }
            Some(index) => {
                self.browsing = Some(index - 1);
                let entry = self.history[self.history.len() - index].clone();
                self.set_text(entry);
            }
        }
    }

    fn set_text(&mut self, text: String) {
        self.cursor = text.chars().count();
        self.text = text;
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }
}
