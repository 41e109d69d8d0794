//! Raw-mode alternate screen for the lifetime of the UI.
use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while the UI runs.
///
/// Dropping the session without calling [`TerminalSession::leave`] still
/// restores the screen, so early `?` returns leave the shell usable.
pub struct TerminalSession {
    tui: Tui,
    active: bool,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;

        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err).context("failed to enter alternate screen");
        }

        let mut session = Self {
            tui: Terminal::new(CrosstermBackend::new(stdout))?,
            active: true,
        };
        session.tui.clear()?;
        Ok(session)
    }

    pub fn tui(&mut self) -> &mut Tui {
        &mut self.tui
    }

    /// Restores the screen, reporting failures the drop path would swallow.
    pub fn leave(mut self) -> Result<()> {
        self.active = false;
        leave_screen(self.tui.backend_mut()).context("failed to restore terminal")
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            let _ = leave_screen(self.tui.backend_mut());
        }
    }
}

fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)?;
    disable_raw_mode()
}
