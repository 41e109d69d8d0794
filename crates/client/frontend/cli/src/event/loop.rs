//! Event loop orchestrating view updates, user input, and rendering.
//!
//! This module coordinates three concerns:
//! - Redrawing whenever a runtime view channel changes
//! - Keyboard input processing on a fixed frame tick
//! - Submitting command lines and starting the refresh loops

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use runtime::{DispatchOutcome, MessageLevel, RuntimeHandle};
use tokio::time::{self, Duration};

use crate::{
    config::CliConfig,
    input::{InputHandler, KeyAction},
    presentation::{
        terminal::Tui,
        ui::{self, RenderContext},
    },
    state::InputLine,
};
use client_frontend_core::{FrontendConfig, PanelSnapshot};

/// Event loop owning the input line and driving the terminal.
pub struct EventLoop {
    handle: RuntimeHandle,
    input: InputHandler,
    line: InputLine,
    frame_interval: Duration,
    cli_config: CliConfig,
    busy: bool,
}

impl EventLoop {
    pub fn new(handle: RuntimeHandle, frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            handle,
            input: InputHandler::new(),
            line: InputLine::new(frontend_config.history_capacity),
            frame_interval: frontend_config.frame_interval,
            cli_config,
            busy: false,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.render(terminal)?;

        let mut changes = self.handle.view().subscribe();

        loop {
            tokio::select! {
                _ = changes.changed() => {
                    self.render(terminal)?;
                }
                _ = time::sleep(self.frame_interval) => {
                    if self.handle_input_tick(terminal).await? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    /// Poll for keyboard input and handle UI interactions.
    async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal).await
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Handle key press and dispatch to the matching action.
    async fn handle_key_press(&mut self, key: KeyEvent, terminal: &mut Tui) -> Result<bool> {
        match self.input.handle_key(key) {
            KeyAction::Quit => {
                tracing::info!("quit requested");
                return Ok(true);
            }
            KeyAction::StartRefresh => {
                if self.handle.start_refresh().await {
                    self.handle
                        .view()
                        .push_notice(MessageLevel::Info, "refresh started");
                }
            }
            KeyAction::Submit => self.submit(terminal).await?,
            KeyAction::Insert(ch) => self.line.insert(ch),
            KeyAction::Backspace => self.line.backspace(),
            KeyAction::CursorLeft => self.line.move_left(),
            KeyAction::CursorRight => self.line.move_right(),
            KeyAction::Complete => self.line.complete(),
            KeyAction::HistoryPrev => self.line.history_prev(),
            KeyAction::HistoryNext => self.line.history_next(),
            KeyAction::None => return Ok(false),
        }

        self.render(terminal)?;
        Ok(false)
    }

    /// Sends the input line to the interpreter. Input is paused until the
    /// dispatch finishes or times out.
    async fn submit(&mut self, terminal: &mut Tui) -> Result<()> {
        let line = self.line.take();

        self.busy = true;
        self.render(terminal)?;
        let outcome = self.handle.submit(&line).await;
        self.busy = false;

        match &outcome {
            DispatchOutcome::Ignored => {}
            DispatchOutcome::Accepted(command) => tracing::debug!(%command, "command accepted"),
            other => tracing::debug!(?other, "command not accepted"),
        }

        Ok(())
    }

    fn render(&self, terminal: &mut Tui) -> Result<()> {
        let panels = PanelSnapshot::capture(self.handle.view());
        let ctx = RenderContext {
            panels: &panels,
            input: &self.line,
            busy: self.busy,
            ui: &self.cli_config.ui,
        };
        ui::render(terminal, &ctx)
    }
}
