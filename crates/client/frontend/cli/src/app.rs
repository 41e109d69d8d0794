//! Glue code tying the runtime handle and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;
use runtime::RuntimeHandle;

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal::TerminalSession;
use client_frontend_core::{Frontend, FrontendConfig};

/// Terminal frontend implementing [`Frontend`].
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        let mut session = TerminalSession::enter()?;

        let event_loop = EventLoop::new(
            handle,
            self.frontend_config.clone(),
            self.cli_config.clone(),
        );
        event_loop.run(session.tui()).await?;

        session.leave()?;
        tracing::info!("CLI frontend exiting");

        Ok(())
    }
}
