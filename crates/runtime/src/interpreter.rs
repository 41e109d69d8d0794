//! Free-text command lines to game actions.
use std::time::Duration;

use game_core::{Command, CommandError, CommandLine, Position};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::api::{ActionReply, ApiError, GameApi};
use crate::session::Session;
use crate::view::{MessageLevel, ViewState};

/// What became of a submitted line.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// Blank or underspecified; nothing happened.
    Ignored,
    /// The server accepted the action.
    Accepted(Command),
    /// The server answered without accepting the action.
    Rejected { command: Command, payload: Value },
    /// The line could not be turned into a command. No action was sent.
    Invalid(CommandError),
    /// The dispatch failed or timed out.
    Failed(ApiError),
}

/// Parses input lines and issues the matching action for one session.
#[derive(Clone)]
pub struct CommandInterpreter {
    api: GameApi,
    session: Session,
    view: ViewState,
    timeout: Duration,
}

impl CommandInterpreter {
    pub fn new(api: GameApi, session: Session, view: ViewState, timeout: Duration) -> Self {
        Self {
            api,
            session,
            view,
            timeout,
        }
    }

    /// Parses `line`, resolves its target and dispatches it.
    ///
    /// Problems are reported as notices in the view as well as in the
    /// returned outcome; none of them is fatal to the caller.
    pub async fn parse_and_dispatch(&self, line: &str) -> DispatchOutcome {
        let parsed = match CommandLine::parse(line.trim()) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => return DispatchOutcome::Ignored,
            Err(err) => return self.invalid(err),
        };

        let dispatch = self.resolve_and_send(&parsed);
        let outcome = match tokio::time::timeout(self.timeout, dispatch).await {
            Ok(outcome) => outcome,
            Err(_) => Err(DispatchError::Api(ApiError::Timeout {
                after: self.timeout,
            })),
        };

        match outcome {
            Ok((command, ActionReply::Success(true))) => {
                info!(%command, "action accepted");
                DispatchOutcome::Accepted(command)
            }
            Ok((command, ActionReply::Success(false))) => {
                let payload = Value::Bool(false);
                self.rejected(command, payload)
            }
            Ok((command, ActionReply::Rejected(payload))) => self.rejected(command, payload),
            Err(DispatchError::Command(err)) => self.invalid(err),
            Err(DispatchError::Api(err)) => {
                warn!(error = %err, line, "dispatch failed");
                self.view
                    .push_notice(MessageLevel::Error, format!("{line}: {err}"));
                DispatchOutcome::Failed(err)
            }
        }
    }

    async fn resolve_and_send(
        &self,
        parsed: &CommandLine<'_>,
    ) -> Result<(Command, ActionReply), DispatchError> {
        let origin = if parsed.needs_position() {
            self.api.player_status(&self.session).await?.position
        } else {
            Position::default()
        };

        let command = parsed.resolve(origin)?;
        debug!(%command, %origin, "resolved command");

        let reply = self.api.act(&self.session, &command).await?;
        Ok((command, reply))
    }

    fn invalid(&self, err: CommandError) -> DispatchOutcome {
        debug!(error = %err, "ignoring invalid command");
        self.view.push_notice(MessageLevel::Warning, err.to_string());
        DispatchOutcome::Invalid(err)
    }

    fn rejected(&self, command: Command, payload: Value) -> DispatchOutcome {
        warn!(%command, %payload, "action rejected");
        self.view
            .push_notice(MessageLevel::Warning, format!("{command}: {payload}"));
        DispatchOutcome::Rejected { command, payload }
    }
}

#[derive(Debug)]
enum DispatchError {
    Command(CommandError),
    Api(ApiError),
}

impl From<CommandError> for DispatchError {
    fn from(err: CommandError) -> Self {
        Self::Command(err)
    }
}

impl From<ApiError> for DispatchError {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}
