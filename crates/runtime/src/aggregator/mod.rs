//! Periodic refresh of the board, status and event panels.
//!
//! Each panel has its own loop running as a separate tokio task. Loops share
//! nothing but the [`ViewState`] they write into and the shutdown signal, so a
//! loop that fails for good leaves the others running.
mod format;
mod supervisor;

pub use format::{build_board, format_events, format_status};

use std::time::Duration;

use strum::IntoEnumIterator;
use tokio::task::JoinHandle;
use tracing::error;

use crate::api::{ApiError, GameApi};
use crate::config::{RetryPolicy, RuntimeConfig};
use crate::session::Session;
use crate::shutdown::Shutdown;
use crate::view::ViewState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum LoopKind {
    Board,
    Status,
    Events,
}

/// How a refresh loop ended.
#[derive(Debug)]
pub enum LoopOutcome {
    /// Stopped by the shutdown signal.
    Cancelled,
    /// Stopped by an error that retrying would not fix.
    Failed(ApiError),
    /// The loop task panicked or was aborted.
    Aborted,
}

impl LoopOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, LoopOutcome::Cancelled)
    }
}

/// Turns server state into panel text for one session.
#[derive(Clone)]
pub struct StateAggregator {
    api: GameApi,
    session: Session,
    view: ViewState,
    interval: Duration,
    retry: RetryPolicy,
    event_log_limit: usize,
}

impl StateAggregator {
    pub fn new(api: GameApi, session: Session, view: ViewState, config: &RuntimeConfig) -> Self {
        Self {
            api,
            session,
            view,
            interval: config.poll_interval,
            retry: config.retry,
            event_log_limit: config.event_log_limit,
        }
    }

    /// Fetches game info, surroundings and own status, then redraws the board.
    pub async fn refresh_board(&self) -> Result<(), ApiError> {
        let game = self.api.game_info(&self.session.game_id).await?;
        let surroundings = self.api.surroundings(&self.session).await?;
        let me = self.api.player_status(&self.session).await?;

        let board = build_board(&game, &me, &surroundings);
        self.view.set_board(board.render());
        Ok(())
    }

    pub async fn refresh_status(&self) -> Result<(), ApiError> {
        let me = self.api.player_status(&self.session).await?;
        let game = self.api.game_info(&self.session.game_id).await?;

        self.view
            .set_status(format_status(&self.session, &me, &game));
        Ok(())
    }

    pub async fn refresh_events(&self) -> Result<(), ApiError> {
        let events = self.api.events(&self.session.game_id).await?;
        self.view
            .set_log(format_events(events, self.event_log_limit));
        Ok(())
    }

    pub async fn refresh(&self, kind: LoopKind) -> Result<(), ApiError> {
        match kind {
            LoopKind::Board => self.refresh_board().await,
            LoopKind::Status => self.refresh_status().await,
            LoopKind::Events => self.refresh_events().await,
        }
    }

    /// Runs one supervised loop on the current task until it ends.
    pub async fn run(&self, kind: LoopKind, shutdown: Shutdown) -> LoopOutcome {
        supervisor::supervise(
            kind,
            self.interval,
            self.retry,
            &self.view,
            shutdown,
            || self.refresh(kind),
        )
        .await
    }

    /// Spawns every loop as its own task.
    pub fn spawn(&self, shutdown: Shutdown) -> AggregatorHandle {
        let tasks = LoopKind::iter()
            .map(|kind| {
                let aggregator = self.clone();
                let shutdown = shutdown.clone();
                let task = tokio::spawn(async move { aggregator.run(kind, shutdown).await });
                (kind, task)
            })
            .collect();

        AggregatorHandle { tasks }
    }
}

/// Join handles of the spawned refresh loops.
#[derive(Debug)]
pub struct AggregatorHandle {
    tasks: Vec<(LoopKind, JoinHandle<LoopOutcome>)>,
}

impl AggregatorHandle {
    /// Loops that have not ended yet.
    pub fn running(&self) -> Vec<LoopKind> {
        self.tasks
            .iter()
            .filter(|(_, task)| !task.is_finished())
            .map(|(kind, _)| *kind)
            .collect()
    }

    /// Waits for every loop and reports how each one ended.
    pub async fn join(self) -> Vec<(LoopKind, LoopOutcome)> {
        let mut outcomes = Vec::with_capacity(self.tasks.len());
        for (kind, task) in self.tasks {
            let outcome = match task.await {
                Ok(outcome) => outcome,
                Err(err) => {
                    error!(%kind, error = %err, "refresh loop task did not complete");
                    LoopOutcome::Aborted
                }
            };
            outcomes.push((kind, outcome));
        }
        outcomes
    }
}
