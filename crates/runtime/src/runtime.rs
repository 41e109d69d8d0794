//! Session-scoped runtime wiring.
//!
//! The runtime owns the refresh loops and the shutdown signal; the cloneable
//! [`RuntimeHandle`] is what frontends hold to read the view, submit command
//! lines and start the loops.
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

use crate::aggregator::{AggregatorHandle, LoopKind, LoopOutcome, StateAggregator};
use crate::api::{ApiError, GameApi, HttpTransport, Transport};
use crate::config::RuntimeConfig;
use crate::interpreter::{CommandInterpreter, DispatchOutcome};
use crate::session::Session;
use crate::shutdown::{Shutdown, ShutdownTrigger, shutdown_channel};
use crate::view::ViewState;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime requires a session before building")]
    MissingSession,

    #[error("gameid cannot be empty")]
    MissingGameId,

    #[error("playerid cannot be empty")]
    MissingPlayerId,

    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Owns the refresh loops of one session.
pub struct Runtime {
    handle: RuntimeHandle,
    trigger: ShutdownTrigger,
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Stops every refresh loop and reports how each one ended.
    ///
    /// Returns an empty list when the loops were never started.
    pub async fn shutdown(self) -> Vec<(LoopKind, LoopOutcome)> {
        self.trigger.trigger();

        let loops = self.handle.loops.lock().await.take();
        let outcomes = match loops {
            Some(loops) => loops.join().await,
            None => Vec::new(),
        };

        info!(loops = outcomes.len(), "runtime stopped");
        outcomes
    }
}

/// Builder for [`Runtime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    session: Option<Session>,
    transport: Option<Arc<dyn Transport>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            session: None,
            transport: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Replace the HTTP transport, e.g. with an in-memory server.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<Runtime, RuntimeError> {
        let session = self.session.ok_or(RuntimeError::MissingSession)?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(
                HttpTransport::new(&self.config.api_host, self.config.request_timeout)
                    .map_err(RuntimeError::HttpClient)?,
            ),
        };

        let api = GameApi::new(transport);
        let view = ViewState::new(self.config.notice_capacity);
        let aggregator =
            StateAggregator::new(api.clone(), session.clone(), view.clone(), &self.config);
        let interpreter = CommandInterpreter::new(
            api,
            session.clone(),
            view.clone(),
            self.config.request_timeout,
        );
        let (trigger, _) = shutdown_channel();

        info!(
            game_id = %session.game_id,
            player_id = %session.player_id,
            api_host = %self.config.api_host,
            "runtime ready"
        );

        Ok(Runtime {
            handle: RuntimeHandle {
                session,
                view,
                aggregator,
                interpreter,
                shutdown: trigger.listener(),
                loops: Arc::new(Mutex::new(None)),
            },
            trigger,
        })
    }
}

/// Client-facing handle to interact with the runtime.
#[derive(Clone)]
pub struct RuntimeHandle {
    session: Session,
    view: ViewState,
    aggregator: StateAggregator,
    interpreter: CommandInterpreter,
    shutdown: Shutdown,
    loops: Arc<Mutex<Option<AggregatorHandle>>>,
}

impl RuntimeHandle {
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Spawns the refresh loops unless they are already running.
    ///
    /// Returns `false` when the loops had already been started or the runtime
    /// is shutting down.
    pub async fn start_refresh(&self) -> bool {
        if self.shutdown.is_triggered() {
            return false;
        }

        let mut loops = self.loops.lock().await;
        if loops.is_some() {
            return false;
        }

        info!("starting refresh loops");
        *loops = Some(self.aggregator.spawn(self.shutdown.clone()));
        true
    }

    pub async fn submit(&self, line: &str) -> DispatchOutcome {
        self.interpreter.parse_and_dispatch(line).await
    }
}
