//! Client runtime for a remote sconwar game.
//!
//! This crate turns raw server state into a continuously refreshed view and
//! free-text player input into game actions. Consumers build a [`Runtime`],
//! hand its [`RuntimeHandle`] to a frontend, and read the text panels from
//! [`ViewState`].
//!
//! Modules are organized by responsibility:
//! - [`api`] wraps the HTTP/JSON protocol behind the [`Transport`] seam
//! - [`view`] holds the snapshot channels the display layer reads
//! - [`aggregator`] runs the supervised board/status/event refresh loops
//! - [`interpreter`] parses and dispatches command lines
//! - [`runtime`] wires everything together for a single session
pub mod aggregator;
pub mod api;
pub mod config;
pub mod interpreter;
pub mod runtime;
pub mod session;
pub mod shutdown;
pub mod view;

pub use aggregator::{AggregatorHandle, LoopKind, LoopOutcome, StateAggregator};
pub use api::{
    ActionReply, ApiError, ApiRequest, GameApi, HttpTransport, Method, Surroundings, Transport,
};
pub use config::{RetryPolicy, RuntimeConfig};
pub use interpreter::{CommandInterpreter, DispatchOutcome};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeError, RuntimeHandle};
pub use session::Session;
pub use shutdown::{Shutdown, ShutdownTrigger, shutdown_channel};
pub use view::{MessageEntry, MessageLevel, MessageLog, ViewState, ViewWatcher};
