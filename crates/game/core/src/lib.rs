//! Client-side game domain shared by the runtime and the frontends.
//!
//! `game-core` defines the entity model, the text board renderer, the
//! snapshots the server reports each poll cycle, and the free-text command
//! grammar. Everything here is pure: the same inputs always produce the same
//! board string or the same resolved command, which keeps the refresh loops
//! and the interpreter testable without a server.
pub mod board;
pub mod command;
pub mod entity;
pub mod state;

pub use board::{Board, BoardError, PositionedEntity};
pub use command::{Command, CommandError, CommandLine, Direction, Target, Verb, resolve_target};
pub use entity::EntityKind;
pub use state::{
    EntityCounts, GameState, LogEvent, PlayerState, Position, Powerup, PowerupKind,
};
