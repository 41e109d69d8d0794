//! Wire shapes that only exist at the protocol boundary.
use game_core::Position;
use serde::{Deserialize, Serialize};

use crate::session::Session;

#[derive(Debug, Serialize)]
pub(crate) struct NameRequest<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CellActionRequest<'a> {
    pub game_player_id: &'a Session,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Serialize)]
pub(crate) struct UseRequest<'a> {
    pub game_player_id: &'a Session,
    pub powerup_id: &'a str,
}

/// Anything the server places on the board.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Located {
    pub position: Position,
}

/// Entities visible to the player. The server sends `null` for empty groups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Surroundings {
    #[serde(default)]
    pub creep: Option<Vec<Located>>,
    #[serde(default)]
    pub players: Option<Vec<Located>>,
    #[serde(default)]
    pub powerups: Option<Vec<Located>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GameList {
    #[serde(default)]
    pub games: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Uuid {
    pub uuid: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayerEnvelope {
    pub player: game_core::PlayerState,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EventEnvelope {
    #[serde(default)]
    pub events: Option<Vec<game_core::LogEvent>>,
}
