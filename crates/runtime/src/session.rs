//! Identity of the game and player this client acts for.
use serde::Serialize;

use crate::runtime::RuntimeError;

/// Explicit session context passed to every component that talks to the
/// server on the player's behalf.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Session {
    pub game_id: String,
    pub player_id: String,
}

impl Session {
    /// Creates a session, rejecting blank identifiers.
    pub fn new(
        game_id: impl Into<String>,
        player_id: impl Into<String>,
    ) -> Result<Self, RuntimeError> {
        let game_id = game_id.into();
        let player_id = player_id.into();

        if game_id.trim().is_empty() {
            return Err(RuntimeError::MissingGameId);
        }
        if player_id.trim().is_empty() {
            return Err(RuntimeError::MissingPlayerId);
        }

        Ok(Self { game_id, player_id })
    }
}
