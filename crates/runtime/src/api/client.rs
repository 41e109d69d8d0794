use std::sync::Arc;

use game_core::{Command, GameState, LogEvent, PlayerState, Target};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::types::{
    CellActionRequest, EventEnvelope, GameList, NameRequest, PlayerEnvelope, UseRequest, Uuid,
};
use super::{ApiError, ApiRequest, Surroundings, Transport};
use crate::session::Session;

/// Server verdict on an action.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionReply {
    /// The server answered with a `success` flag.
    Success(bool),
    /// No `success` flag; the raw payload explains why.
    Rejected(Value),
}

/// Typed endpoints of the game server.
///
/// Every call checks its discriminator key before decoding; a missing key is
/// [`ApiError::Malformed`], a present key over the wrong shape is
/// [`ApiError::Decode`].
#[derive(Clone)]
pub struct GameApi {
    transport: Arc<dyn Transport>,
}

impl GameApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn list_games(&self) -> Result<Vec<String>, ApiError> {
        let path = "game/";
        let payload = self.transport.send(ApiRequest::get(path)).await?;
        let list: GameList = decode(path, expect_key(path, "games", payload)?)?;
        Ok(list.games.unwrap_or_default())
    }

    /// Creates a game and returns its uuid.
    pub async fn new_game(&self, name: &str) -> Result<String, ApiError> {
        let path = "game/new";
        let payload = self.post(path, &NameRequest { name }).await?;
        let payload = expect_key(path, "created", payload)?;
        let created: Uuid = decode(path, payload)?;
        Ok(created.uuid)
    }

    pub async fn game_info(&self, game_id: &str) -> Result<GameState, ApiError> {
        let path = format!("game/info/{game_id}");
        let payload = self.transport.send(ApiRequest::get(&path)).await?;
        let mut game: GameState = decode(&path, expect_key(&path, "fow", payload)?)?;
        if game.id.is_empty() {
            game.id = game_id.to_string();
        }
        Ok(game)
    }

    pub async fn join_game(&self, session: &Session) -> Result<bool, ApiError> {
        let path = "game/join";
        let payload = self.post(path, session).await?;
        let payload = expect_key(path, "success", payload)?;
        Ok(payload["success"].as_bool().unwrap_or(false))
    }

    pub async fn start_game(&self, game_id: &str) -> Result<Value, ApiError> {
        let path = format!("game/start/{game_id}");
        self.transport
            .send(ApiRequest::put(path, Value::Object(Default::default())))
            .await
    }

    /// Registers a player and returns its uuid.
    pub async fn register_player(&self, name: &str) -> Result<String, ApiError> {
        let path = "player/register";
        let payload = self.post(path, &NameRequest { name }).await?;
        let registered: Uuid = decode(path, expect_key(path, "uuid", payload)?)?;
        Ok(registered.uuid)
    }

    pub async fn player_status(&self, session: &Session) -> Result<PlayerState, ApiError> {
        let path = "player/status";
        let payload = self.post(path, session).await?;
        let envelope: PlayerEnvelope = decode(path, expect_key(path, "player", payload)?)?;
        Ok(envelope.player)
    }

    pub async fn surroundings(&self, session: &Session) -> Result<Surroundings, ApiError> {
        let path = "player/surroundings";
        let payload = self.post(path, session).await?;
        decode(path, expect_key(path, "creep", payload)?)
    }

    pub async fn events(&self, game_id: &str) -> Result<Vec<LogEvent>, ApiError> {
        let path = format!("game/events/{game_id}");
        let payload = self.transport.send(ApiRequest::get(&path)).await?;
        let envelope: EventEnvelope = decode(&path, expect_key(&path, "events", payload)?)?;
        Ok(envelope.events.unwrap_or_default())
    }

    /// Issues `command` on behalf of `session`.
    ///
    /// Client-side rejections (4xx) come back as [`ActionReply::Rejected`]
    /// rather than errors so callers can show them to the player.
    pub async fn act(&self, session: &Session, command: &Command) -> Result<ActionReply, ApiError> {
        let path = format!("action/{}", command.verb);
        let body = match &command.target {
            Target::Cell(position) => serde_json::to_value(CellActionRequest {
                game_player_id: session,
                x: position.x,
                y: position.y,
            }),
            Target::Powerup(powerup_id) => serde_json::to_value(UseRequest {
                game_player_id: session,
                powerup_id,
            }),
        }
        .map_err(|source| ApiError::Decode {
            path: path.clone(),
            source,
        })?;

        debug!(%command, %path, "dispatching action");
        let payload = match self.transport.send(ApiRequest::post(&path, body)).await {
            Ok(payload) => payload,
            Err(err) => {
                return err
                    .rejection_payload()
                    .map(ActionReply::Rejected)
                    .ok_or(err);
            }
        };

        Ok(match payload.get("success") {
            Some(success) => ActionReply::Success(success.as_bool().unwrap_or(false)),
            None => ActionReply::Rejected(payload),
        })
    }

    async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Value, ApiError> {
        let body = serde_json::to_value(body).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })?;
        self.transport.send(ApiRequest::post(path, body)).await
    }
}

/// Passes `payload` through if it carries `key`, even with a `null` value.
fn expect_key(path: &str, key: &'static str, payload: Value) -> Result<Value, ApiError> {
    if payload.get(key).is_some() {
        Ok(payload)
    } else {
        Err(ApiError::Malformed {
            path: path.to_string(),
            discriminator: key,
            payload,
        })
    }
}

fn decode<T: DeserializeOwned>(path: &str, payload: Value) -> Result<T, ApiError> {
    serde_json::from_value(payload).map_err(|source| ApiError::Decode {
        path: path.to_string(),
        source,
    })
}
