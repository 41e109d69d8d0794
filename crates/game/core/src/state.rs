//! Snapshots of server-owned state, refreshed every poll cycle.
//!
//! None of these are cached across cycles: each refresh decodes a fresh value
//! and drops the previous one. Field names follow the server's JSON so the
//! runtime can decode responses straight into these types when the `serde`
//! feature is enabled.
use std::fmt;

/// 1-indexed grid coordinate as reported by the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this position shifted by `(dx, dy)`, or `None` when either
    /// coordinate would leave the `i32` range.
    pub const fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={},y={}", self.x, self.y)
    }
}

/// Buff and powerup type codes.
///
/// The same code space names both the passive buffs applied to a player and
/// the consumable powerups a player holds.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::FromRepr,
)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum PowerupKind {
    Health = 0,
    Teleport = 1,
    #[strum(serialize = "doubledmg")]
    DoubleDamage = 2,
}

impl PowerupKind {
    pub fn from_code(code: i32) -> Option<Self> {
        u8::try_from(code).ok().and_then(Self::from_repr)
    }

    /// Human-readable name for a raw code, tolerating codes this client
    /// does not know yet.
    pub fn label(code: i32) -> String {
        match Self::from_code(code) {
            Some(kind) => kind.to_string(),
            None => format!("unknown({code})"),
        }
    }
}

/// Consumable item held by a player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Powerup {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: i32,
}

/// The session player's own status.
///
/// `buffs` and `powerups` stay `None` when the server sends `null`, which the
/// status view distinguishes from an empty list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: String,
    pub name: String,
    /// 0..=100
    pub health: i32,
    /// Actions left in the current round, 0..=2.
    pub action_count: i32,
    pub position: Position,
    #[cfg_attr(feature = "serde", serde(default))]
    pub buffs: Option<Vec<i32>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub powerups: Option<Vec<Powerup>>,
}

impl PlayerState {
    pub const MAX_HEALTH: i32 = 100;
    pub const MAX_ACTIONS: i32 = 2;
}

/// Alive entity counters reported with the game info.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityCounts {
    #[cfg_attr(feature = "serde", serde(default))]
    pub alive_creep: i64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub alive_players: i64,
}

/// Game-wide information for the session game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "size_x"))]
    pub width: i32,
    #[cfg_attr(feature = "serde", serde(rename = "size_y"))]
    pub height: i32,
    #[cfg_attr(feature = "serde", serde(rename = "fow"))]
    pub fog_of_war: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub created: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub started: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "game_entities", default))]
    pub entities: EntityCounts,
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_player: String,
}

impl GameState {
    /// Whether the given player holds the current turn.
    pub fn is_turn_of(&self, player_id: &str) -> bool {
        self.current_player == player_id
    }
}

/// One entry of the game's event log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEvent {
    #[cfg_attr(feature = "serde", serde(rename = "ID"))]
    pub id: i64,
    pub date_created: String,
    #[cfg_attr(feature = "serde", serde(rename = "msg"))]
    pub message: String,
}

impl LogEvent {
    /// Short timestamp shown in the log view.
    ///
    /// For `2021-03-14T10:11:12+00:00` this yields `14T10:11:12`: the third
    /// `-` field, cut at the first `+`. Timestamps that do not have three
    /// fields are returned unchanged.
    pub fn day(&self) -> &str {
        match self.date_created.split('-').nth(2) {
            Some(rest) => rest.split('+').next().unwrap_or(rest),
            None => &self.date_created,
        }
    }

    /// `"<day> -> <message>"`
    pub fn log_line(&self) -> String {
        format!("{} -> {}", self.day(), self.message)
    }
}
