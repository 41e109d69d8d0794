//! Placeable objects the board can show.

/// Kind of object occupying a board cell.
///
/// The discriminant is the stable code shared with the server protocol and is
/// also the glyph drawn inside a board cell. Codes are single decimal digits
/// so every glyph fits the fixed 3-character cell.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::FromRepr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum EntityKind {
    Player = 1,
    Creep = 2,
    #[strum(serialize = "powerup")]
    PowerUp = 3,
}

impl EntityKind {
    /// Protocol and render code for this kind.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }
}
