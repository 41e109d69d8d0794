//! Free-text command grammar.
//!
//! A command line is `<verb> <args...>`, split on whitespace:
//!
//! - `move|attack|pickup <tokens...>` targets a cell. Tokens are applied
//!   left to right starting from the player's current position: `x,y`
//!   overwrites both coordinates, `left|right|up|down` shifts the running
//!   value by one. Anything else is skipped.
//! - `use <powerup-id>` targets a held powerup by identifier.
//!
//! Verbs match exactly; `mov` or `moves` are unknown verbs.
use std::fmt;
use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::state::Position;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownVerb(String),

    #[error("invalid coordinate {0:?}, expected x,y")]
    InvalidCoordinate(String),
}

/// Action verbs understood by the server.
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
)]
#[strum(serialize_all = "lowercase")]
pub enum Verb {
    Move,
    Attack,
    Pickup,
    Use,
}

impl Verb {
    /// Whether the verb's argument is resolved into a board coordinate.
    pub const fn takes_coordinates(self) -> bool {
        !matches!(self, Verb::Use)
    }

    /// Verbs whose name starts with `prefix`, in declaration order.
    pub fn completions(prefix: &str) -> impl Iterator<Item = Verb> + '_ {
        Verb::iter().filter(move |verb| verb.as_ref().starts_with(prefix))
    }
}

/// Relative movement token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Grid delta; `up` increases `y`.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
        }
    }
}

/// Resolved argument of a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Cell(Position),
    Powerup(String),
}

/// Fully resolved command, ready to dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub verb: Verb,
    pub target: Target,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Target::Cell(position) => write!(f, "{} {},{}", self.verb, position.x, position.y),
            Target::Powerup(id) => write!(f, "{} {}", self.verb, id),
        }
    }
}

/// A tokenized command line whose verb is known but whose target is not yet
/// resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLine<'a> {
    pub verb: Verb,
    pub args: Vec<&'a str>,
}

impl<'a> CommandLine<'a> {
    /// Tokenizes a raw input line.
    ///
    /// Returns `Ok(None)` for blank lines and lines with fewer than two
    /// tokens; those are silently ignored by the interpreter.
    pub fn parse(line: &'a str) -> Result<Option<Self>, CommandError> {
        let mut tokens = line.split_whitespace();
        let (Some(verb), Some(_)) = (tokens.next(), tokens.clone().next()) else {
            return Ok(None);
        };

        let verb =
            Verb::from_str(verb).map_err(|_| CommandError::UnknownVerb(verb.to_string()))?;

        Ok(Some(Self {
            verb,
            args: tokens.collect(),
        }))
    }

    /// Whether resolving this line needs the player's current position.
    pub fn needs_position(&self) -> bool {
        self.verb.takes_coordinates()
    }

    /// Resolves the target. `origin` is only consulted for coordinate verbs.
    pub fn resolve(&self, origin: Position) -> Result<Command, CommandError> {
        let target = if self.verb.takes_coordinates() {
            Target::Cell(resolve_target(origin, self.args.iter().copied())?)
        } else {
            // parse() guarantees at least one argument
            Target::Powerup(self.args.first().copied().unwrap_or_default().to_string())
        };

        Ok(Command {
            verb: self.verb,
            target,
        })
    }
}

/// Applies direction tokens left to right starting at `origin`.
///
/// An absolute `x,y` token replaces both coordinates; relative tokens adjust
/// whatever has been accumulated so far, so `2,2 right` lands on `(3, 2)`
/// while `right 2,2` lands on `(2, 2)`.
pub fn resolve_target<'t>(
    origin: Position,
    tokens: impl IntoIterator<Item = &'t str>,
) -> Result<Position, CommandError> {
    let mut position = origin;

    for token in tokens {
        if token.contains(',') {
            position = parse_absolute(token)?;
        } else if let Ok(direction) = Direction::from_str(token) {
            let (dx, dy) = direction.delta();
            position = position
                .checked_offset(dx, dy)
                .ok_or_else(|| CommandError::InvalidCoordinate(token.to_string()))?;
        }
    }

    Ok(position)
}

fn parse_absolute(token: &str) -> Result<Position, CommandError> {
    let invalid = || CommandError::InvalidCoordinate(token.to_string());

    let (x, y) = token.split_once(',').ok_or_else(invalid)?;
    if y.contains(',') {
        return Err(invalid());
    }

    let x = x.parse::<i32>().map_err(|_| invalid())?;
    let y = y.parse::<i32>().map_err(|_| invalid())?;
    Ok(Position::new(x, y))
}
