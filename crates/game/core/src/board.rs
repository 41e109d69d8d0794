//! Text grid rendering of positioned entities.
//!
//! A [`Board`] is built from scratch every refresh cycle and never mutated
//! across cycles. Rendering walks rows from the top (highest `y`) down to
//! `1` and columns from `1` to `width`. Each cell shows the code of the
//! *first* entity, in insertion order, standing on it; later entities on the
//! same cell are hidden. Callers that care about which kind wins a shared
//! cell must insert in priority order.
//!
//! ```text
//!
//!  3[ ][ ][2]
//!  2[ ][1][ ]
//!  1[3][ ][ ]
//!    1  2  3
//! ```
//!
//! Cells are exactly three characters wide. Every [`EntityKind`] code is a
//! single digit, so a cell can never overflow; wider glyphs are outside the
//! renderer's contract and would shear the ruler.
use std::fmt::Write as _;

use crate::entity::EntityKind;
use crate::state::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("{kind} at {position} is outside the {width}x{height} board")]
    OutOfBounds {
        kind: EntityKind,
        position: Position,
        width: i32,
        height: i32,
    },
}

/// An entity standing on a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionedEntity {
    pub kind: EntityKind,
    pub position: Position,
}

/// Fixed-size grid plus the entities placed on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    entities: Vec<PositionedEntity>,
}

impl Board {
    /// Creates an empty board. Non-positive dimensions yield a board with no
    /// rows or columns; only the ruler is rendered.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            entities: Vec::new(),
        }
    }

    pub fn entities(&self) -> &[PositionedEntity] {
        &self.entities
    }

    pub fn contains(&self, position: Position) -> bool {
        (1..=self.width).contains(&position.x) && (1..=self.height).contains(&position.y)
    }

    /// Appends an entity. Coordinates are 1-indexed and must lie on the board.
    pub fn add(&mut self, kind: EntityKind, x: i32, y: i32) -> Result<(), BoardError> {
        let position = Position::new(x, y);
        if !self.contains(position) {
            return Err(BoardError::OutOfBounds {
                kind,
                position,
                width: self.width,
                height: self.height,
            });
        }

        self.entities.push(PositionedEntity { kind, position });
        Ok(())
    }

    /// First entity, in insertion order, standing on `position`.
    pub fn entity_at(&self, position: Position) -> Option<&PositionedEntity> {
        self.entities.iter().find(|e| e.position == position)
    }

    /// Renders the grid, row labels and column ruler.
    ///
    /// Pure: the same dimensions and entity list always produce the same
    /// string.
    pub fn render(&self) -> String {
        let columns = self.width.max(0) as usize;
        let rows = self.height.max(0) as usize;
        let mut out = String::with_capacity((rows + 2) * (columns * 3 + 3));

        out.push('\n');
        for y in (1..=self.height).rev() {
            let _ = write!(out, "{y:2}");
            for x in 1..=self.width {
                match self.entity_at(Position::new(x, y)) {
                    Some(entity) => {
                        let _ = write!(out, "[{}]", entity.kind.code());
                    }
                    None => out.push_str("[ ]"),
                }
            }
            out.push('\n');
        }

        let _ = write!(out, "{:4}", 1);
        for x in 2..=self.width {
            let _ = write!(out, "{x:3}");
        }
        out.push('\n');

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_empty_board() {
        let board = Board::new(2, 2);
        assert_eq!(board.render(), "\n 2[ ][ ]\n 1[ ][ ]\n   1  2\n");
    }

    #[test]
    fn top_row_is_highest_y() {
        let mut board = Board::new(3, 3);
        board.add(EntityKind::Creep, 3, 3).unwrap();
        board.add(EntityKind::Player, 2, 2).unwrap();
        board.add(EntityKind::PowerUp, 1, 1).unwrap();

        let expected = "\n 3[ ][ ][2]\n 2[ ][1][ ]\n 1[3][ ][ ]\n   1  2  3\n";
        assert_eq!(board.render(), expected);
    }

    #[test]
    fn first_inserted_entity_wins_a_shared_cell() {
        let mut board = Board::new(1, 1);
        board.add(EntityKind::Creep, 1, 1).unwrap();
        board.add(EntityKind::Player, 1, 1).unwrap();

        assert_eq!(board.render(), "\n 1[2]\n   1\n");
        assert_eq!(board.entities().len(), 2);
    }

    #[test]
    fn rejects_out_of_bounds() {
        let mut board = Board::new(4, 3);
        for (x, y) in [(0, 1), (1, 0), (5, 1), (1, 4), (-1, -1)] {
            let err = board.add(EntityKind::Player, x, y).unwrap_err();
            assert!(matches!(err, BoardError::OutOfBounds { .. }));
        }
        assert!(board.entities().is_empty());
    }

    #[test]
    fn degenerate_board_renders_only_ruler() {
        assert_eq!(Board::new(0, 0).render(), "\n   1\n");
    }

    #[test]
    fn wide_boards_keep_labels_aligned() {
        let board = Board::new(10, 10);
        let rendered = board.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[1], format!("10{}", "[ ]".repeat(10)));
        assert_eq!(lines[10], format!(" 1{}", "[ ]".repeat(10)));
        assert_eq!(lines[11], "   1  2  3  4  5  6  7  8  9 10");
    }
}
