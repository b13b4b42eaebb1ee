//! Defines the representation of a move in the engine.

use crate::coord::{Coord, NotationError};
use crate::piece::Piece;
use std::fmt;

/// A chosen piece and the destination it is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub piece: Piece,
    pub to: Coord,
}

impl Move {
    pub fn new(piece: Piece, to: Coord) -> Self {
        Self { piece, to }
    }

    pub fn from_sq(&self) -> Coord {
        self.piece.position
    }

    /// Gets the move in coordinate notation, e.g. `h2e2`.
    pub fn to_notation(&self) -> String {
        format!("{}{}", self.from_sq(), self.to)
    }

    /// Parses `h2e2` style input into a source and destination square.
    pub fn parse(s: &str) -> Result<(Coord, Coord), NotationError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 4 {
            return Err(NotationError::Length {
                expected: 4,
                got: s.to_string(),
            });
        }
        let from = Coord::from_chars(chars[0], chars[1])?;
        let to = Coord::from_chars(chars[2], chars[3])?;
        Ok((from, to))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
