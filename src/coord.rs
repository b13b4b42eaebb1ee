//! Board coordinates and square notation.

use crate::constants::{FILES, RANKS};
use std::fmt;
use thiserror::Error;

/// A (file, rank) pair. Rank 0 is Black's back edge, rank 9 is Red's.
///
/// Components are signed so that candidate squares produced by stepping off
/// the grid can be represented and then rejected with [`Coord::is_on_board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub file: i32,
    pub rank: i32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected {expected} characters, got {got:?}")]
    Length { expected: usize, got: String },
    #[error("invalid file {0:?}, expected a-i")]
    File(char),
    #[error("invalid rank {0:?}, expected 0-9")]
    Rank(char),
}

impl Coord {
    pub const fn new(file: i32, rank: i32) -> Self {
        Self { file, rank }
    }

    pub fn is_on_board(&self) -> bool {
        (0..FILES).contains(&self.file) && (0..RANKS).contains(&self.rank)
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Coord {
        Coord::new(self.file + dx, self.rank + dy)
    }

    /// Index into a 90-entry table. Only meaningful for on-board squares.
    pub fn index(&self) -> usize {
        (self.rank * FILES + self.file) as usize
    }

    pub fn from_index(sq: usize) -> Coord {
        Coord::new(sq as i32 % FILES, sq as i32 / FILES)
    }

    /// Parses a square such as `e0` (file letter, then `9 - rank`).
    pub fn from_notation(s: &str) -> Result<Coord, NotationError> {
        let mut chars = s.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(NotationError::Length {
                expected: 2,
                got: s.to_string(),
            });
        };
        Self::from_chars(f, r)
    }

    pub(crate) fn from_chars(f: char, r: char) -> Result<Coord, NotationError> {
        if !('a'..='i').contains(&f) {
            return Err(NotationError::File(f));
        }
        let digit = r.to_digit(10).ok_or(NotationError::Rank(r))?;
        Ok(Coord::new((f as u8 - b'a') as i32, 9 - digit as i32))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "??");
        }
        write!(f, "{}{}", (b'a' + self.file as u8) as char, 9 - self.rank)
    }
}
