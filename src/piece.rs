//! A single piece on the board.

use crate::constants::{PieceColor, PieceType};
use crate::coord::Coord;
use std::fmt;

/// Identity and position of a piece. Pieces only live inside a
/// [`Board`](crate::board::Board); the board is the only thing that moves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceType,
    pub color: PieceColor,
    pub position: Coord,
}

impl Piece {
    pub fn new(kind: PieceType, color: PieceColor, position: Coord) -> Self {
        Self {
            kind,
            color,
            position,
        }
    }

    pub fn glyph(&self) -> char {
        match (self.color, self.kind) {
            (PieceColor::Red, kind) => kind.glyph(),
            (PieceColor::Black, PieceType::King) => '将',
            (PieceColor::Black, PieceType::Advisor) => '士',
            (PieceColor::Black, PieceType::Elephant) => '象',
            (PieceColor::Black, PieceType::Horse) => '马',
            (PieceColor::Black, PieceType::Chariot) => '车',
            (PieceColor::Black, PieceType::Cannon) => '砲',
            (PieceColor::Black, PieceType::Pawn) => '卒',
        }
    }

    /// Uppercase for Red, lowercase for Black.
    pub fn to_fen_char(&self) -> char {
        let c = self.kind.to_fen_char();
        match self.color {
            PieceColor::Red => c.to_ascii_uppercase(),
            PieceColor::Black => c,
        }
    }

    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {:?} at {}", self.color, self.kind, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_and_fen_chars() {
        let red = Piece::new(PieceType::Horse, PieceColor::Red, Coord::new(1, 9));
        let black = Piece::new(PieceType::Horse, PieceColor::Black, Coord::new(1, 0));
        assert_eq!(red.glyph(), '傌');
        assert_eq!(black.glyph(), '马');
        assert_eq!(red.to_fen_char(), 'N');
        assert_eq!(black.to_fen_char(), 'n');
        assert!(red.is_enemy_of(&black));
    }
}
