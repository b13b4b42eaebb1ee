//! Constants used in the Xiangqi engine.

use std::fmt;

pub const FILES: i32 = 9;
pub const RANKS: i32 = 10;

pub const PALACE_FILES: (i32, i32) = (3, 5);

/// Which side a piece belongs to.
///
/// RED starts on ranks 6-9 with its back edge on rank 9, BLACK on ranks 0-3
/// with its back edge on rank 0. Every side-dependent rule below (palace,
/// forward direction, river) is taken relative to that layout, so RED's
/// palace is ranks 7-9 and RED advances toward rank 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Red,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    King,
    Advisor,
    Elephant,
    Horse,
    Chariot,
    Cannon,
    Pawn,
}

impl PieceColor {
    /// Get the opponent of the current side.
    pub fn opponent(self) -> PieceColor {
        match self {
            PieceColor::Red => PieceColor::Black,
            PieceColor::Black => PieceColor::Red,
        }
    }

    /// Rank delta of a single forward step: -1 for RED, which starts on
    /// rank 9, and +1 for BLACK.
    pub fn forward(self) -> i32 {
        match self {
            PieceColor::Red => -1,
            PieceColor::Black => 1,
        }
    }

    /// Inclusive rank range of this side's palace, the back three ranks of
    /// its starting half.
    pub fn palace_ranks(self) -> (i32, i32) {
        match self {
            PieceColor::Red => (7, 9),
            PieceColor::Black => (0, 2),
        }
    }

    pub fn in_palace(self, file: i32, rank: i32) -> bool {
        let (low, high) = self.palace_ranks();
        (PALACE_FILES.0..=PALACE_FILES.1).contains(&file) && (low..=high).contains(&rank)
    }

    /// True while `rank` is on this side's half of the river.
    pub fn on_own_side(self, rank: i32) -> bool {
        match self {
            PieceColor::Red => rank >= 5,
            PieceColor::Black => rank <= 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::Red => "Red",
            PieceColor::Black => "Black",
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl PieceType {
    pub const ALL: [PieceType; 7] = [
        PieceType::King,
        PieceType::Advisor,
        PieceType::Elephant,
        PieceType::Horse,
        PieceType::Chariot,
        PieceType::Cannon,
        PieceType::Pawn,
    ];

    /// Display glyph, as written on the red pieces.
    pub fn glyph(self) -> char {
        match self {
            PieceType::King => '帅',
            PieceType::Advisor => '仕',
            PieceType::Elephant => '相',
            PieceType::Horse => '傌',
            PieceType::Chariot => '俥',
            PieceType::Cannon => '炮',
            PieceType::Pawn => '兵',
        }
    }

    pub fn to_fen_char(self) -> char {
        match self {
            PieceType::King => 'k',
            PieceType::Advisor => 'a',
            PieceType::Elephant => 'b',
            PieceType::Horse => 'n',
            PieceType::Chariot => 'r',
            PieceType::Cannon => 'c',
            PieceType::Pawn => 'p',
        }
    }
}

// Back rank from file 0 to file 8, identical for both sides.
pub const BACK_RANK: [PieceType; 9] = [
    PieceType::Chariot,
    PieceType::Horse,
    PieceType::Elephant,
    PieceType::Advisor,
    PieceType::King,
    PieceType::Advisor,
    PieceType::Elephant,
    PieceType::Horse,
    PieceType::Chariot,
];

pub const CANNON_FILES: [i32; 2] = [1, 7];
pub const PAWN_FILES: [i32; 5] = [0, 2, 4, 6, 8];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palace_bounds() {
        assert!(PieceColor::Red.in_palace(4, 9));
        assert!(PieceColor::Red.in_palace(3, 7));
        assert!(!PieceColor::Red.in_palace(4, 2));
        assert!(!PieceColor::Red.in_palace(6, 8));
        assert!(PieceColor::Black.in_palace(5, 0));
        assert!(!PieceColor::Black.in_palace(4, 3));
    }

    #[test]
    fn test_river_sides() {
        assert!(PieceColor::Red.on_own_side(5));
        assert!(!PieceColor::Red.on_own_side(4));
        assert!(PieceColor::Black.on_own_side(4));
        assert!(!PieceColor::Black.on_own_side(5));
    }

    #[test]
    fn test_forward_leaves_own_back_edge() {
        let (_, red_back) = PieceColor::Red.palace_ranks();
        let (black_back, _) = PieceColor::Black.palace_ranks();
        assert_eq!((red_back, black_back), (9, 0));
        assert!(PieceColor::Red.on_own_side(red_back));
        assert!(!PieceColor::Red.on_own_side(red_back + 5 * PieceColor::Red.forward()));
        assert!(!PieceColor::Black.on_own_side(black_back + 5 * PieceColor::Black.forward()));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(PieceColor::Red.opponent(), PieceColor::Black);
        assert_eq!(PieceColor::Black.opponent(), PieceColor::Red);
    }
}
