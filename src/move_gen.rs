//! Move generation logic, including pre-computed step tables.

use crate::board::Board;
use crate::constants::{PieceColor, PieceType, FILES, RANKS};
use crate::coord::Coord;
use crate::piece::Piece;
use once_cell::sync::Lazy;

const ORTHOGONAL: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ELEPHANT: [(i32, i32); 4] = [(2, 2), (2, -2), (-2, 2), (-2, -2)];
const HORSE: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// A single-step target together with the square that must be empty for the
/// step to be allowed (the elephant's eye or the horse's leg).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub to: Coord,
    pub block: Option<Coord>,
}

/// Fixed-geometry targets for every square, indexed `[color][square]` where
/// the rule depends on the side. Board occupancy is applied at query time.
pub struct StepTables {
    pub king: [Vec<Vec<Step>>; 2],
    pub advisor: [Vec<Vec<Step>>; 2],
    pub elephant: [Vec<Vec<Step>>; 2],
    pub horse: Vec<Vec<Step>>,
}

pub static STEP_TABLES: Lazy<StepTables> = Lazy::new(StepTables::new);

fn color_idx(color: PieceColor) -> usize {
    match color {
        PieceColor::Red => 0,
        PieceColor::Black => 1,
    }
}

/// Horse leg: one step along the axis of the two-square displacement.
pub fn horse_leg(from: Coord, dx: i32, dy: i32) -> Coord {
    if dx.abs() == 2 {
        from.offset(dx / 2, 0)
    } else {
        from.offset(0, dy / 2)
    }
}

impl StepTables {
    fn new() -> Self {
        let squares = (FILES * RANKS) as usize;
        let mut tables = StepTables {
            king: [vec![Vec::new(); squares], vec![Vec::new(); squares]],
            advisor: [vec![Vec::new(); squares], vec![Vec::new(); squares]],
            elephant: [vec![Vec::new(); squares], vec![Vec::new(); squares]],
            horse: vec![Vec::new(); squares],
        };

        for sq in 0..squares {
            let from = Coord::from_index(sq);

            for color in [PieceColor::Red, PieceColor::Black] {
                let c = color_idx(color);
                let in_palace = |to: Coord| color.in_palace(to.file, to.rank);

                for (dx, dy) in ORTHOGONAL {
                    let to = from.offset(dx, dy);
                    if in_palace(to) {
                        tables.king[c][sq].push(Step { to, block: None });
                    }
                }
                for (dx, dy) in DIAGONAL {
                    let to = from.offset(dx, dy);
                    if in_palace(to) {
                        tables.advisor[c][sq].push(Step { to, block: None });
                    }
                }
                for (dx, dy) in ELEPHANT {
                    let to = from.offset(dx, dy);
                    if to.is_on_board() && color.on_own_side(to.rank) {
                        let eye = from.offset(dx / 2, dy / 2);
                        tables.elephant[c][sq].push(Step { to, block: Some(eye) });
                    }
                }
            }

            for (dx, dy) in HORSE {
                let to = from.offset(dx, dy);
                if to.is_on_board() {
                    let leg = horse_leg(from, dx, dy);
                    tables.horse[sq].push(Step { to, block: Some(leg) });
                }
            }
        }

        tables
    }
}

impl Piece {
    /// Pseudo-legal destinations for this piece on `board`, in generation
    /// order. Never returns an off-grid or ally-occupied square. Whether the
    /// move exposes the mover's own king is not considered.
    pub fn get_valid_moves(&self, board: &Board) -> Vec<Coord> {
        let mut moves = Vec::new();
        let c = color_idx(self.color);
        match self.kind {
            PieceType::King => self.add_steps(board, &STEP_TABLES.king[c], &mut moves),
            PieceType::Advisor => self.add_steps(board, &STEP_TABLES.advisor[c], &mut moves),
            PieceType::Elephant => self.add_steps(board, &STEP_TABLES.elephant[c], &mut moves),
            PieceType::Horse => self.add_steps(board, &STEP_TABLES.horse, &mut moves),
            PieceType::Chariot => self.add_chariot_moves(board, &mut moves),
            PieceType::Cannon => self.add_cannon_moves(board, &mut moves),
            PieceType::Pawn => self.add_pawn_moves(board, &mut moves),
        }
        moves
    }

    /// The exclusions every piece shares: stay on the grid and never land on
    /// an ally.
    fn can_land_on(&self, board: &Board, to: Coord) -> bool {
        to.is_on_board() && board.get_piece(to).map_or(true, |occupant| occupant.is_enemy_of(self))
    }

    fn add_steps(&self, board: &Board, table: &[Vec<Step>], moves: &mut Vec<Coord>) {
        if !self.position.is_on_board() {
            return;
        }
        for step in &table[self.position.index()] {
            let blocked = step.block.is_some_and(|sq| board.get_piece(sq).is_some());
            if !blocked && self.can_land_on(board, step.to) {
                moves.push(step.to);
            }
        }
    }

    fn add_chariot_moves(&self, board: &Board, moves: &mut Vec<Coord>) {
        for (dx, dy) in ORTHOGONAL {
            let mut to = self.position.offset(dx, dy);
            while to.is_on_board() {
                match board.get_piece(to) {
                    None => moves.push(to),
                    Some(occupant) => {
                        if occupant.is_enemy_of(self) {
                            moves.push(to);
                        }
                        break;
                    }
                }
                to = to.offset(dx, dy);
            }
        }
    }

    fn add_cannon_moves(&self, board: &Board, moves: &mut Vec<Coord>) {
        for (dx, dy) in ORTHOGONAL {
            let mut to = self.position.offset(dx, dy);
            let mut screened = false;
            while to.is_on_board() {
                match (board.get_piece(to), screened) {
                    (None, false) => moves.push(to),
                    (None, true) => {}
                    (Some(_), false) => screened = true,
                    (Some(target), true) => {
                        if target.is_enemy_of(self) {
                            moves.push(to);
                        }
                        break;
                    }
                }
                to = to.offset(dx, dy);
            }
        }
    }

    fn add_pawn_moves(&self, board: &Board, moves: &mut Vec<Coord>) {
        let forward = self.position.offset(0, self.color.forward());
        if self.can_land_on(board, forward) {
            moves.push(forward);
        }

        if !self.color.on_own_side(self.position.rank) {
            for dx in [-1, 1] {
                let side = self.position.offset(dx, 0);
                if self.can_land_on(board, side) {
                    moves.push(side);
                }
            }
        }
    }
}
