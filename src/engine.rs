//! Move selection for the computer side.

use crate::board::Board;
use crate::constants::PieceColor;
use crate::piece::Piece;
use crate::r#move::Move;
use log::trace;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Chooses a move for one side. Implementations only read the board.
pub trait MoveSelector {
    fn select_move(&mut self, board: &Board, side: PieceColor) -> Option<Move>;
}

/// Uniformly random piece, then a uniformly random destination for it.
///
/// A piece with no destinations yields `None` instead of falling back to
/// another piece; callers decide whether to ask again.
pub struct RandomSelector<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSelector<StdRng> {
    /// A reproducible selector.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> MoveSelector for RandomSelector<R> {
    fn select_move(&mut self, board: &Board, side: PieceColor) -> Option<Move> {
        let pieces: Vec<Piece> = board.pieces_of(side).copied().collect();
        let piece = *pieces.choose(&mut self.rng)?;

        let moves = piece.get_valid_moves(board);
        let Some(&to) = moves.choose(&mut self.rng) else {
            trace!("{} has no moves", piece);
            return None;
        };

        trace!("picked {} -> {} out of {} moves", piece, to, moves.len());
        Some(Move::new(piece, to))
    }
}
