//! The core board representation for the Xiangqi engine.

use crate::constants::{PieceColor, PieceType, BACK_RANK, CANNON_FILES, PAWN_FILES};
use crate::coord::Coord;
use crate::engine::{MoveSelector, RandomSelector};
use crate::piece::Piece;
use crate::r#move::Move;
use log::{debug, warn};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("square {0} is off the board")]
    OffBoard(Coord),
    #[error("square {0} is already occupied by {1}")]
    Occupied(Coord, Piece),
    #[error("{0} is not on the board")]
    NotOnBoard(Piece),
    #[error("{0} is already on {1}")]
    SameSquare(Piece, Coord),
}

/// Owns every live piece, in insertion order. An empty square is simply a
/// coordinate no piece claims; at most one piece ever holds a coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pieces: Vec<Piece>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard 32-piece starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for color in [PieceColor::Red, PieceColor::Black] {
            let (back, cannons, pawns) = match color {
                PieceColor::Red => (9, 7, 6),
                PieceColor::Black => (0, 2, 3),
            };
            let mut layout: Vec<(PieceType, Coord)> = BACK_RANK
                .iter()
                .enumerate()
                .map(|(file, &kind)| (kind, Coord::new(file as i32, back)))
                .collect();
            layout.extend(CANNON_FILES.iter().map(|&f| (PieceType::Cannon, Coord::new(f, cannons))));
            layout.extend(PAWN_FILES.iter().map(|&f| (PieceType::Pawn, Coord::new(f, pawns))));

            for (kind, position) in layout {
                board.pieces.push(Piece::new(kind, color, position));
            }
        }
        board
    }

    pub fn empty() -> Self {
        Self { pieces: Vec::with_capacity(32) }
    }

    /// Adds a piece for setting up a position. Keeps the one-piece-per-square
    /// and on-grid invariants.
    pub fn place(&mut self, piece: Piece) -> Result<(), BoardError> {
        if !piece.position.is_on_board() {
            return Err(BoardError::OffBoard(piece.position));
        }
        if let Some(occupant) = self.get_piece(piece.position) {
            return Err(BoardError::Occupied(piece.position, *occupant));
        }
        self.pieces.push(piece);
        Ok(())
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn pieces_of(&self, color: PieceColor) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// The occupant of `coord`, or `None` for an empty or off-board square.
    pub fn get_piece(&self, coord: Coord) -> Option<&Piece> {
        if !coord.is_on_board() {
            return None;
        }
        self.pieces.iter().find(|p| p.position == coord)
    }

    pub fn get_piece_at(&self, file: i32, rank: i32) -> Option<&Piece> {
        self.get_piece(Coord::new(file, rank))
    }

    /// Moves `piece` to `to`, removing any occupant of `to` first. Legality
    /// is the caller's responsibility; the captured piece, if any, is
    /// returned.
    ///
    /// `piece` must match the live piece on its square exactly, so a stale
    /// copy of a captured piece is rejected. On error the board is untouched.
    pub fn move_piece(&mut self, piece: &Piece, to: Coord) -> Result<Option<Piece>, BoardError> {
        let from = piece.position;
        if self.get_piece(from) != Some(piece) {
            warn!("ignoring move of {} to {}: not on the board", piece, to);
            return Err(BoardError::NotOnBoard(*piece));
        }
        if !to.is_on_board() {
            return Err(BoardError::OffBoard(to));
        }
        if from == to {
            return Err(BoardError::SameSquare(*piece, to));
        }

        let captured = self
            .pieces
            .iter()
            .position(|p| p.position == to)
            .map(|idx| self.pieces.remove(idx));

        if let Some(mover) = self.pieces.iter_mut().find(|p| p.position == from) {
            mover.position = to;
        }

        match captured {
            Some(victim) => debug!("{}{}: captured {}", from, to, victim),
            None => debug!("{}{}", from, to),
        }
        Ok(captured)
    }

    /// Applies a move produced by a selector or by [`Board::legal_moves_for`].
    pub fn apply(&mut self, mv: Move) -> Result<Option<Piece>, BoardError> {
        self.move_piece(&mv.piece, mv.to)
    }

    /// Every (piece, destination) pair available to `color`.
    pub fn legal_moves_for(&self, color: PieceColor) -> Vec<Move> {
        self.pieces_of(color)
            .flat_map(|piece| {
                piece
                    .get_valid_moves(self)
                    .into_iter()
                    .map(move |to| Move::new(*piece, to))
            })
            .collect()
    }

    /// Picks a uniformly random Black piece, then a uniformly random valid
    /// destination for it. `None` if Black has no pieces or the chosen piece
    /// cannot move; no second piece is tried.
    pub fn get_ai_move(&self) -> Option<Move> {
        RandomSelector::new(rand::thread_rng()).select_move(self, PieceColor::Black)
    }

    /// Plays [`Board::get_ai_move`] if it produced a move. Returns whether the
    /// board changed.
    pub fn make_ai_move(&mut self) -> bool {
        self.get_ai_move().is_some_and(|mv| self.apply(mv).is_ok())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "  +-------------------+")?;
        for rank in 0..10 {
            write!(f, "{} | ", 9 - rank)?;
            for file in 0..9 {
                let c = self.get_piece_at(file, rank).map_or('.', Piece::to_fen_char);
                write!(f, "{} ", c)?;
            }
            writeln!(f, "|")?;
            if rank == 4 {
                writeln!(f, "  |~~~~~~~~~~~~~~~~~~~|")?;
            }
        }
        writeln!(f, "  +-------------------+")?;
        writeln!(f, "    a b c d e f g h i")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{game_status, GameStatus};
    use std::collections::HashSet;

    fn piece(kind: PieceType, color: PieceColor, file: i32, rank: i32) -> Piece {
        Piece::new(kind, color, Coord::new(file, rank))
    }

    #[test]
    fn test_starting_position() {
        let board = Board::new();
        assert_eq!(board.piece_count(), 32);
        assert_eq!(board.pieces_of(PieceColor::Red).count(), 16);
        assert_eq!(board.pieces_of(PieceColor::Black).count(), 16);

        let red_king = board.get_piece_at(4, 9).unwrap();
        assert_eq!((red_king.kind, red_king.color), (PieceType::King, PieceColor::Red));
        let black_cannon = board.get_piece_at(7, 2).unwrap();
        assert_eq!((black_cannon.kind, black_cannon.color), (PieceType::Cannon, PieceColor::Black));
        let red_pawn = board.get_piece_at(8, 6).unwrap();
        assert_eq!(red_pawn.kind, PieceType::Pawn);

        for color in [PieceColor::Red, PieceColor::Black] {
            for kind in PieceType::ALL {
                let expected = match kind {
                    PieceType::King => 1,
                    PieceType::Pawn => 5,
                    _ => 2,
                };
                let count = board.pieces_of(color).filter(|p| p.kind == kind).count();
                assert_eq!(count, expected, "{:?} {:?}", color, kind);
            }
        }

        let squares: HashSet<Coord> = board.pieces().iter().map(|p| p.position).collect();
        assert_eq!(squares.len(), 32);
    }

    #[test]
    fn test_get_piece_off_board_is_empty() {
        let board = Board::new();
        assert!(board.get_piece_at(-1, 0).is_none());
        assert!(board.get_piece_at(9, 9).is_none());
        assert!(board.get_piece_at(4, 10).is_none());
        assert!(board.get_piece_at(4, 4).is_none());
    }

    #[test]
    fn test_place_rejects_conflicts() {
        let mut board = Board::empty();
        let king = piece(PieceType::King, PieceColor::Red, 4, 9);
        assert_eq!(board.place(king), Ok(()));
        assert_eq!(
            board.place(piece(PieceType::Chariot, PieceColor::Black, 4, 9)),
            Err(BoardError::Occupied(Coord::new(4, 9), king))
        );
        assert_eq!(
            board.place(piece(PieceType::Pawn, PieceColor::Black, 9, 0)),
            Err(BoardError::OffBoard(Coord::new(9, 0)))
        );
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn test_capture_removes_exactly_one_piece() {
        let mut board = Board::new();
        // Red cannon h2 takes the black horse on h9 over the h7 screen.
        let cannon = *board.get_piece_at(7, 7).unwrap();
        assert!(cannon.get_valid_moves(&board).contains(&Coord::new(7, 0)));

        let captured = board.move_piece(&cannon, Coord::new(7, 0)).unwrap();
        assert_eq!(captured.map(|p| (p.kind, p.color)), Some((PieceType::Horse, PieceColor::Black)));
        assert_eq!(board.piece_count(), 31);
        let moved = board.get_piece_at(7, 0).unwrap();
        assert_eq!((moved.kind, moved.color), (PieceType::Cannon, PieceColor::Red));
        assert!(board.get_piece_at(7, 7).is_none());
    }

    #[test]
    fn test_quiet_move_keeps_count() {
        let mut board = Board::new();
        let pawn = *board.get_piece_at(4, 6).unwrap();
        assert_eq!(board.move_piece(&pawn, Coord::new(4, 5)), Ok(None));
        assert_eq!(board.piece_count(), 32);
        assert_eq!(board.get_piece_at(4, 5).map(|p| p.kind), Some(PieceType::Pawn));
    }

    #[test]
    fn test_move_piece_ignores_bogus_requests() {
        let mut board = Board::new();
        let before = board.clone();

        let ghost = piece(PieceType::Chariot, PieceColor::Red, 4, 4);
        assert_eq!(
            board.move_piece(&ghost, Coord::new(4, 3)),
            Err(BoardError::NotOnBoard(ghost))
        );

        let king = *board.get_piece_at(4, 9).unwrap();
        assert_eq!(
            board.move_piece(&king, Coord::new(4, 9)),
            Err(BoardError::SameSquare(king, Coord::new(4, 9)))
        );
        assert_eq!(
            board.move_piece(&king, Coord::new(4, 10)),
            Err(BoardError::OffBoard(Coord::new(4, 10)))
        );

        // Right square, wrong piece.
        let impostor = piece(PieceType::Advisor, PieceColor::Red, 4, 9);
        assert!(board.move_piece(&impostor, Coord::new(4, 8)).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_captured_piece_cannot_move_its_captor() {
        let mut board = Board::empty();
        let pawn = piece(PieceType::Pawn, PieceColor::Black, 4, 5);
        let chariot = piece(PieceType::Chariot, PieceColor::Red, 4, 8);
        board.place(pawn).unwrap();
        board.place(chariot).unwrap();

        assert_eq!(board.move_piece(&chariot, Coord::new(4, 5)), Ok(Some(pawn)));
        let before = board.clone();

        // The stale pawn still claims (4,5), where the chariot now stands.
        assert_eq!(
            board.move_piece(&pawn, Coord::new(4, 6)),
            Err(BoardError::NotOnBoard(pawn))
        );
        assert_eq!(board, before);
        assert_eq!(board.get_piece_at(4, 5).map(|p| p.kind), Some(PieceType::Chariot));
    }

    #[test]
    fn test_random_games_keep_squares_unique() {
        let mut board = Board::new();
        let mut side = PieceColor::Red;
        for _ in 0..200 {
            let moves = board.legal_moves_for(side);
            if moves.is_empty() || game_status(&board) != GameStatus::Ongoing {
                break;
            }
            board.apply(moves[board.piece_count() * 7 % moves.len()]).unwrap();

            let squares: HashSet<Coord> = board.pieces().iter().map(|p| p.position).collect();
            assert_eq!(squares.len(), board.piece_count());
            assert!(board.pieces().iter().all(|p| p.position.is_on_board()));
            side = side.opponent();
        }
    }

    #[test]
    fn test_make_ai_move_without_black_pieces() {
        let mut board = Board::empty();
        board.place(piece(PieceType::King, PieceColor::Red, 4, 9)).unwrap();
        board.place(piece(PieceType::Chariot, PieceColor::Red, 0, 9)).unwrap();
        let before = board.clone();

        assert!(board.get_ai_move().is_none());
        assert!(!board.make_ai_move());
        assert_eq!(board, before);
    }

    #[test]
    fn test_make_ai_move_from_start() {
        let mut board = Board::new();
        let before = board.clone();
        // Every Black piece has at least one move in the opening position.
        assert!(board.make_ai_move());
        assert_ne!(board, before);
        assert_eq!(board.pieces_of(PieceColor::Black).count(), 16);
        assert!(board.piece_count() >= 31);
    }

    #[test]
    fn test_display() {
        let text = Board::new().to_string();
        assert!(text.contains("9 | r n b a k a b n r |"));
        assert!(text.contains("0 | R N B A K A B N R |"));
        assert!(text.contains("    a b c d e f g h i"));
    }
}
