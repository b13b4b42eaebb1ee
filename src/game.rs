//! End-of-game detection. A game ends only when a king has been captured.

use crate::board::Board;
use crate::constants::{PieceColor, PieceType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Won(PieceColor),
}

fn has_king(board: &Board, color: PieceColor) -> bool {
    board.pieces_of(color).any(|p| p.kind == PieceType::King)
}

pub fn game_status(board: &Board) -> GameStatus {
    if !has_king(board, PieceColor::Red) {
        GameStatus::Won(PieceColor::Black)
    } else if !has_king(board, PieceColor::Black) {
        GameStatus::Won(PieceColor::Red)
    } else {
        GameStatus::Ongoing
    }
}

pub fn is_game_over(board: &Board) -> bool {
    game_status(board) != GameStatus::Ongoing
}

pub fn winner(board: &Board) -> Option<PieceColor> {
    match game_status(board) {
        GameStatus::Won(color) => Some(color),
        GameStatus::Ongoing => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;
    use crate::piece::Piece;

    #[test]
    fn test_start_is_ongoing() {
        let board = Board::new();
        assert_eq!(game_status(&board), GameStatus::Ongoing);
        assert!(!is_game_over(&board));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_red_king_captured() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceType::King, PieceColor::Red, Coord::new(4, 9))).unwrap();
        board.place(Piece::new(PieceType::King, PieceColor::Black, Coord::new(3, 0))).unwrap();
        let chariot = Piece::new(PieceType::Chariot, PieceColor::Black, Coord::new(4, 2));
        board.place(chariot).unwrap();
        assert!(!is_game_over(&board));

        assert!(chariot.get_valid_moves(&board).contains(&Coord::new(4, 9)));
        board.move_piece(&chariot, Coord::new(4, 9)).unwrap();
        assert!(is_game_over(&board));
        assert_eq!(winner(&board), Some(PieceColor::Black));
    }

    #[test]
    fn test_black_king_captured() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceType::King, PieceColor::Red, Coord::new(5, 9))).unwrap();
        board.place(Piece::new(PieceType::King, PieceColor::Black, Coord::new(4, 0))).unwrap();
        let horse = Piece::new(PieceType::Horse, PieceColor::Red, Coord::new(3, 2));
        board.place(horse).unwrap();

        board.move_piece(&horse, Coord::new(4, 0)).unwrap();
        assert_eq!(game_status(&board), GameStatus::Won(PieceColor::Red));
    }

    #[test]
    fn test_missing_red_king_is_checked_first() {
        let board = Board::empty();
        assert_eq!(winner(&board), Some(PieceColor::Black));
    }
}
