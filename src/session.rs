//! Game session: the board plus the turn, selection and result state that a
//! front end needs between inputs.
//!
//! The board itself never enforces turn order. This type does, so front ends
//! should go through it instead of calling [`Board::move_piece`] directly.

use crate::board::Board;
use crate::constants::PieceColor;
use crate::coord::Coord;
use crate::engine::MoveSelector;
use crate::game::{game_status, GameStatus};
use crate::piece::Piece;
use crate::r#move::Move;
use log::{info, warn};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("the game is over")]
    GameOver,
    #[error("no piece on {0}")]
    EmptySquare(Coord),
    #[error("{0} belongs to {1}, but it is {2}'s turn")]
    NotYourPiece(Coord, PieceColor, PieceColor),
    #[error("{0} cannot move to {1}")]
    IllegalMove(Coord, Coord),
}

/// What a pointer click on the board did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    Selected(Coord),
    Deselected,
    Moved { from: Coord, to: Coord, captured: Option<Piece> },
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    current_player: PieceColor,
    ai_color: PieceColor,
    selected: Option<Coord>,
    status: GameStatus,
}

impl GameSession {
    /// A fresh game with Red to move.
    pub fn new(ai_color: PieceColor) -> Self {
        Self::from_board(Board::new(), PieceColor::Red, ai_color)
    }

    pub fn from_board(board: Board, current_player: PieceColor, ai_color: PieceColor) -> Self {
        let status = game_status(&board);
        Self {
            board,
            current_player,
            ai_color,
            selected: None,
            status,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> PieceColor {
        self.current_player
    }

    pub fn ai_color(&self) -> PieceColor {
        self.ai_color
    }

    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Ongoing
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && self.current_player == self.ai_color
    }

    /// Destinations of the selected piece, for highlighting.
    pub fn highlighted_moves(&self) -> Vec<Coord> {
        self.selected
            .and_then(|sq| self.board.get_piece(sq))
            .map(|piece| piece.get_valid_moves(&self.board))
            .unwrap_or_default()
    }

    /// Handles a click on `coord` by the side to move. With nothing selected
    /// an own piece becomes selected. With a piece selected, a valid
    /// destination plays the move; anything else just clears the selection.
    pub fn click(&mut self, coord: Coord) -> ClickOutcome {
        if self.is_over() || !coord.is_on_board() {
            return ClickOutcome::Ignored;
        }

        let Some(from) = self.selected.take() else {
            return match self.board.get_piece(coord) {
                Some(piece) if piece.color == self.current_player => {
                    self.selected = Some(coord);
                    ClickOutcome::Selected(coord)
                }
                _ => ClickOutcome::Ignored,
            };
        };

        match self.play_move(from, coord) {
            Ok(captured) => ClickOutcome::Moved {
                from,
                to: coord,
                captured,
            },
            Err(_) => ClickOutcome::Deselected,
        }
    }

    /// Plays `from` to `to` for the side to move if it is one of the piece's
    /// valid moves. Returns the captured piece.
    pub fn play_move(&mut self, from: Coord, to: Coord) -> Result<Option<Piece>, SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }
        let piece = *self.board.get_piece(from).ok_or(SessionError::EmptySquare(from))?;
        if piece.color != self.current_player {
            return Err(SessionError::NotYourPiece(from, piece.color, self.current_player));
        }
        if !piece.get_valid_moves(&self.board).contains(&to) {
            return Err(SessionError::IllegalMove(from, to));
        }

        let captured = self
            .board
            .move_piece(&piece, to)
            .map_err(|_| SessionError::IllegalMove(from, to))?;
        self.finish_turn();
        Ok(captured)
    }

    /// Asks `selector` for a move when it is the computer's turn and plays
    /// it. On `None`, including a move the board refuses, the turn does not
    /// pass.
    pub fn play_ai_turn<S: MoveSelector>(&mut self, selector: &mut S) -> Option<Move> {
        if !self.is_ai_turn() {
            return None;
        }
        let mv = selector.select_move(&self.board, self.ai_color)?;
        if let Err(e) = self.board.apply(mv) {
            warn!("selector proposed {}: {}", mv, e);
            return None;
        }
        self.finish_turn();
        Some(mv)
    }

    fn finish_turn(&mut self) {
        self.selected = None;
        self.current_player = self.current_player.opponent();
        self.status = game_status(&self.board);
        if let GameStatus::Won(color) = self.status {
            info!("game over, {} wins", color);
        }
    }
}
