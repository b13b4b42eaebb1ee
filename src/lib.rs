pub mod board;
pub mod config;
pub mod constants;
pub mod coord;
pub mod engine;
pub mod game;
pub mod move_gen;
pub mod piece;
pub mod r#move;
pub mod session;
pub mod tui;

pub use board::Board;
pub use constants::{PieceColor, PieceType};
pub use coord::Coord;
pub use piece::Piece;
