//! The textual user interface: a human against the random computer player.

use crate::config::Config;
use crate::constants::PieceColor;
use crate::coord::{Coord, NotationError};
use crate::engine::{MoveSelector, RandomSelector};
use crate::game::GameStatus;
use crate::r#move::Move;
use crate::session::{GameSession, SessionError};
use crossterm::style::Stylize;
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}, type 'help'")]
    Unknown(String),
    #[error(transparent)]
    Notation(#[from] NotationError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Move(Coord, Coord),
    Select(Coord),
    Board,
    Help,
    Exit,
}

fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let command = match (words.next(), words.next()) {
        (None, _) => Command::Board,
        (Some("exit" | "quit"), None) => Command::Exit,
        (Some("help"), None) => Command::Help,
        (Some("board"), None) => Command::Board,
        (Some("sel" | "select"), Some(square)) => Command::Select(Coord::from_notation(square)?),
        (Some(word), None) if word.len() == 2 => Command::Select(Coord::from_notation(word)?),
        (Some(word), None) if word.len() == 4 => {
            let (from, to) = Move::parse(word)?;
            Command::Move(from, to)
        }
        _ => return Err(CommandError::Unknown(line.trim().to_string())),
    };
    Ok(command)
}

const HELP: &str = "\
Commands:
  h2e2        move the piece on h2 to e2
  e3 | sel e3 show where the piece on e3 can go
  board       redraw the board
  help        show this text
  exit        quit";

/// Renders the board with Chinese glyphs, marking the given destinations.
fn render(session: &GameSession, marks: &[Coord]) -> String {
    let board = session.board();
    let mut out = String::new();
    for rank in 0..10 {
        out.push_str(&format!("{} ", 9 - rank));
        for file in 0..9 {
            let sq = Coord::new(file, rank);
            let cell = match board.get_piece(sq) {
                Some(piece) => {
                    let glyph = piece.glyph().to_string();
                    let glyph = match piece.color {
                        PieceColor::Red => glyph.red().bold(),
                        PieceColor::Black => glyph.white().bold(),
                    };
                    let glyph = if marks.contains(&sq) { glyph.on_dark_green() } else { glyph };
                    if session.selected() == Some(sq) {
                        glyph.underlined().to_string()
                    } else {
                        glyph.to_string()
                    }
                }
                None if marks.contains(&sq) => "＊".green().to_string(),
                None => "＋".dark_grey().to_string(),
            };
            out.push_str(&cell);
        }
        out.push('\n');
        if rank == 4 {
            out.push_str(&format!("  {}\n", "  楚 河      汉 界".dark_cyan()));
        }
    }
    out.push_str("  a b c d e f g h i\n");
    out
}

fn print_status(session: &GameSession) {
    match session.status() {
        GameStatus::Won(color) => println!("{}", format!("{} wins!", color).yellow().bold()),
        GameStatus::Ongoing => println!("{} to move.", session.current_player()),
    }
}

/// Lets the computer move, asking the selector again when the randomly
/// drawn piece turns out to have no moves.
fn computer_turn<S: MoveSelector>(session: &mut GameSession, selector: &mut S, config: &Config) -> bool {
    println!("Computer is thinking...");
    thread::sleep(Duration::from_millis(config.ai_delay_ms));

    for attempt in 1..=config.max_ai_attempts {
        if let Some(mv) = session.play_ai_turn(selector) {
            println!("Computer moved {} ({}).", mv, mv.piece);
            return true;
        }
        if attempt % 16 == 0 {
            warn!("computer still has no move after {} attempts", attempt);
        }
    }
    false
}

/// Carries out one line of input. Returns `false` when the player quits.
fn execute(session: &mut GameSession, line: &str, marks: &mut Vec<Coord>) -> Result<bool, CommandError> {
    match parse_command(line)? {
        Command::Exit => return Ok(false),
        Command::Help => println!("{}", HELP),
        Command::Board => {}
        Command::Select(sq) => match session.board().get_piece(sq) {
            Some(piece) => {
                *marks = piece.get_valid_moves(session.board());
                let list: Vec<String> = marks.iter().map(Coord::to_string).collect();
                println!("{} can go to: {}", piece, list.join(" "));
            }
            None => println!("No piece on {}.", sq),
        },
        Command::Move(from, to) => {
            if let Some(captured) = session.play_move(from, to)? {
                println!("Captured {}.", captured);
            }
        }
    }
    Ok(true)
}

/// Runs the main game loop for the text-based UI.
pub fn run(config: &Config) -> io::Result<()> {
    let mut session = GameSession::new(config.ai_color);
    let mut selector = match config.seed {
        Some(seed) => RandomSelector::seeded(seed),
        None => RandomSelector::from_entropy(),
    };
    info!(
        "new game, human plays {}, computer plays {}",
        config.human_color, config.ai_color
    );

    println!("--- Xiangqi ---");
    println!("You play {}. Type 'help' for commands.", config.human_color);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut marks: Vec<Coord> = Vec::new();

    loop {
        println!();
        print!("{}", render(&session, &marks));
        print_status(&session);
        marks.clear();

        if session.is_over() {
            break;
        }

        if session.is_ai_turn() {
            if !computer_turn(&mut session, &mut selector, config) {
                println!("The computer could not find a move.");
                break;
            }
            continue;
        }

        print!("Your move: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match execute(&mut session, &line, &mut marks) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => println!("{}", e),
        }
    }

    Ok(())
}
