//! Classification of lines typed at the prompt.

use chess_core::{Move, MoveParseError};

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Attempt a move.
    Move(Move),
    /// Redraw the board.
    Board,
    /// Show usage.
    Help,
    /// Leave the game.
    Quit,
}

/// Help text shown on request.
pub const HELP: &str = "\
Enter a move as two squares, for example \"e2 e4\", \"e2e4\" or \"e2-e4\".
Other commands: board (redraw), help, quit.";

/// Parses one line of input.
///
/// Anything that is not a known command must be a move in coordinate
/// notation; otherwise the parse error is returned so the caller can
/// re-prompt.
pub fn parse_command(line: &str) -> Result<Command, MoveParseError> {
    match line.trim().to_ascii_lowercase().as_str() {
        "quit" | "exit" => Ok(Command::Quit),
        "help" | "?" => Ok(Command::Help),
        "board" => Ok(Command::Board),
        other => Move::from_coordinates(other).map(Command::Move),
    }
}
