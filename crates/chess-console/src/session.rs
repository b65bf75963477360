//! The interactive read loop.

use crate::config::DisplayConfig;
use crate::input::{parse_command, Command, HELP};
use crate::render::render;
use chess_engine::{Game, Outcome};
use std::io::{self, BufRead, Write};

const WELCOME: &str =
    "Welcome to Chess Console Game! Capitalized is white, lowercase is black";

/// One interactive game over a line-based input and a text output.
pub struct Session<R, W> {
    game: Game,
    display: DisplayConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session for a fresh game.
    pub fn new(input: R, output: W, display: DisplayConfig) -> Self {
        Self::with_game(Game::new(), input, output, display)
    }

    /// Creates a session that continues an existing game.
    pub fn with_game(game: Game, input: R, output: W, display: DisplayConfig) -> Self {
        Session {
            game,
            display,
            input,
            output,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays until a king is captured, the player quits, or input ends.
    ///
    /// Returns the outcome if the game was decided.
    pub fn run(&mut self) -> io::Result<Option<Outcome>> {
        writeln!(self.output, "{}", WELCOME)?;
        self.draw()?;

        let mut buf = Vec::new();
        while !self.game.is_over() {
            write!(self.output, "{} to move: ", self.game.side_to_move())?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                tracing::info!("input closed");
                break;
            }
            // Undecodable bytes become U+FFFD and fail to parse as a move.
            let line = String::from_utf8_lossy(&buf);

            match parse_command(&line) {
                Ok(Command::Quit) => {
                    writeln!(self.output, "Goodbye.")?;
                    break;
                }
                Ok(Command::Help) => writeln!(self.output, "{}", HELP)?,
                Ok(Command::Board) => self.draw()?,
                Ok(Command::Move(m)) => match self.game.play(m) {
                    Ok(_) => self.draw()?,
                    Err(e) => {
                        tracing::warn!(mv = %m, error = %e, "move rejected");
                        writeln!(self.output, "{}. Try again.", e)?;
                    }
                },
                Err(e) => {
                    tracing::warn!(input = line.trim(), error = %e, "unparseable input");
                    writeln!(self.output, "Could not read move: {}. Type \"help\" for usage.", e)?;
                }
            }
        }

        if let Some(outcome) = self.game.outcome() {
            writeln!(self.output, "{}", outcome)?;
        }
        Ok(self.game.outcome())
    }

    fn draw(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", render(self.game.board(), &self.display))?;
        writeln!(self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Kind, Piece, Position, Side};
    use chess_engine::Board;
    use std::io::Cursor;

    fn play(script: &str) -> (Option<Outcome>, Game, String) {
        play_from(Game::new(), script)
    }

    fn play_from(game: Game, script: &str) -> (Option<Outcome>, Game, String) {
        play_bytes(game, script.as_bytes())
    }

    fn play_bytes(game: Game, script: &[u8]) -> (Option<Outcome>, Game, String) {
        let mut output = Vec::new();
        let mut session = Session::with_game(
            game,
            Cursor::new(script),
            &mut output,
            DisplayConfig::default(),
        );
        let outcome = session.run().unwrap();
        let game = session.game().clone();
        drop(session);
        (outcome, game, String::from_utf8(output).unwrap())
    }

    fn sq(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    #[test]
    fn welcome_and_first_prompt() {
        let (outcome, _, text) = play("");
        assert_eq!(outcome, None);
        assert!(text.starts_with(WELCOME));
        assert!(text.contains("8 r n b q k b n r 8"));
        assert!(text.contains("White to move: "));
    }

    #[test]
    fn legal_move_passes_turn() {
        let (_, game, text) = play("e2 e4\n");
        assert_eq!(game.side_to_move(), Side::Black);
        assert_eq!(game.board().get(sq("e4")), Some(Piece::new(Kind::Pawn, Side::White)));
        assert!(text.contains("4 . . . . P . . . 4"));
        assert!(text.contains("Black to move: "));
    }

    #[test]
    fn illegal_move_reprompts_same_side() {
        let (_, game, text) = play("e2e5\ne7e5\n");
        assert_eq!(*game.board(), Board::initial());
        assert_eq!(game.side_to_move(), Side::White);
        assert!(text.contains("illegal move: e2e5. Try again."));
        assert!(!text.contains("Invalid move"));
        assert!(text.contains("does not belong to White"));
        assert_eq!(text.matches("White to move: ").count(), 3);
    }

    #[test]
    fn unparseable_input_reprompts() {
        let (_, game, text) = play("hello\n\n");
        assert_eq!(game.side_to_move(), Side::White);
        assert!(text.contains("Could not read move"));
        assert_eq!(text.matches("White to move: ").count(), 3);
    }

    #[test]
    fn non_utf8_line_reprompts() {
        let (_, game, text) = play_bytes(Game::new(), b"\xff\xfe\ne2e4\n");
        assert!(text.contains("Could not read move"));
        assert_eq!(game.side_to_move(), Side::Black);
        assert_eq!(game.board().get(sq("e4")), Some(Piece::new(Kind::Pawn, Side::White)));
    }

    #[test]
    fn quit_stops_the_loop() {
        let (outcome, game, text) = play("quit\ne2e4\n");
        assert_eq!(outcome, None);
        assert_eq!(*game.board(), Board::initial());
        assert!(text.contains("Goodbye."));
    }

    #[test]
    fn help_and_board_commands() {
        let (_, _, text) = play("help\nboard\n");
        assert!(text.contains("Other commands"));
        assert_eq!(text.matches("1 R N B Q K B N R 1").count(), 2);
    }

    #[test]
    fn king_capture_reports_winner() {
        let board = Board::from_placement("4k3/8/8/8/8/8/8/4R2K").unwrap();
        let game = Game::from_board(board, Side::White);
        let (outcome, _, text) = play_from(game, "e1e8\nh1h2\n");
        assert_eq!(outcome, Some(Outcome::WhiteWins));
        assert!(text.trim_end().ends_with("White wins!"));
        assert_eq!(text.matches("to move: ").count(), 1);
    }
}
