//! Line-oriented console front end.
//!
//! Reads one command per line and writes the board and replies to the
//! output. Rejected commands are reported and logged; they never end the
//! session.

mod command;

use std::fmt;
use std::io::{self, BufRead, Write};

use log::warn;

use crate::board::{Board, PieceError, PlayerError, SquareError};
use crate::engine::{Game, GameConfig, GameError};

pub use command::{parse_console_command, ConsoleCommand, NewGame};

const HELP: &str = "\
Commands:
  board                 show the board
  move e2 e4 | e2e4     move a piece
  moves e2              legal destinations of a piece
  turn                  side to move
  new [white|black|none]  restart, optionally with the engine on one side
  place e4 Q            put a piece (uppercase white, lowercase black)
  remove e4             take a piece off
  clear                 empty the board
  winner                check for checkmate or stalemate
  quit                  leave";

/// Error type for console commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// Unrecognized command word
    UnknownCommand { command: String },
    /// A required argument is absent
    MissingArgument {
        command: String,
        argument: &'static str,
    },
    /// An argument has the wrong shape
    InvalidArgument { argument: String },
    /// The game already has a result
    GameOver,
    Square(SquareError),
    Piece(PieceError),
    Player(PlayerError),
    Game(GameError),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::UnknownCommand { command } => {
                write!(f, "Unknown command '{command}' (try 'help')")
            }
            ConsoleError::MissingArgument { command, argument } => {
                write!(f, "'{command}' needs a {argument} argument")
            }
            ConsoleError::InvalidArgument { argument } => {
                write!(f, "Invalid argument '{argument}'")
            }
            ConsoleError::GameOver => {
                write!(f, "The game is over; start a new one with 'new'")
            }
            ConsoleError::Square(e) => write!(f, "{e}"),
            ConsoleError::Piece(e) => write!(f, "{e}"),
            ConsoleError::Player(e) => write!(f, "{e}"),
            ConsoleError::Game(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Square(e) => Some(e),
            ConsoleError::Piece(e) => Some(e),
            ConsoleError::Player(e) => Some(e),
            ConsoleError::Game(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SquareError> for ConsoleError {
    fn from(e: SquareError) -> Self {
        ConsoleError::Square(e)
    }
}

impl From<PieceError> for ConsoleError {
    fn from(e: PieceError) -> Self {
        ConsoleError::Piece(e)
    }
}

impl From<PlayerError> for ConsoleError {
    fn from(e: PlayerError) -> Self {
        ConsoleError::Player(e)
    }
}

impl From<GameError> for ConsoleError {
    fn from(e: GameError) -> Self {
        ConsoleError::Game(e)
    }
}

/// Session state: the game and the configuration used to restart it.
pub struct Console {
    game: Game,
    config: GameConfig,
}

impl Console {
    /// A fresh game set up from `config`. An engine playing White opens.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut game = Game::from_config(Board::new(), &config);
        game.play_ai_turn();
        Console { game, config }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run one command and return the text to show.
    pub fn execute(&mut self, cmd: ConsoleCommand) -> Result<String, ConsoleError> {
        let reply = match cmd {
            ConsoleCommand::Board => self.game.board().to_string(),
            ConsoleCommand::Move { from, to } => {
                if self.game.result().is_some() {
                    return Err(ConsoleError::GameOver);
                }
                let result = self.game.move_piece(from, to)?;
                let mut reply = self.game.board().to_string();
                if let Some(result) = result {
                    reply.push_str(&format!("\n{result}"));
                }
                reply
            }
            ConsoleCommand::Moves(square) => {
                let destinations = self.game.legal_destinations(square);
                if destinations.is_empty() {
                    format!("{square}: no legal moves")
                } else {
                    let list: Vec<String> = destinations.iter().map(ToString::to_string).collect();
                    format!("{square}: {}", list.join(" "))
                }
            }
            ConsoleCommand::Turn => {
                let player = self.game.current_player();
                match self.game.ai_player() {
                    Some(ai) => format!("{player} to move ({ai} is the engine)"),
                    None => format!("{player} to move"),
                }
            }
            ConsoleCommand::New(setup) => {
                let mut config = self.config.clone();
                match setup {
                    NewGame::Configured => {}
                    NewGame::Human => config.ai_player = None,
                    NewGame::Ai(player) => config.ai_player = Some(player),
                }
                *self = Console::new(config);
                self.game.board().to_string()
            }
            ConsoleCommand::Place { square, piece } => {
                self.game.clear_result();
                self.game.board_mut().place(square, piece);
                self.game.board().to_string()
            }
            ConsoleCommand::Remove(square) => {
                self.game.clear_result();
                self.game.board_mut().remove(square);
                self.game.board().to_string()
            }
            ConsoleCommand::Clear => {
                self.game.clear_result();
                self.game.board_mut().clear();
                self.game.board().to_string()
            }
            ConsoleCommand::Winner => match self.game.check_winner() {
                Some(result) => result.to_string(),
                None => "No winner yet".to_string(),
            },
            ConsoleCommand::Help => HELP.to_string(),
            ConsoleCommand::Quit => String::new(),
        };
        Ok(reply)
    }
}

/// Read commands from `input` until `quit` or end of input.
pub fn run_console_loop<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: &GameConfig,
) -> io::Result<()> {
    let mut console = Console::new(config.clone());
    writeln!(output, "{}", console.game().board())?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let reply = match parse_console_command(&line) {
            Ok(None) => continue,
            Ok(Some(ConsoleCommand::Quit)) => break,
            Ok(Some(cmd)) => console.execute(cmd),
            Err(e) => Err(e),
        };
        match reply {
            Ok(text) => writeln!(output, "{text}")?,
            Err(e) => {
                warn!("Rejected '{}': {e}", line.trim());
                writeln!(output, "Error: {e}")?;
            }
        }
        output.flush()?;
    }

    Ok(())
}
