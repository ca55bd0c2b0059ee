use std::fmt;

use crate::board::{Player, Square};

/// Reasons a requested move is rejected. The game state is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Start square is empty or off the board
    NoPieceAtSquare { square: Square },
    /// The piece belongs to the side not on move
    WrongTurn { square: Square, owner: Player },
    /// No legal move of the piece reaches the destination
    IllegalMove { from: Square, to: Square },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NoPieceAtSquare { square } => {
                write!(f, "No piece at {square}")
            }
            GameError::WrongTurn { square, owner } => {
                write!(f, "It's not {owner}'s turn (piece at {square})")
            }
            GameError::IllegalMove { from, to } => {
                write!(f, "Illegal move {from}{to}")
            }
        }
    }
}

impl std::error::Error for GameError {}
