//! Terminal game states.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Player;

/// Why a game ended.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EndReason {
    Checkmate,
    Stalemate,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::Checkmate => write!(f, "checkmate"),
            EndReason::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Outcome of a finished game. `winner` is `None` for a draw.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameResult {
    pub winner: Option<Player>,
    pub reason: EndReason,
}

impl GameResult {
    #[must_use]
    pub const fn checkmate(winner: Player) -> Self {
        GameResult {
            winner: Some(winner),
            reason: EndReason::Checkmate,
        }
    }

    #[must_use]
    pub const fn stalemate() -> Self {
        GameResult {
            winner: None,
            reason: EndReason::Stalemate,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Some(player) => write!(f, "{player} wins! ({})", self.reason),
            None => write!(f, "Nobody wins! ({})", self.reason),
        }
    }
}
