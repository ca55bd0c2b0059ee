//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_duel::board::prelude::*;
//!
//! let board = Board::new();
//! assert!(board.check_winner().is_none());
//! ```

pub use super::{
    Board, BoardBuilder, EndReason, GameResult, Move, Piece, PieceKind, Player, Square,
};
