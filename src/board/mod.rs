//! Chess board representation and rules.
//!
//! The board is a plain 8x8 grid of optional pieces. Move generation works
//! piece by piece on that grid; legality is decided by playing each candidate
//! out on a cloned board. Supports castling and promotion to a queen; there
//! is no en passant.
//!
//! # Example
//! ```
//! use chess_duel::board::{Board, Player};
//!
//! let board = Board::new();
//! let moves = board.all_legal_moves(Player::White);
//! assert_eq!(moves.len(), 20);
//! ```

mod builder;
mod error;
mod eval;
mod legality;
mod make_unmake;
mod movegen;
mod perft;
pub mod prelude;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{DiagramError, PieceError, PlayerError, SquareError};
pub use make_unmake::UnmakeInfo;
pub use state::{Board, PieceFilter};
pub use types::{
    EndReason, GameResult, Move, MoveList, MoveListIntoIter, Piece, PieceKind, Player, Square,
};
