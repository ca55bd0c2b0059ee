//! Core chess types.
//!
//! This module contains the value types shared by the rules engine and the search:
//! - `PieceKind`, `Player` and `Piece` - piece kinds, sides, and pieces with their moved flag
//! - `Square` - an (x, y) board coordinate
//! - `Move` and `MoveList` - move representation
//! - `GameResult` and `EndReason` - terminal states

mod moves;
mod outcome;
mod piece;
mod square;

pub use moves::{Move, MoveList, MoveListIntoIter};
pub use outcome::{EndReason, GameResult};
pub use piece::{Piece, PieceKind, Player};
pub use square::Square;

