pub mod board;
pub mod console;
pub mod engine;
pub mod tt;
mod zobrist;

pub use board::search::Searcher;
pub use board::{Board, GameResult, Move, Piece, PieceKind, Player, Square};
pub use engine::{Game, GameConfig, GameError};
pub use tt::TranspositionTable;
