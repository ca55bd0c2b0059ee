//! Game orchestration: turns, move validation and the engine opponent.
//!
//! [`Game`] owns the board and enforces turn order. When an engine is bound
//! to one side, it answers every move of the other side within the same
//! call to [`Game::move_piece`].

mod config;
mod error;
mod game;

pub use config::{GameConfig, DEFAULT_AI_DEPTH};
pub use error::GameError;
pub use game::Game;
