//! Turn-taking orchestration around a [`Board`].

use log::{debug, info};

use super::config::{GameConfig, DEFAULT_AI_DEPTH};
use super::error::GameError;
use crate::board::search::Searcher;
use crate::board::{Board, GameResult, Player, Square};

/// An engine bound to one side of a game.
struct AiOpponent {
    searcher: Searcher,
    depth: u32,
}

/// A game in progress: the board, whose turn it is, the optional engine
/// opponent and the last terminal result.
pub struct Game {
    board: Board,
    current_player: Player,
    ai: Option<AiOpponent>,
    result: Option<GameResult>,
}

impl Game {
    /// Standard initial position, White to move, no engine.
    #[must_use]
    pub fn new() -> Self {
        Game::from_board(Board::new())
    }

    /// A game on a caller-supplied (possibly sparse) board, White to move.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Game {
            board,
            current_player: Player::White,
            ai: None,
            result: None,
        }
    }

    /// A game on `board` with the engine bound as `config` asks.
    #[must_use]
    pub fn from_config(board: Board, config: &GameConfig) -> Self {
        let game = Game::from_board(board);
        match config.ai_player {
            Some(player) => game.with_ai(player, config.ai_depth),
            None => game,
        }
    }

    /// Bind an engine to `player`, searching `depth` plies (at least one).
    ///
    /// Any previously bound engine and its cache are dropped.
    #[must_use]
    pub fn with_ai(mut self, player: Player, depth: u32) -> Self {
        self.ai = Some(AiOpponent {
            searcher: Searcher::new(player),
            depth: depth.max(1),
        });
        self
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access for manual arrangement. Call [`Game::check_winner`]
    /// afterwards to pick up a position that is already decided.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Side played by the engine, if one is bound.
    #[must_use]
    pub fn ai_player(&self) -> Option<Player> {
        self.ai.as_ref().map(|ai| ai.searcher.player())
    }

    #[must_use]
    pub fn ai_depth(&self) -> u32 {
        self.ai.as_ref().map_or(DEFAULT_AI_DEPTH, |ai| ai.depth)
    }

    /// Terminal result produced by the last move or winner check.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn clear_result(&mut self) {
        self.result = None;
    }

    /// Destinations of the legal moves of the piece on `square`.
    /// Empty for an empty or off-board square.
    #[must_use]
    pub fn legal_destinations(&self, square: Square) -> Vec<Square> {
        if !Board::is_inside(square) {
            return Vec::new();
        }
        self.board.legal_moves(square).map(|mv| mv.to()).collect()
    }

    /// Play the current player's piece from `start` to `end`.
    ///
    /// Returns the result if the move (or the engine's reply) ends the game;
    /// the turn does not pass in that case. On error nothing changes.
    pub fn move_piece(
        &mut self,
        start: Square,
        end: Square,
    ) -> Result<Option<GameResult>, GameError> {
        let piece = Board::is_inside(start)
            .then(|| self.board.get(start))
            .flatten()
            .ok_or(GameError::NoPieceAtSquare { square: start })?;
        if piece.owner != self.current_player {
            return Err(GameError::WrongTurn {
                square: start,
                owner: piece.owner,
            });
        }

        let mv = self
            .board
            .legal_moves(start)
            .find(|mv| mv.to() == end)
            .ok_or(GameError::IllegalMove {
                from: start,
                to: end,
            })?;

        debug!("{} plays {mv}", self.current_player);
        self.board.execute(mv);
        if let Some(result) = self.record_winner() {
            return Ok(Some(result));
        }
        self.current_player = self.current_player.opponent();

        Ok(self.play_ai_turn())
    }

    /// Let the engine move if it is bound to the side on move.
    ///
    /// Returns the result if the engine's move ends the game. Does nothing
    /// when no engine plays the current side. A board that is already
    /// decided is reported instead of searched.
    pub fn play_ai_turn(&mut self) -> Option<GameResult> {
        let player = self.current_player;
        if self.ai_player() != Some(player) {
            return None;
        }
        if let Some(result) = self.record_winner() {
            return Some(result);
        }

        let ai = self.ai.as_mut()?;
        let mv = ai.searcher.best_move(&self.board, player, ai.depth)?;

        debug!("{player} plays {mv}");
        self.board.execute(mv);
        if let Some(result) = self.record_winner() {
            return Some(result);
        }
        self.current_player = player.opponent();
        None
    }

    /// Re-evaluate the board, replacing any stored result.
    ///
    /// After manual arrangement this both picks up a decided position and
    /// clears a result the board no longer produces.
    pub fn check_winner(&mut self) -> Option<GameResult> {
        self.record_winner()
    }

    fn record_winner(&mut self) -> Option<GameResult> {
        self.result = self.board.check_winner();
        if let Some(result) = self.result {
            info!("Game over: {result}");
        }
        self.result
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
