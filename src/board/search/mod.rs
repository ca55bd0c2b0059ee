//! Search module implementing depth-limited negamax with alpha-beta pruning.
//!
//! Features:
//! - Material evaluation with decided games scored at +/- `WIN_SCORE`
//! - Move ordering: captures first, generation order otherwise
//! - Transposition table consulted at every interior node
//!
//! One [`Searcher`] plays one side. Its table survives between searches, so
//! an engine bound to a game reuses what it learned on earlier turns.

mod constants;
mod move_order;
mod negamax;

#[cfg(test)]
mod tests;

use log::{debug, trace};

use crate::tt::TranspositionTable;

use super::{Board, Move, Player};
pub use constants::{INFINITY, WIN_SCORE};
pub use move_order::{is_capture, order_moves};

/// Statistics tracked during the most recent search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cache_hits: u64,
    pub cache_stores: u64,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = SearchStats::default();
    }
}

/// Alpha-beta engine playing for one player.
pub struct Searcher {
    player: Player,
    tt: TranspositionTable,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(player: Player) -> Self {
        Searcher::with_table(player, TranspositionTable::default())
    }

    #[must_use]
    pub fn with_table(player: Player, tt: TranspositionTable) -> Self {
        Searcher {
            player,
            tt,
            stats: SearchStats::default(),
        }
    }

    /// The side this engine plays and evaluates for.
    #[must_use]
    pub fn player(&self) -> Player {
        self.player
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[must_use]
    pub fn table(&self) -> &TranspositionTable {
        &self.tt
    }

    pub fn clear_cache(&mut self) {
        self.tt.clear();
    }

    /// Static score of `board` from this engine's point of view.
    ///
    /// A decided position scores `WIN_SCORE` if the engine's player won and
    /// `-WIN_SCORE` otherwise, stalemate included. Undecided positions score
    /// the material balance.
    #[must_use]
    pub fn evaluate(&self, board: &Board) -> i32 {
        match board.check_winner() {
            Some(result) if result.winner == Some(self.player) => WIN_SCORE,
            Some(_) => -WIN_SCORE,
            None => board.material_balance(self.player),
        }
    }

    /// [`Searcher::evaluate`] from `player`'s point of view.
    #[must_use]
    pub fn evaluate_for(&self, board: &Board, player: Player) -> i32 {
        let score = self.evaluate(board);
        if player == self.player {
            score
        } else {
            -score
        }
    }

    /// Best move for `player` searched `depth` plies deep (at least one).
    ///
    /// Ties keep the first move in search order. Returns `None` when
    /// `player` has no legal move.
    pub fn best_move(&mut self, board: &Board, player: Player, depth: u32) -> Option<Move> {
        let depth = depth.max(1);
        self.stats.reset();

        let mut alpha = -INFINITY;
        let mut best: Option<(Move, i32)> = None;

        for mv in order_moves(board, board.all_legal_moves(player)) {
            let mut child = board.clone();
            child.execute(mv);
            let score = -self.negamax(&child, player.opponent(), depth - 1, -INFINITY, -alpha);
            trace!("{player} {mv}: {score}");

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        if let Some((mv, score)) = best {
            debug!(
                "{player} depth {depth}: best {mv} score {score} nodes {} cache hits {}",
                self.stats.nodes, self.stats.cache_hits
            );
        }
        best.map(|(mv, _)| mv)
    }
}
