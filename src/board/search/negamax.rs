use crate::tt::{BoundType, CacheKey};

use super::{order_moves, Board, Player, Searcher, INFINITY};

impl Searcher {
    /// Score of `board` for `player` to move, searched `depth` plies deep
    /// inside the window `[alpha, beta]`.
    ///
    /// Fail-hard: a node that fails low returns `alpha`, and one that fails
    /// high returns a score of at least `beta`. Inside the window the score
    /// equals plain minimax over the same move order.
    pub fn negamax(
        &mut self,
        board: &Board,
        player: Player,
        depth: u32,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;
        if depth == 0 {
            return self.evaluate_for(board, player);
        }

        let key = CacheKey::new(board.position_hash(), depth, player);
        if let Some(score) = self.tt.probe(key).and_then(|entry| entry.cutoff(alpha, beta)) {
            self.stats.cache_hits += 1;
            return score;
        }

        let moves = order_moves(board, board.all_legal_moves(player));
        if moves.is_empty() {
            let score = self.evaluate_for(board, player);
            self.store(key, score, BoundType::Exact);
            return score;
        }

        let alpha_orig = alpha;
        let mut best = -INFINITY;
        for mv in moves {
            let mut child = board.clone();
            child.execute(mv);
            let score = -self.negamax(&child, player.opponent(), depth - 1, -beta, -alpha);
            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }

        let bound = if best >= beta {
            BoundType::LowerBound
        } else if best <= alpha_orig {
            BoundType::UpperBound
        } else {
            BoundType::Exact
        };
        self.store(key, best, bound);

        alpha
    }

    fn store(&mut self, key: CacheKey, score: i32, bound: BoundType) {
        self.tt.store(key, score, bound);
        self.stats.cache_stores += 1;
    }
}
