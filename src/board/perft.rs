use super::{Board, Player};

impl Board {
    /// Count leaf nodes of the legal move tree `depth` plies deep, `player` to move.
    pub fn perft(&mut self, player: Player, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.all_legal_moves(player);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            let info = self.make_move(m);
            nodes += self.perft(player.opponent(), depth - 1);
            self.unmake_move(m, info);
        }

        nodes
    }
}
