//! Static material count.

use super::{Board, Player};

impl Board {
    /// Material of `player` minus material of the opponent.
    #[must_use]
    pub fn material_balance(&self, player: Player) -> i32 {
        self.pieces()
            .map(|(_, piece)| {
                let value = piece.kind.value();
                if piece.owner == player {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}
