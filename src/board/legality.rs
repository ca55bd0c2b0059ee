//! Legality filter and terminal-state detection.
//!
//! A pseudo-legal move is legal when, played out on a copy of the board, it
//! does not leave the mover's king attacked. This costs one board copy per
//! candidate move and is the dominant cost of the whole engine.

use super::{Board, GameResult, Move, Player, Square};

impl Board {
    /// Legal moves of the piece on `from`, lazily filtered in generation order.
    pub fn legal_moves(&self, from: Square) -> impl Iterator<Item = Move> + '_ {
        let owner = self.get(from).map(|piece| piece.owner);
        self.pseudo_legal_moves(from)
            .into_iter()
            .filter(move |&mv| owner.is_some_and(|owner| self.is_legal_for(mv, owner)))
    }

    /// True if the piece on `from` has at least one legal move.
    #[must_use]
    pub fn has_legal_move(&self, from: Square) -> bool {
        self.legal_moves(from).next().is_some()
    }

    /// Every legal move of `player`, pieces visited in row-major order.
    #[must_use]
    pub fn all_legal_moves(&self, player: Player) -> Vec<Move> {
        self.pieces_of(player)
            .flat_map(|(sq, _)| self.legal_moves(sq))
            .collect()
    }

    /// True if any of `player`'s pieces can move legally.
    #[must_use]
    pub fn player_has_legal_move(&self, player: Player) -> bool {
        self.pieces_of(player).any(|(sq, _)| self.has_legal_move(sq))
    }

    /// True if some opposing piece attacks `player`'s king.
    #[must_use]
    pub fn is_in_check(&self, player: Player) -> bool {
        self.pieces_of(player.opponent())
            .any(|(sq, _)| self.attacks_king(sq))
    }

    #[must_use]
    pub fn is_in_checkmate(&self, player: Player) -> bool {
        self.is_in_check(player) && !self.player_has_legal_move(player)
    }

    #[must_use]
    pub fn is_in_stalemate(&self, player: Player) -> bool {
        !self.is_in_check(player) && !self.player_has_legal_move(player)
    }

    /// Terminal state of the position, if any.
    ///
    /// Both players are examined in enumeration order (White first),
    /// regardless of whose turn it is.
    #[must_use]
    pub fn check_winner(&self) -> Option<GameResult> {
        Player::BOTH.into_iter().find_map(|player| {
            if self.player_has_legal_move(player) {
                None
            } else if self.is_in_check(player) {
                Some(GameResult::checkmate(player.opponent()))
            } else {
                Some(GameResult::stalemate())
            }
        })
    }

    fn is_legal_for(&self, mv: Move, owner: Player) -> bool {
        let mut next = self.clone();
        next.execute(mv);
        !next.is_in_check(owner)
    }
}
