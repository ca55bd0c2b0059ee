//! Pseudo-legal move generation.
//!
//! Moves generated here respect each piece's movement pattern and board
//! occupancy but ignore whether the mover's own king is left in check. Check
//! detection is built on this generator alone, which is what keeps the
//! legality filter in `legality.rs` from recursing into itself.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Move, MoveList, PieceKind, Player, Square};

impl Board {
    /// Pseudo-legal moves of the piece on `from`, in generation order.
    /// Empty if the square is empty.
    #[must_use]
    pub fn pseudo_legal_moves(&self, from: Square) -> MoveList {
        let Some(piece) = self.get(from) else {
            return MoveList::new();
        };
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece),
            PieceKind::Knight => self.generate_knight_moves(from, piece),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                self.generate_slider_moves(from, piece)
            }
            PieceKind::King => self.generate_king_moves(from, piece),
        }
    }

    /// True if the piece on `from` could capture an enemy king with one of
    /// its pseudo-legal moves.
    #[must_use]
    pub fn attacks_king(&self, from: Square) -> bool {
        let Some(attacker) = self.get(from) else {
            return false;
        };
        self.pseudo_legal_moves(from).iter().any(|mv| {
            self.get(mv.to())
                .is_some_and(|target| target.kind == PieceKind::King && target.owner != attacker.owner)
        })
    }

    /// Single-step moves for knights and kings: in bounds and not onto a friendly piece.
    fn push_step_moves(
        &self,
        from: Square,
        owner: Player,
        offsets: &[(i8, i8)],
        moves: &mut MoveList,
    ) {
        for &(dx, dy) in offsets {
            let to = from.offset(dx, dy);
            if to.is_inside() && self.get(to).map_or(true, |p| p.owner != owner) {
                moves.push(Move::plain(from, to));
            }
        }
    }
}
