use super::super::{Board, Move, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, pawn: Piece) -> MoveList {
        let mut moves = MoveList::new();
        let player = pawn.owner;
        let dir = player.pawn_direction();
        let promotion_row = player.promotion_row();

        let forward = from.offset(0, dir);
        if forward.is_inside() && self.is_empty(forward) {
            moves.push(pawn_move(from, forward, promotion_row));

            let double_forward = from.offset(0, 2 * dir);
            if !pawn.has_moved
                && from.y() == player.pawn_start_row()
                && double_forward.is_inside()
                && self.is_empty(double_forward)
            {
                moves.push(Move::plain(from, double_forward));
            }
        }

        for dx in [-1, 1] {
            let target = from.offset(dx, dir);
            if !target.is_inside() {
                continue;
            }
            if let Some(occupant) = self.get(target) {
                if occupant.owner != player {
                    moves.push(pawn_move(from, target, promotion_row));
                }
            }
        }

        moves
    }
}

fn pawn_move(from: Square, to: Square, promotion_row: i8) -> Move {
    if to.y() == promotion_row {
        Move::promotion(from, to)
    } else {
        Move::plain(from, to)
    }
}
