use super::super::{Board, Move, MoveList, Piece, PieceKind, Square};

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, king: Piece) -> MoveList {
        let mut moves = MoveList::new();
        self.push_step_moves(from, king.owner, &KING_OFFSETS, &mut moves);

        if !king.has_moved {
            // Queen side first, then king side.
            for (rook_x, dir) in [(0, -1), (7, 1)] {
                if let Some(castle) = self.castling_move(from, king, rook_x, dir) {
                    moves.push(castle);
                }
            }
        }

        moves
    }

    /// Castling toward the rook on file `rook_x`. Transit squares are not
    /// tested for attack.
    fn castling_move(&self, from: Square, king: Piece, rook_x: i8, dir: i8) -> Option<Move> {
        let rook_from = Square(rook_x, from.y());
        let rook = self.get(rook_from)?;
        if !rook.is(PieceKind::Rook, king.owner) || rook.has_moved {
            return None;
        }

        // The king lands strictly between its start and the rook.
        let to = from.offset(2 * dir, 0);
        if (to.x() - rook_x) * dir >= 0 {
            return None;
        }

        let mut x = from.x() + dir;
        while x != rook_x {
            if !self.is_empty(Square(x, from.y())) {
                return None;
            }
            x += dir;
        }

        Some(Move::castling(from, to, rook_from, from.offset(dir, 0)))
    }
}
