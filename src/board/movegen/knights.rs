use super::super::{Board, MoveList, Piece, Square};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, knight: Piece) -> MoveList {
        let mut moves = MoveList::new();
        self.push_step_moves(from, knight.owner, &KNIGHT_OFFSETS, &mut moves);
        moves
    }
}
