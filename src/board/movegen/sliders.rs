use super::super::{Board, Move, MoveList, Piece, PieceKind, Square};

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const STRAIGHTS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
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
    /// Moves of a bishop, rook or queen: each ray runs until the edge, a
    /// friendly piece (excluded) or an enemy piece (included, then stop).
    pub(crate) fn generate_slider_moves(&self, from: Square, slider: Piece) -> MoveList {
        let mut moves = MoveList::new();
        let directions: &[(i8, i8)] = match slider.kind {
            PieceKind::Bishop => &DIAGONALS,
            PieceKind::Rook => &STRAIGHTS,
            _ => &ALL_DIRECTIONS,
        };
        self.push_ray_moves(from, slider, directions, &mut moves);
        moves
    }

    fn push_ray_moves(
        &self,
        from: Square,
        slider: Piece,
        directions: &[(i8, i8)],
        moves: &mut MoveList,
    ) {
        for &(dx, dy) in directions {
            let mut to = from.offset(dx, dy);
            while to.is_inside() {
                match self.get(to) {
                    None => moves.push(Move::plain(from, to)),
                    Some(occupant) => {
                        if occupant.owner != slider.owner {
                            moves.push(Move::plain(from, to));
                        }
                        break;
                    }
                }
                to = to.offset(dx, dy);
            }
        }
    }
}
