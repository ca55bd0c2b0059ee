use super::{Board, Move, Piece, PieceKind, Square};

/// What a move overwrote, so that [`Board::unmake_move`] can put it back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    /// The moving piece as it stood on its origin square.
    pub(crate) moved_piece: Option<Piece>,
    /// The occupant of the destination square, if any.
    pub(crate) captured_piece: Option<Piece>,
    /// The castling rook as it stood on its origin square.
    pub(crate) rook: Option<Piece>,
}

impl UnmakeInfo {
    #[must_use]
    pub fn captured_piece(&self) -> Option<Piece> {
        self.captured_piece
    }
}

impl Board {
    /// Apply `mv` in place. Legality is the caller's concern; a move whose
    /// origin is empty leaves the board untouched.
    pub fn execute(&mut self, mv: Move) {
        match mv {
            Move::Plain { from, to } => {
                self.relocate(from, to);
            }
            Move::Promotion { from, to } => {
                if let Some(pawn) = self.relocate(from, to) {
                    self.place(to, Piece::new(PieceKind::Queen, pawn.owner));
                }
            }
            Move::Castling {
                from,
                to,
                rook_from,
                rook_to,
            } => {
                if self.relocate(from, to).is_some() {
                    self.relocate(rook_from, rook_to);
                }
            }
        }
    }

    /// Like [`Board::execute`], but records what is needed to undo the move.
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        let info = UnmakeInfo {
            moved_piece: self.get(mv.from()),
            captured_piece: self.get(mv.to()),
            rook: match mv {
                Move::Castling { rook_from, .. } => self.get(rook_from),
                _ => None,
            },
        };
        self.execute(mv);
        info
    }

    /// Undo `mv`, restoring every touched square exactly (moved flags included).
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        if let Move::Castling {
            rook_from, rook_to, ..
        } = mv
        {
            self.set(rook_to, None);
            self.set(rook_from, info.rook);
        }
        self.set(mv.to(), info.captured_piece);
        self.set(mv.from(), info.moved_piece);
    }

    /// Move the piece on `from` to `to`, overwriting any occupant, and mark it moved.
    fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.take(from)?.moved();
        self.place(to, piece);
        Some(piece)
    }
}
