use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Piece, PieceKind, Player, Square};
use crate::zobrist::ZOBRIST;

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces.
///
/// `Clone` yields a fully independent board: pieces are plain values, so a
/// cloned board never observes mutations made to the original.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    // squares[y][x]
    pub(crate) squares: [[Option<Piece>; 8]; 8],
}

/// Selection criteria for [`Board::iter_pieces`]. Every criterion left unset matches all pieces.
#[derive(Clone, Copy, Default)]
pub struct PieceFilter<'a> {
    kinds: Option<&'a [PieceKind]>,
    owner: Option<Player>,
    predicate: Option<&'a dyn Fn(Square, Piece) -> bool>,
}

impl<'a> PieceFilter<'a> {
    #[must_use]
    pub fn new() -> Self {
        PieceFilter::default()
    }

    #[must_use]
    pub fn kinds(mut self, kinds: &'a [PieceKind]) -> Self {
        self.kinds = Some(kinds);
        self
    }

    #[must_use]
    pub fn owner(mut self, owner: Player) -> Self {
        self.owner = Some(owner);
        self
    }

    #[must_use]
    pub fn predicate(mut self, predicate: &'a dyn Fn(Square, Piece) -> bool) -> Self {
        self.predicate = Some(predicate);
        self
    }

    fn matches(&self, sq: Square, piece: Piece) -> bool {
        self.kinds.map_or(true, |kinds| kinds.contains(&piece.kind))
            && self.owner.map_or(true, |owner| piece.owner == owner)
            && self.predicate.map_or(true, |pred| pred(sq, piece))
    }
}

impl Board {
    /// The standard initial arrangement, black on rows 0-1 and white on rows 6-7.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (x, &kind) in BACK_ROW.iter().enumerate() {
            let x = x as i8;
            for player in Player::BOTH {
                let pawn_row = player.pawn_start_row();
                board.place(Square(x, player.back_row()), Piece::new(kind, player));
                board.place(Square(x, pawn_row), Piece::new(PieceKind::Pawn, player));
            }
        }
        board
    }

    /// A board with no pieces, for manual arrangement.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Bounds predicate; check before indexing with a computed square.
    #[inline]
    #[must_use]
    pub fn is_inside(sq: Square) -> bool {
        sq.is_inside()
    }

    /// Piece on `sq`. Caller guarantees `sq` is inside the board.
    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.1 as usize][sq.0 as usize]
    }

    /// Overwrite `sq`. Caller guarantees `sq` is inside the board.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.1 as usize][sq.0 as usize] = piece;
    }

    /// Remove and return the piece on `sq`.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.1 as usize][sq.0 as usize].take()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.set(sq, Some(piece));
    }

    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.take(sq)
    }

    /// Remove every piece.
    pub fn clear(&mut self) {
        self.squares = [[None; 8]; 8];
    }

    /// All pieces matching `filter`, in row-major order (y outer, x inner).
    ///
    /// The iterator borrows the board and can be re-created at will; the
    /// fixed order keeps search tie-breaking reproducible.
    pub fn iter_pieces<'a>(
        &'a self,
        filter: PieceFilter<'a>,
    ) -> impl Iterator<Item = (Square, Piece)> + 'a {
        Square::all()
            .filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
            .filter(move |&(sq, piece)| filter.matches(sq, piece))
    }

    /// Every piece on the board.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.iter_pieces(PieceFilter::new())
    }

    /// Every piece owned by `player`.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.iter_pieces(PieceFilter::new().owner(player))
    }

    /// Square of `player`'s king, if one is on the board.
    #[must_use]
    pub fn find_king(&self, player: Player) -> Option<Square> {
        self.iter_pieces(PieceFilter::new().kinds(&[PieceKind::King]).owner(player))
            .map(|(sq, _)| sq)
            .next()
    }

    /// Zobrist hash over piece kind, owner and moved flag of every occupied square.
    #[must_use]
    pub fn position_hash(&self) -> u64 {
        self.pieces()
            .fold(0, |hash, (sq, piece)| hash ^ ZOBRIST.piece_key(piece, sq))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..8 {
            write!(f, "{} ", 8 - y)?;
            for x in 0..8 {
                let c = self.get(Square(x, y)).map_or('.', Piece::to_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
