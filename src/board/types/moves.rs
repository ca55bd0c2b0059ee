//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Upper bound on pseudo-legal moves of a single piece (a queen has at most 27).
pub(crate) const MAX_PIECE_MOVES: usize = 32;

/// Filler for unused `MoveList` slots.
pub(crate) const EMPTY_MOVE: Move = Move::Plain {
    from: Square(0, 0),
    to: Square(0, 0),
};

/// A move, constructed during generation and consumed by execution.
///
/// Moves carry only squares; the moving piece is read from the board when
/// the move is executed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    /// Relocates one piece; an occupant of `to` is captured by being overwritten.
    Plain { from: Square, to: Square },
    /// A pawn move onto its promotion row; the pawn becomes a queen.
    Promotion { from: Square, to: Square },
    /// King moves two squares toward a rook, which jumps to the square the king passed over.
    Castling {
        from: Square,
        to: Square,
        rook_from: Square,
        rook_to: Square,
    },
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn plain(from: Square, to: Square) -> Self {
        Move::Plain { from, to }
    }

    #[inline]
    #[must_use]
    pub const fn promotion(from: Square, to: Square) -> Self {
        Move::Promotion { from, to }
    }

    #[inline]
    #[must_use]
    pub const fn castling(from: Square, to: Square, rook_from: Square, rook_to: Square) -> Self {
        Move::Castling {
            from,
            to,
            rook_from,
            rook_to,
        }
    }

    /// Square the moving piece starts on
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        match self {
            Move::Plain { from, .. } | Move::Promotion { from, .. } | Move::Castling { from, .. } => {
                from
            }
        }
    }

    /// Destination of the moving piece (the king, for castling)
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        match self {
            Move::Plain { to, .. } | Move::Promotion { to, .. } | Move::Castling { to, .. } => to,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        matches!(self, Move::Promotion { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(self, Move::Castling { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if self.is_promotion() {
            write!(f, "q")?;
        }
        Ok(())
    }
}

/// Fixed-size list of the moves of one piece, to avoid heap allocation.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_PIECE_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_PIECE_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            Some(self.moves[idx])
        } else {
            None
        }
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        let mv = self.list.get(self.idx)?;
        self.idx += 1;
        Some(mv)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}
