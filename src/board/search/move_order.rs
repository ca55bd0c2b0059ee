//! Move ordering utilities for search.

use crate::board::{Board, Move};

/// True if `mv` lands on an occupied square.
///
/// Legal moves never land on a friendly piece, so for them this means an
/// enemy capture.
#[inline]
#[must_use]
pub fn is_capture(board: &Board, mv: Move) -> bool {
    board.get(mv.to()).is_some()
}

/// Captures first, then everything else; generation order is kept within
/// each group.
#[must_use]
pub fn order_moves(board: &Board, moves: Vec<Move>) -> Vec<Move> {
    let (mut ordered, quiet): (Vec<Move>, Vec<Move>) =
        moves.into_iter().partition(|&mv| is_capture(board, mv));
    ordered.extend(quiet);
    ordered
}
