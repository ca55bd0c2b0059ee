//! Perft (move tree counts) for move generation correctness.

use super::diagram;
use crate::board::{Board, Player};

#[test]
fn test_initial_position_perft() {
    let mut board = Board::new();
    for (depth, expected) in [(1, 20), (2, 400), (3, 8902)] {
        let nodes = board.perft(Player::White, depth);
        assert_eq!(
            nodes, expected,
            "Perft failed at depth {depth}. Expected: {expected}, Got: {nodes}"
        );
    }
    assert_eq!(board, Board::new(), "perft must leave the board untouched");
}

#[test]
fn test_castling_position_perft_depth_one() {
    let mut board = diagram([
        "r...k..r", "........", "........", "........", "........", "........", "........",
        "R...K..R",
    ]);
    // 7 king moves (two of them castling), 10 + 9 rook moves
    assert_eq!(board.perft(Player::White, 1), 26);
    assert_eq!(board.perft(Player::Black, 1), 26);
}
