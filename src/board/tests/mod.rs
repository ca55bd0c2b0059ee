//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Pseudo-legal generation per piece kind
//! - `legality.rs` - Check filtering, checkmate, stalemate, winner detection
//! - `make_unmake.rs` - Move execution and undo
//! - `edge_cases.rs` - Sparse and unusual arrangements
//! - `perft.rs` - Move tree counts
//! - `proptest.rs` - Property-based tests

mod movegen;
mod perft;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::board::{Board, BoardBuilder, Move, Player, Square};

pub(super) fn sq(notation: &str) -> Square {
    notation.parse().expect("valid square")
}

pub(super) fn diagram(rows: [&str; 8]) -> Board {
    BoardBuilder::from_diagram(&rows)
        .expect("valid diagram")
        .build()
}

pub(super) fn find_move(board: &Board, from: Square, to: Square) -> Move {
    board
        .legal_moves(from)
        .find(|m| m.to() == to)
        .expect("Expected move not found")
}

/// Play `plies` random legal moves from the initial position.
/// Returns the board and the side to move.
pub(super) fn random_playout(seed: u64, plies: usize) -> (Board, Player) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut player = Player::White;
    for _ in 0..plies {
        let moves = board.all_legal_moves(player);
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        board.execute(mv);
        player = player.opponent();
    }
    (board, player)
}
