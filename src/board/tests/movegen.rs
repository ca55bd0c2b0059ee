//! Pseudo-legal move generation tests.

use super::{diagram, sq};
use crate::board::{Board, BoardBuilder, Move, PieceKind, Player, Square};

fn destinations(board: &Board, from: Square) -> Vec<Square> {
    board.pseudo_legal_moves(from).iter().map(|m| m.to()).collect()
}

#[test]
fn test_initial_position_has_twenty_moves_per_side() {
    let board = Board::new();
    for player in Player::BOTH {
        let count: usize = board
            .pieces_of(player)
            .map(|(from, _)| board.pseudo_legal_moves(from).len())
            .sum();
        assert_eq!(count, 20, "{player} should start with 20 moves");
    }
}

#[test]
fn test_empty_square_generates_nothing() {
    let board = Board::new();
    assert!(board.pseudo_legal_moves(sq("e4")).is_empty());
}

#[test]
fn test_pawn_single_and_double_step_order() {
    let board = Board::new();
    assert_eq!(destinations(&board, sq("e2")), vec![sq("e3"), sq("e4")]);
    assert_eq!(destinations(&board, sq("d7")), vec![sq("d6"), sq("d5")]);
}

#[test]
fn test_pawn_double_step_requires_unmoved_and_start_row() {
    let board = BoardBuilder::new()
        .moved_piece(sq("a2"), Player::White, PieceKind::Pawn)
        .piece(sq("b3"), Player::White, PieceKind::Pawn)
        .build();
    assert_eq!(destinations(&board, sq("a2")), vec![sq("a3")]);
    assert_eq!(destinations(&board, sq("b3")), vec![sq("b4")]);
}

#[test]
fn test_pawn_blocked() {
    // A piece directly ahead blocks both steps; one two ahead blocks only the double.
    // Both blockers are friendly so neither pawn has a capture.
    let board = BoardBuilder::new()
        .piece(sq("a2"), Player::White, PieceKind::Pawn)
        .piece(sq("a3"), Player::White, PieceKind::Knight)
        .piece(sq("b2"), Player::White, PieceKind::Pawn)
        .piece(sq("b4"), Player::White, PieceKind::Knight)
        .build();
    assert!(destinations(&board, sq("a2")).is_empty());
    assert_eq!(destinations(&board, sq("b2")), vec![sq("b3")]);
}

#[test]
fn test_pawn_captures_only_enemies_diagonally() {
    let board = BoardBuilder::new()
        .moved_piece(sq("d4"), Player::White, PieceKind::Pawn)
        .piece(sq("c5"), Player::Black, PieceKind::Rook)
        .piece(sq("e5"), Player::White, PieceKind::Rook)
        .piece(sq("d5"), Player::Black, PieceKind::Bishop)
        .build();
    // Forward is blocked (no capture straight ahead), friendly piece on e5.
    assert_eq!(destinations(&board, sq("d4")), vec![sq("c5")]);
}

#[test]
fn test_pawn_promotion_moves() {
    let board = BoardBuilder::new()
        .moved_piece(sq("b7"), Player::White, PieceKind::Pawn)
        .piece(sq("a8"), Player::Black, PieceKind::Rook)
        .moved_piece(sq("g2"), Player::Black, PieceKind::Pawn)
        .build();
    let white: Vec<Move> = board.pseudo_legal_moves(sq("b7")).iter().copied().collect();
    assert_eq!(
        white,
        vec![
            Move::promotion(sq("b7"), sq("b8")),
            Move::promotion(sq("b7"), sq("a8")),
        ]
    );
    let black: Vec<Move> = board.pseudo_legal_moves(sq("g2")).iter().copied().collect();
    assert_eq!(black, vec![Move::promotion(sq("g2"), sq("g1"))]);
}

#[test]
fn test_knight_moves() {
    let board = Board::new();
    assert_eq!(destinations(&board, sq("b1")), vec![sq("c3"), sq("a3")]);

    let lone = BoardBuilder::new()
        .piece(sq("d4"), Player::White, PieceKind::Knight)
        .build();
    assert_eq!(lone.pseudo_legal_moves(sq("d4")).len(), 8);

    let corner = BoardBuilder::new()
        .piece(sq("a8"), Player::Black, PieceKind::Knight)
        .build();
    assert_eq!(corner.pseudo_legal_moves(sq("a8")).len(), 2);
}

#[test]
fn test_slider_counts_on_empty_board() {
    for (kind, expected) in [
        (PieceKind::Queen, 27),
        (PieceKind::Rook, 14),
        (PieceKind::Bishop, 13),
    ] {
        let board = BoardBuilder::new().piece(sq("d4"), Player::White, kind).build();
        assert_eq!(board.pseudo_legal_moves(sq("d4")).len(), expected, "{kind}");
    }
}

#[test]
fn test_slider_captures_enemy_but_not_friend() {
    let board = BoardBuilder::new()
        .piece(sq("a1"), Player::White, PieceKind::Bishop)
        .piece(sq("d4"), Player::Black, PieceKind::Knight)
        .piece(sq("h1"), Player::White, PieceKind::Bishop)
        .piece(sq("e4"), Player::White, PieceKind::Knight)
        .build();
    assert_eq!(destinations(&board, sq("a1")), vec![sq("b2"), sq("c3"), sq("d4")]);
    assert_eq!(destinations(&board, sq("h1")), vec![sq("g2"), sq("f3")]);
}

#[test]
fn test_slider_stops_at_blockers() {
    let board = diagram([
        "........", "........", "........", "...p....", "........", "...R..P.", "........",
        "........",
    ]);
    // Rook on d3: up to d5 (capture), down to d1, left to a3, right to f3.
    let mut dests = destinations(&board, sq("d3"));
    dests.sort_by_key(|s| (s.y(), s.x()));
    let mut expected = vec![
        sq("d4"),
        sq("d5"),
        sq("d2"),
        sq("d1"),
        sq("a3"),
        sq("b3"),
        sq("c3"),
        sq("e3"),
        sq("f3"),
    ];
    expected.sort_by_key(|s| (s.y(), s.x()));
    assert_eq!(dests, expected);
}

#[test]
fn test_queen_generates_diagonals_first() {
    let board = BoardBuilder::new()
        .piece(sq("d4"), Player::White, PieceKind::Queen)
        .build();
    let moves = board.pseudo_legal_moves(sq("d4"));
    let first_straight = moves
        .iter()
        .position(|m| m.to().x() == 3 || m.to().y() == sq("d4").y())
        .expect("queen has straight moves");
    assert_eq!(first_straight, 13, "all 13 diagonal moves come first");
}

#[test]
fn test_king_steps_without_castling_when_moved() {
    let board = BoardBuilder::new()
        .moved_piece(sq("e1"), Player::White, PieceKind::King)
        .piece(sq("a1"), Player::White, PieceKind::Rook)
        .piece(sq("h1"), Player::White, PieceKind::Rook)
        .build();
    let moves = board.pseudo_legal_moves(sq("e1"));
    assert_eq!(moves.len(), 5);
    assert!(moves.iter().all(|m| !m.is_castling()));
}

#[test]
fn test_castling_both_sides() {
    let board = diagram([
        "........", "........", "........", "........", "........", "........", "........",
        "R...K..R",
    ]);
    let castles: Vec<Move> = board
        .pseudo_legal_moves(sq("e1"))
        .iter()
        .copied()
        .filter(|m| m.is_castling())
        .collect();
    assert_eq!(
        castles,
        vec![
            Move::castling(sq("e1"), sq("c1"), sq("a1"), sq("d1")),
            Move::castling(sq("e1"), sq("g1"), sq("h1"), sq("f1")),
        ]
    );
}

#[test]
fn test_castling_requires_clear_path_and_unmoved_rook() {
    let blocked = diagram([
        "........", "........", "........", "........", "........", "........", "........",
        "RN..K..R",
    ]);
    let castles: Vec<Move> = blocked
        .pseudo_legal_moves(sq("e1"))
        .iter()
        .copied()
        .filter(|m| m.is_castling())
        .collect();
    assert_eq!(castles, vec![Move::castling(sq("e1"), sq("g1"), sq("h1"), sq("f1"))]);

    let moved_rook = BoardBuilder::new()
        .piece(sq("e8"), Player::Black, PieceKind::King)
        .moved_piece(sq("h8"), Player::Black, PieceKind::Rook)
        .build();
    assert!(moved_rook
        .pseudo_legal_moves(sq("e8"))
        .iter()
        .all(|m| !m.is_castling()));

    let enemy_rook = BoardBuilder::new()
        .piece(sq("e8"), Player::Black, PieceKind::King)
        .piece(sq("h8"), Player::White, PieceKind::Rook)
        .build();
    assert!(enemy_rook
        .pseudo_legal_moves(sq("e8"))
        .iter()
        .all(|m| !m.is_castling()));
}

#[test]
fn test_castling_ignores_attacked_transit_squares() {
    // A black rook on f8 covers f1, the square the king passes over.
    let board = diagram([
        ".....r.k", "........", "........", "........", "........", "........", "........",
        "....K..R",
    ]);
    assert!(board
        .pseudo_legal_moves(sq("e1"))
        .iter()
        .any(|m| m.is_castling()));
}

#[test]
fn test_attacks_king() {
    let board = diagram([
        "....k...", "........", "........", "........", "....R...", "........", "....p...",
        "...K....",
    ]);
    assert!(board.attacks_king(sq("e4")));
    // The pawn on e2 attacks d1 diagonally.
    assert!(board.attacks_king(sq("e2")));
    // Kings never attack themselves or an empty square.
    assert!(!board.attacks_king(sq("d1")));
    assert!(!board.attacks_king(sq("a1")));
}

#[test]
fn test_pawn_straight_ahead_does_not_attack() {
    let board = diagram([
        "........", "........", "........", "....k...", "....P...", "........", "........",
        "....K...",
    ]);
    assert!(!board.attacks_king(sq("e4")));
    assert!(!board.is_in_check(Player::Black));
}
