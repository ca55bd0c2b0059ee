use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::*;
use crate::board::{BoardBuilder, PieceKind, Square};

/// Plain minimax over the same leaves and terminal handling as `negamax`.
fn minimax(engine: &Searcher, board: &Board, player: Player, depth: u32) -> i32 {
    if depth == 0 {
        return engine.evaluate_for(board, player);
    }
    let moves = board.all_legal_moves(player);
    if moves.is_empty() {
        return engine.evaluate_for(board, player);
    }
    moves
        .into_iter()
        .map(|mv| {
            let mut child = board.clone();
            child.execute(mv);
            -minimax(engine, &child, player.opponent(), depth - 1)
        })
        .max()
        .expect("at least one move")
}

/// First move, in search order, that reaches the minimax value.
fn minimax_best_move(engine: &Searcher, board: &Board, player: Player, depth: u32) -> Option<Move> {
    let mut best: Option<(Move, i32)> = None;
    for mv in order_moves(board, board.all_legal_moves(player)) {
        let mut child = board.clone();
        child.execute(mv);
        let score = -minimax(engine, &child, player.opponent(), depth - 1);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
    }
    best.map(|(mv, _)| mv)
}

fn random_position(seed: u64, plies: usize) -> (Board, Player) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut player = Player::White;
    for _ in 0..plies {
        let moves = board.all_legal_moves(player);
        if moves.is_empty() {
            break;
        }
        board.execute(moves[rng.gen_range(0..moves.len())]);
        player = player.opponent();
    }
    (board, player)
}

fn free_queen_board() -> Board {
    BoardBuilder::new()
        .piece(Square(4, 7), Player::White, PieceKind::King)
        .piece(Square(0, 3), Player::White, PieceKind::Rook)
        .piece(Square(4, 0), Player::Black, PieceKind::King)
        .piece(Square(7, 3), Player::Black, PieceKind::Queen)
        .build()
}

fn stalemate_board() -> Board {
    BoardBuilder::new()
        .piece(Square(7, 0), Player::Black, PieceKind::King)
        .piece(Square(5, 1), Player::White, PieceKind::Queen)
        .piece(Square(6, 2), Player::White, PieceKind::King)
        .build()
}

#[test]
fn test_takes_free_queen() {
    let board = free_queen_board();
    for depth in [1, 2] {
        let mut engine = Searcher::new(Player::White);
        let mv = engine.best_move(&board, Player::White, depth);
        assert_eq!(mv, Some(Move::plain(Square(0, 3), Square(7, 3))), "depth {depth}");
    }
}

#[test]
fn test_depth_zero_searches_one_ply() {
    let board = free_queen_board();
    let mut engine = Searcher::new(Player::White);
    assert_eq!(
        engine.best_move(&board, Player::White, 0),
        Some(Move::plain(Square(0, 3), Square(7, 3)))
    );
}

#[test]
fn test_finds_back_rank_mate() {
    let board = BoardBuilder::new()
        .piece(Square(7, 0), Player::Black, PieceKind::King)
        .piece(Square(6, 1), Player::Black, PieceKind::Pawn)
        .piece(Square(7, 1), Player::Black, PieceKind::Pawn)
        .piece(Square(0, 7), Player::White, PieceKind::Rook)
        .piece(Square(6, 7), Player::White, PieceKind::King)
        .build();
    let mut engine = Searcher::new(Player::White);
    let mv = engine.best_move(&board, Player::White, 2);
    assert_eq!(mv, Some(Move::plain(Square(0, 7), Square(0, 0))));
}

#[test]
fn test_no_move_when_stalemated() {
    let mut engine = Searcher::new(Player::Black);
    assert_eq!(engine.best_move(&stalemate_board(), Player::Black, 2), None);
}

#[test]
fn test_evaluate_material_and_orientation() {
    let board = free_queen_board();
    let white = Searcher::new(Player::White);
    let black = Searcher::new(Player::Black);
    assert_eq!(white.evaluate(&board), -4);
    assert_eq!(black.evaluate(&board), 4);
    assert_eq!(white.evaluate_for(&board, Player::Black), 4);
    assert_eq!(Searcher::new(Player::White).evaluate(&Board::new()), 0);
}

#[test]
fn test_evaluate_decided_games() {
    // Black is mated.
    let mated = BoardBuilder::new()
        .piece(Square(7, 0), Player::Black, PieceKind::King)
        .piece(Square(6, 1), Player::Black, PieceKind::Pawn)
        .piece(Square(7, 1), Player::Black, PieceKind::Pawn)
        .piece(Square(0, 0), Player::White, PieceKind::Rook)
        .piece(Square(6, 7), Player::White, PieceKind::King)
        .build();
    assert_eq!(Searcher::new(Player::White).evaluate(&mated), WIN_SCORE);
    assert_eq!(Searcher::new(Player::Black).evaluate(&mated), -WIN_SCORE);

    // Nobody wins a stalemate, so it scores as a loss for either engine.
    assert_eq!(Searcher::new(Player::White).evaluate(&stalemate_board()), -WIN_SCORE);
    assert_eq!(Searcher::new(Player::Black).evaluate(&stalemate_board()), -WIN_SCORE);
}

#[test]
fn test_negamax_matches_minimax_on_fixed_positions() {
    let positions = [
        (Board::new(), Player::White, 2),
        (free_queen_board(), Player::White, 3),
        (free_queen_board(), Player::Black, 3),
        (stalemate_board(), Player::White, 2),
    ];
    for (board, player, depth) in positions {
        for engine_player in Player::BOTH {
            let mut engine = Searcher::new(engine_player);
            let expected = minimax(&engine, &board, player, depth);
            let score = engine.negamax(&board, player, depth, -INFINITY, INFINITY);
            assert_eq!(score, expected, "{player} to move at depth {depth}\n{board}");
            assert_eq!(
                engine.best_move(&board, player, depth),
                minimax_best_move(&engine, &board, player, depth)
            );
        }
    }
}

#[test]
fn test_cache_survives_between_searches() {
    let board = free_queen_board();
    let mut engine = Searcher::new(Player::White);

    let first = engine.best_move(&board, Player::White, 2);
    let first_stats = engine.stats();
    assert!(first_stats.nodes > 0);
    assert!(first_stats.cache_stores > 0);
    assert!(!engine.table().is_empty());

    let second = engine.best_move(&board, Player::White, 2);
    assert_eq!(first, second);
    assert!(engine.stats().cache_hits > 0);
    assert!(engine.stats().nodes < first_stats.nodes);

    engine.clear_cache();
    assert!(engine.table().is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    /// Property: alpha-beta with the cache agrees with plain minimax
    #[test]
    fn prop_alpha_beta_equals_minimax(seed in any::<u64>(), plies in 0..12usize) {
        let (board, player) = random_position(seed, plies);
        let mut engine = Searcher::new(player);
        let expected = minimax(&engine, &board, player, 2);
        prop_assert_eq!(engine.negamax(&board, player, 2, -INFINITY, INFINITY), expected);
        // Second pass runs against a warm cache.
        prop_assert_eq!(
            engine.best_move(&board, player, 2),
            minimax_best_move(&engine, &board, player, 2)
        );
    }
}
