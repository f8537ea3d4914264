//! Engine integration tests: scenarios from normal play.

use tile_2048::{compress, merge, BoardConfig, Direction, Game2048, GameRng, GameStatus};

// =============================================================================
// Row Scenarios
// =============================================================================

#[test]
fn test_pair_merges_into_one_tile() {
    let mut row = compress(&[2, 2, 0, 0]);
    let gained = merge(&mut row);
    assert_eq!(compress(&row).as_slice(), &[4, 0, 0, 0]);
    assert_eq!(gained, 4);
}

#[test]
fn test_four_equal_tiles_merge_pairwise() {
    let mut row = compress(&[2, 2, 2, 2]);
    let gained = merge(&mut row);
    assert_eq!(row.as_slice(), &[4, 0, 4, 0]);
    assert_eq!(compress(&row).as_slice(), &[4, 4, 0, 0]);
    assert_eq!(gained, 8);
}

// =============================================================================
// Board Scenarios
// =============================================================================

#[test]
fn test_move_left_without_merge() {
    let mut game = Game2048::from_layout(
        &[[0, 0, 0, 2], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 2]],
        42,
    )
    .unwrap();

    assert!(game.move_left());
    assert_eq!(game.board().row(0), &[2, 0, 0, 0]);
    assert_eq!(game.board().row(3), &[2, 0, 0, 0]);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_move_left_is_idempotent_without_spawn() {
    let mut game = Game2048::from_layout(
        &[[2, 2, 8, 0], [0, 8, 0, 8], [2, 0, 2, 8], [16, 0, 0, 16]],
        42,
    )
    .unwrap();

    assert!(game.move_left());
    let board = game.board().clone();
    let score = game.score();

    assert!(!game.move_left());
    assert_eq!(game.board(), &board);
    assert_eq!(game.score(), score);
}

#[test]
fn test_score_accumulates_over_moves() {
    let mut game = Game2048::from_layout(
        &[[2, 2, 4, 4], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        42,
    )
    .unwrap();

    assert!(game.move_left());
    assert_eq!(game.board().row(0), &[4, 8, 0, 0]);
    assert_eq!(game.score(), 12);
}

#[test]
fn test_successful_move_spawns_exactly_one_tile() {
    let mut game = Game2048::from_layout(
        &[[0, 0, 0, 2], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 4]],
        7,
    )
    .unwrap();

    assert!(game.make_move(Direction::Left));
    assert_eq!(game.tile_count(), 3);
    assert_eq!(game.move_count(), 1);
}

#[test]
fn test_unchanged_move_spawns_nothing() {
    let mut game = Game2048::from_layout(
        &[[2, 0, 0, 0], [4, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        7,
    )
    .unwrap();

    assert!(!game.make_move(Direction::Left));
    assert_eq!(game.tile_count(), 2);
    assert_eq!(game.move_count(), 0);
}

#[test]
fn test_unknown_direction_is_noop() {
    let layout = [[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 2]];
    let mut game = Game2048::from_layout(&layout, 7).unwrap();

    assert!(!game.move_named("north"));
    assert!(!game.move_named(""));
    assert_eq!(game.board().to_rows(), layout.map(|r| r.to_vec()).to_vec());
}

#[test]
fn test_full_board_without_pairs_is_terminal() {
    let game = Game2048::from_layout(
        &[[2, 4, 8, 16], [16, 8, 4, 2], [2, 4, 8, 16], [16, 8, 4, 2]],
        1,
    )
    .unwrap();

    assert!(!game.can_move());
    assert_eq!(game.status(), GameStatus::Terminal);
}

#[test]
fn test_full_board_with_pair_can_move() {
    let mut game = Game2048::from_layout(
        &[[2, 4, 8, 16], [16, 8, 4, 2], [2, 4, 8, 16], [16, 8, 4, 4]],
        1,
    )
    .unwrap();

    assert!(game.can_move());
    assert!(game.make_move(Direction::Left));
    assert_eq!(game.board().get(3, 2), 8);
    assert_eq!(game.score(), 8);
}

#[test]
fn test_down_and_right_push_toward_far_edges() {
    let mut game = Game2048::from_layout(
        &[[2, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        1,
    )
    .unwrap();

    assert!(game.move_down());
    assert_eq!(game.board().get(3, 0), 4);
    assert!(game.move_right());
    assert_eq!(game.board().get(3, 3), 4);
    assert_eq!(game.tile_count(), 1);
}

// =============================================================================
// Determinism Tests
// =============================================================================

fn play_out(seed: u64) -> (Vec<i64>, u64) {
    let mut game = Game2048::new(BoardConfig::default(), seed).unwrap();
    let mut turn = 0usize;
    while game.can_move() && turn < 500 {
        let legal = game.legal_moves();
        game.make_move(legal[turn % legal.len()]);
        turn += 1;
    }
    (game.board().cells().to_vec(), game.score())
}

#[test]
fn test_same_seed_same_game() {
    assert_eq!(play_out(12345), play_out(12345));
}

#[test]
fn test_different_seeds_differ() {
    assert_ne!(play_out(111), play_out(222));
}

#[test]
fn test_rng_state_resumes_a_game() {
    let mut rng = GameRng::new(99);
    let _ = rng.gen_bool(0.5);
    let state = rng.state();

    let mut a = Game2048::with_rng(BoardConfig::default(), GameRng::from_state(&state)).unwrap();
    let mut b = Game2048::with_rng(BoardConfig::default(), GameRng::from_state(&state)).unwrap();
    for d in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
        assert_eq!(a.step(d), b.step(d));
    }
    assert_eq!(a.board(), b.board());
}

#[test]
fn test_larger_boards() {
    let mut game = Game2048::new(BoardConfig::default().with_size(6), 5).unwrap();
    assert_eq!(game.board().cells().len(), 36);
    assert_eq!(game.tile_count(), 2);
    while game.can_move() {
        let legal = game.legal_moves();
        if legal.is_empty() {
            break;
        }
        assert!(game.make_move(legal[0]));
    }
    assert!(game.move_count() > 0);
    assert!(!game.can_move());
}
