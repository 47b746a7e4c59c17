use super::*;
use crate::eval::ZeroHeuristic;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ttt_core::OutcomeOdds;

fn board(state: [i32; 10]) -> Board {
    Board::from_state(&state).unwrap()
}

fn search(board: &Board, probs: &ProbabilityTable, depth: u8) -> Option<(usize, f64)> {
    let mut nodes = 0;
    pick_best_move(board, probs, &ZeroHeuristic, depth, &mut nodes)
}

#[test]
fn test_completes_top_row() {
    let b = board([1, 1, 0, 2, 2, 0, 0, 0, 0, 1]);
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..10 {
        let probs = ProbabilityTable::random(&mut rng)
            .with_cell(2, OutcomeOdds::CERTAIN)
            .unwrap();
        for depth in 1..=3 {
            let (mv, score) = search(&b, &probs, depth).unwrap();
            assert_eq!(mv, 2, "depth {depth}");
            assert_eq!(score, WIN_SCORE);
        }
    }
}

#[test]
fn test_blocks_certain_loss() {
    let b = board([2, 2, 0, 0, 1, 0, 0, 0, 1, 1]);
    let (mv, score) = search(&b, &ProbabilityTable::certain(), 2).unwrap();
    assert_eq!(mv, 2);
    assert_eq!(score, 0.0);
}

#[test]
fn test_expected_value_weights_all_three_outcomes() {
    // Cell 2 is the only empty cell: success wins the top row for X,
    // failure hands O the anti-diagonal.
    let b = board([1, 1, 0, 2, 2, 1, 2, 1, 2, 1]);
    let probs = ProbabilityTable::certain()
        .with_cell(2, OutcomeOdds::new(60, 30, 10).unwrap())
        .unwrap();

    // Neutral stops at the depth limit and scores zero
    assert_eq!(search(&b, &probs, 1), Some((2, 500.0)));

    // One ply deeper the neutral branch is O's turn on the same cell:
    // (60 * -1000 + 30 * 0 + 10 * 1000) / 100 = -500
    assert_eq!(search(&b, &probs, 2), Some((2, 350.0)));
}

#[test]
fn test_first_of_equal_moves_wins() {
    let b = Board::new(Player::X);
    assert_eq!(search(&b, &ProbabilityTable::certain(), 1), Some((0, 0.0)));
}

#[test]
fn test_depth_zero_still_picks_a_move() {
    let b = Board::new(Player::O);
    assert_eq!(search(&b, &ProbabilityTable::certain(), 0), Some((0, 0.0)));
}

#[test]
fn test_decided_boards_return_none_without_searching() {
    let won = board([1, 1, 1, 2, 2, 0, 0, 0, 0, 2]);
    let full = board([1, 2, 1, 1, 2, 2, 2, 1, 1, 2]);
    for b in [won, full] {
        let mut nodes = 0;
        let result = pick_best_move(&b, &ProbabilityTable::certain(), &ZeroHeuristic, 4, &mut nodes);
        assert_eq!(result, None);
        assert_eq!(nodes, 0);
    }
}

#[test]
fn test_search_does_not_mutate_inputs() {
    let mut rng = StdRng::seed_from_u64(11);
    let probs = ProbabilityTable::random(&mut rng);
    let b = board([1, 0, 0, 0, 2, 0, 0, 0, 0, 1]);
    let (board_before, probs_before) = (b, probs);

    let mut nodes = 0;
    let result = pick_best_move(&b, &probs, &ZeroHeuristic, 4, &mut nodes);

    assert!(result.is_some());
    assert!(nodes > 0);
    assert_eq!(b, board_before);
    assert_eq!(probs, probs_before);
}

#[test]
fn test_maximizes_for_player_to_move() {
    // Same position seen from O: O wins with cell 5
    let b = board([1, 1, 0, 2, 2, 0, 0, 0, 1, 2]);
    let (mv, score) = search(&b, &ProbabilityTable::certain(), 1).unwrap();
    assert_eq!(mv, 5);
    assert_eq!(score, WIN_SCORE);
}

#[test]
fn test_avoids_cell_that_usually_backfires() {
    // X wins with either 2 or 6, but cell 2 mostly places an O that
    // completes O's column.
    let b = board([1, 1, 0, 1, 0, 2, 0, 0, 2, 1]);
    let probs = ProbabilityTable::certain()
        .with_cell(2, OutcomeOdds::new(20, 0, 80).unwrap())
        .unwrap();
    let (mv, score) = search(&b, &probs, 1).unwrap();
    assert_eq!(mv, 6);
    assert_eq!(score, WIN_SCORE);
}

#[test]
fn test_heuristic_used_at_depth_limit() {
    let centre = |b: &Board, p: Player| if b.cell(4) == Some(p) { 10.0 } else { 0.0 };
    let b = Board::new(Player::X);
    let mut nodes = 0;
    let (mv, score) = pick_best_move(&b, &ProbabilityTable::certain(), &centre, 1, &mut nodes).unwrap();
    assert_eq!(mv, 4);
    assert_eq!(score, 10.0);
}

#[test]
fn test_evaluate_position_matches_best_move_score() {
    let mut rng = StdRng::seed_from_u64(21);
    let b = board([1, 0, 2, 0, 1, 0, 0, 2, 0, 2]);
    for _ in 0..5 {
        let probs = ProbabilityTable::random(&mut rng);
        for depth in 1..=3 {
            let (_, score) = search(&b, &probs, depth).unwrap();
            assert_eq!(evaluate_position(&b, &probs, &ZeroHeuristic, depth), score);
        }
    }
}

#[test]
fn test_evaluate_position_on_decided_boards() {
    let probs = ProbabilityTable::certain();
    let o_won = board([2, 2, 2, 1, 1, 0, 1, 0, 0, 1]);
    assert_eq!(evaluate_position(&o_won, &probs, &ZeroHeuristic, 3), -WIN_SCORE);

    let o_won_o_to_move = board([2, 2, 2, 1, 1, 0, 1, 0, 0, 2]);
    assert_eq!(evaluate_position(&o_won_o_to_move, &probs, &ZeroHeuristic, 3), WIN_SCORE);

    let tied = board([1, 2, 1, 1, 2, 2, 2, 1, 1, 2]);
    assert_eq!(evaluate_position(&tied, &probs, &ZeroHeuristic, 3), 0.0);
}

#[test]
fn test_evaluate_position_at_depth_zero_is_the_heuristic() {
    let centre = |b: &Board, p: Player| if b.cell(4) == Some(p) { 10.0 } else { 0.0 };
    let b = board([0, 0, 0, 0, 2, 0, 0, 0, 0, 1]);
    assert_eq!(evaluate_position(&b, &ProbabilityTable::certain(), &centre, 0), -10.0);
}
