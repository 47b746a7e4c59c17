//! Tests for terminal detection over every reachable position
//!
//! Positions are enumerated by playing every sequence of stochastic outcomes
//! from the empty board, which covers boards ordinary tic-tac-toe can never
//! reach (e.g. more O marks than X marks).

use std::collections::HashSet;

use ttt_core::{Board, GameStatus, Outcome, Player, LINES};

fn reachable_boards() -> HashSet<[Option<Player>; 9]> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new(Player::X), Board::new(Player::O)];
    while let Some(board) = stack.pop() {
        if !seen.insert(board.cells) || board.is_terminal() {
            continue;
        }
        for index in board.empty_cells() {
            for outcome in [Outcome::Success, Outcome::Failure] {
                stack.push(board.successor(index, outcome));
            }
        }
    }
    seen
}

fn has_line(cells: &[Option<Player>; 9], player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| cells[i] == Some(player)))
}

// =============================================================================
// Winner / tie consistency
// =============================================================================

#[test]
fn test_winner_owns_a_complete_line() {
    for cells in reachable_boards() {
        let board = Board {
            cells,
            to_move: Player::X,
        };
        match board.winner() {
            Some(p) => assert!(has_line(&cells, p), "winner without a line:\n{board}"),
            None => {
                assert!(!has_line(&cells, Player::X));
                assert!(!has_line(&cells, Player::O));
            }
        }
    }
}

#[test]
fn test_full_boards_are_tied_or_won() {
    let mut tied = 0;
    let mut won = 0;
    for cells in reachable_boards() {
        let board = Board {
            cells,
            to_move: Player::O,
        };
        if !board.is_tie() {
            continue;
        }
        match board.status() {
            GameStatus::Tied => {
                assert_eq!(board.winner(), None);
                tied += 1;
            }
            GameStatus::Won(p) => {
                assert_eq!(board.winner(), Some(p));
                won += 1;
            }
            GameStatus::InProgress => panic!("full board still in progress:\n{board}"),
        }
    }
    assert!(tied > 0);
    assert!(won > 0);
}

#[test]
fn test_terminal_state_ignores_turn() {
    for cells in reachable_boards() {
        let x = Board {
            cells,
            to_move: Player::X,
        };
        let o = Board {
            cells,
            to_move: Player::O,
        };
        assert_eq!(x.status(), o.status());
    }
}

// =============================================================================
// Move resolution
// =============================================================================

#[test]
fn test_neutral_outcome_keeps_cells() {
    let mut board = Board::new(Player::X);
    board.apply(4, Outcome::Neutral).unwrap();
    assert_eq!(board.cells, [None; 9]);
    assert_eq!(board.to_move, Player::O);
    assert!(board.is_empty_at(4));
}

#[test]
fn test_failure_can_hand_the_opponent_a_win() {
    let mut board = Board::from_state(&[2, 2, 0, 1, 1, 0, 0, 0, 0, 1]).unwrap();
    assert_eq!(board.apply(2, Outcome::Failure), Ok(GameStatus::Won(Player::O)));
}
