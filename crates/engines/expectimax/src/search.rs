//! Expected-value minimax with alpha-beta pruning
//!
//! Every candidate move branches three ways (success, neutral, failure). A
//! move's value is the probability-weighted mean of its three successor
//! values, and the search alternates between maximizing and minimizing at
//! each ply no matter whose mark actually landed.
//!
//! Cutoffs are taken per candidate move, after all of its weighted branches
//! have been searched. Each branch is searched with its own window: the
//! parent window widened by the most the other branches could contribute.
//! A branch that fails outside that window therefore proves the whole move
//! fails the parent window, and a bound is never averaged in as if it were an
//! exact value. The root move and score match an exhaustive search.

use ttt_core::{Board, Outcome, Player, ProbabilityTable};

use crate::eval::{evaluate, Heuristic};

/// Value of a won position for the player the search maximizes for.
pub const WIN_SCORE: f64 = 1000.0;

/// Initial window at the root, wider than any reachable value.
const ROOT_WINDOW: f64 = 1_000_000.0;

/// Extra room given to every branch window so float rounding in the window
/// arithmetic can never turn an exact value into a bound.
const WINDOW_SLACK: f64 = 1e-6;

struct Searcher<'a, H: ?Sized> {
    probabilities: &'a ProbabilityTable,
    heuristic: &'a H,
    for_player: Player,
    nodes: &'a mut u64,
}

impl<H: Heuristic + ?Sized> Searcher<'_, H> {
    /// Value of `board` and the move that produced it.
    ///
    /// The value is exact when it lies strictly inside `(alpha, beta)`. At or
    /// below `alpha` it is an upper bound, at or above `beta` a lower bound.
    fn node(
        &mut self,
        board: &Board,
        depth: u8,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
    ) -> (f64, Option<usize>) {
        *self.nodes += 1;

        if let Some(winner) = board.winner() {
            let score = if winner == self.for_player {
                WIN_SCORE
            } else {
                -WIN_SCORE
            };
            return (score, None);
        }
        if board.is_tie() {
            return (0.0, None);
        }
        if depth == 0 {
            return (evaluate(self.heuristic, board, self.for_player), None);
        }

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_move = None;

        for index in board.empty_cells() {
            let expected = self.expected_value(board, index, depth - 1, !maximizing, alpha, beta);

            // Strict comparisons keep the first of equal moves
            if maximizing {
                if expected > best {
                    best = expected;
                    best_move = Some(index);
                }
                if expected > alpha {
                    alpha = expected;
                }
            } else {
                if expected < best {
                    best = expected;
                    best_move = Some(index);
                }
                if expected < beta {
                    beta = expected;
                }
            }
            if beta <= alpha {
                break;
            }
        }

        (best, best_move)
    }

    /// Probability-weighted value of trying `index`, searched against `(alpha, beta)`.
    fn expected_value(
        &mut self,
        board: &Board,
        index: usize,
        depth: u8,
        maximizing: bool,
        alpha: f64,
        beta: f64,
    ) -> f64 {
        let odds = self.probabilities.odds(index);
        let mut total = 0.0;

        for outcome in Outcome::ALL {
            let weight = odds.weight(outcome);
            if weight == 0 {
                continue;
            }
            let p = f64::from(weight);
            let rest = 100.0 - p;

            let lo = ((100.0 * alpha - rest * WIN_SCORE) / p).max(-WIN_SCORE) - WINDOW_SLACK;
            let hi = ((100.0 * beta + rest * WIN_SCORE) / p).min(WIN_SCORE) + WINDOW_SLACK;

            let child = board.successor(index, outcome);
            let (value, _) = self.node(&child, depth, maximizing, lo, hi);
            total += p * value;
        }

        // Percentages are whole numbers; divide once per move in floating point
        total / 100.0
    }
}

/// Searches `board` for the player to move and returns the best cell with its expected value.
///
/// Returns `None` without searching when the board is already won or full.
/// A depth of 0 is treated as 1 so the root always compares its moves.
///
/// # Arguments
/// * `board` - Position to search, never modified
/// * `probabilities` - Outcome odds, never modified
/// * `heuristic` - Depth-cutoff evaluation
/// * `depth` - Search depth in plies
/// * `nodes` - Counter for nodes searched (for statistics)
pub fn pick_best_move<H: Heuristic + ?Sized>(
    board: &Board,
    probabilities: &ProbabilityTable,
    heuristic: &H,
    depth: u8,
    nodes: &mut u64,
) -> Option<(usize, f64)> {
    if board.is_terminal() {
        return None;
    }

    let mut searcher = Searcher {
        probabilities,
        heuristic,
        for_player: board.to_move,
        nodes,
    };
    let (score, best_move) = searcher.node(board, depth.max(1), true, -ROOT_WINDOW, ROOT_WINDOW);
    best_move.map(|mv| (mv, score))
}

/// Value of `board` for the player to move, searched to `depth`.
///
/// Decided boards score `WIN_SCORE`, `-WIN_SCORE` or 0. At depth 0 this is the
/// heuristic difference alone.
pub fn evaluate_position<H: Heuristic + ?Sized>(
    board: &Board,
    probabilities: &ProbabilityTable,
    heuristic: &H,
    depth: u8,
) -> f64 {
    let mut nodes = 0;
    let mut searcher = Searcher {
        probabilities,
        heuristic,
        for_player: board.to_move,
        nodes: &mut nodes,
    };
    searcher.node(board, depth, true, -ROOT_WINDOW, ROOT_WINDOW).0
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
