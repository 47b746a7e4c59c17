//! Time-boxed iterative deepening
//!
//! The first iteration at `min_depth` always completes. Further iterations
//! deepen one ply at a time while the budget plausibly allows another full
//! search. There is no cancellation inside an iteration: the clock and the
//! stop flag are read only between iterations, so one deep iteration can
//! overrun the budget.

use std::time::{Duration, Instant};

use tracing::debug;
use ttt_core::{Board, ProbabilityTable, SearchLimits};

use crate::eval::Heuristic;
use crate::search::pick_best_move;

/// Controller state for one automated turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FirstSearch,
    MoreSearch,
    Done,
}

/// One completed depth.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationInfo {
    pub depth: u8,
    pub best_move: Option<usize>,
    pub score: f64,
    pub nodes: u64,
    pub duration: Duration,
}

/// Outcome of a deepening run. The deepest completed iteration decides the move.
#[derive(Debug, Clone, PartialEq)]
pub struct DeepeningReport {
    pub best_move: Option<usize>,
    pub score: f64,
    pub depth_reached: u8,
    pub nodes: u64,
    pub iterations: Vec<IterationInfo>,
    pub elapsed: Duration,
    /// True when time or a stop request ended deepening before `max_depth`
    pub stopped: bool,
}

/// Whether the first iteration left room for more: `2 * elapsed < budget`.
fn worth_deepening(elapsed: Duration, budget: Duration) -> bool {
    elapsed.saturating_mul(2) < budget
}

/// Projects the next iteration as taking at least as long as the last one.
fn next_would_overrun(elapsed: Duration, last: Duration, budget: Duration) -> bool {
    elapsed.saturating_add(last) >= budget
}

fn run_iteration<H: Heuristic + ?Sized>(
    board: &Board,
    probabilities: &ProbabilityTable,
    heuristic: &H,
    depth: u8,
) -> IterationInfo {
    let started = Instant::now();
    let mut nodes = 0;
    let best = pick_best_move(board, probabilities, heuristic, depth, &mut nodes);
    let info = IterationInfo {
        depth,
        best_move: best.map(|(mv, _)| mv),
        score: best.map(|(_, s)| s).unwrap_or(0.0),
        nodes,
        duration: started.elapsed(),
    };
    debug!(
        depth,
        best_move = ?info.best_move,
        score = info.score,
        nodes,
        duration_ms = info.duration.as_millis() as u64,
        "iteration complete"
    );
    info
}

/// Runs the engine at increasing depths within `limits`.
///
/// The caller starts `limits.time_control` when the turn begins; elapsed time
/// is measured from that point.
pub fn iterative_deepening<H: Heuristic + ?Sized>(
    board: &Board,
    probabilities: &ProbabilityTable,
    heuristic: &H,
    limits: &SearchLimits,
) -> DeepeningReport {
    let tc = &limits.time_control;
    let budget = limits.move_time;
    let max_depth = limits.max_depth.unwrap_or(limits.min_depth);

    let mut iterations: Vec<IterationInfo> = Vec::new();
    let mut depth = limits.min_depth;
    let mut stopped = false;
    let mut phase = Phase::Idle;

    loop {
        phase = match phase {
            Phase::Idle => Phase::FirstSearch,
            Phase::FirstSearch => {
                let first = run_iteration(board, probabilities, heuristic, depth);
                let decided = first.best_move.is_none();
                iterations.push(first);

                if decided || depth >= max_depth {
                    Phase::Done
                } else if worth_deepening(tc.elapsed(), budget) && !limits.should_stop() {
                    Phase::MoreSearch
                } else {
                    stopped = true;
                    Phase::Done
                }
            }
            Phase::MoreSearch => {
                if tc.is_expired() {
                    stopped = true;
                    Phase::Done
                } else {
                    depth += 1;
                    let it = run_iteration(board, probabilities, heuristic, depth);
                    let last = it.duration;
                    iterations.push(it);

                    if depth >= max_depth {
                        Phase::Done
                    } else if next_would_overrun(tc.elapsed(), last, budget) {
                        stopped = true;
                        Phase::Done
                    } else {
                        Phase::MoreSearch
                    }
                }
            }
            Phase::Done => break,
        };
    }

    // Deeper iterations fully supersede shallower ones
    let (best_move, score, depth_reached) = iterations
        .last()
        .map(|it| (it.best_move, it.score, it.depth))
        .unwrap_or((None, 0.0, 0));

    DeepeningReport {
        best_move,
        score,
        depth_reached,
        nodes: iterations.iter().map(|it| it.nodes).sum(),
        iterations,
        elapsed: tc.elapsed(),
        stopped,
    }
}

#[cfg(test)]
#[path = "deepening_tests.rs"]
mod deepening_tests;
