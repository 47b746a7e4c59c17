//! Integer-sequence interface for hosts that keep the game as plain arrays.
//!
//! A board is 10 integers (nine cells as 0 empty / 1 X / 2 O, then the turn
//! as 1 or 2). A probability table is 27 integers, three per cell in
//! success/neutral/failure order. Moves come back as `0..=8`, or `-1` when
//! the game is already decided.

use std::time::Duration;

use ttt_core::{Board, ProbabilityTable, Result, SearchLimits};

use crate::ExpectimaxEngine;

/// Fixed-depth search over flat inputs.
pub fn minimax_move(state: &[i32], probabilities: &[i32], depth: u8) -> Result<i32> {
    let board = Board::from_state(state)?;
    let table = ProbabilityTable::from_flat(probabilities)?;
    Ok(crate::minimax_move(&board, &table, depth).map_or(-1, |mv| mv as i32))
}

/// Time-boxed deepening search over flat inputs.
pub fn choose_move(
    state: &[i32],
    probabilities: &[i32],
    min_depth: u8,
    max_depth: Option<u8>,
    time_budget_ms: u64,
) -> Result<i32> {
    let board = Board::from_state(state)?;
    let table = ProbabilityTable::from_flat(probabilities)?;
    let limits = SearchLimits::deepening(min_depth, max_depth, Duration::from_millis(time_budget_ms));
    let mv = ExpectimaxEngine::new().choose_move(&board, &table, limits);
    Ok(mv.map_or(-1, |mv| mv as i32))
}

#[cfg(test)]
#[path = "flat_tests.rs"]
mod flat_tests;
