pub mod board;
pub mod error;
pub mod probability;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::{Error, Result};
pub use probability::*;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by every automated player
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Chosen cell (None if the game is already decided)
    pub best_move: Option<usize>,
    /// Expected value of the chosen move from the mover's perspective
    pub score: f64,
    /// Deepest completed iteration
    pub depth: u8,
    /// Number of nodes searched across all iterations
    pub nodes: u64,
    /// Whether deepening ended because of the clock or a stop request
    pub stopped: bool,
}

impl SearchResult {
    /// Host encoding of the chosen move: `0..=8`, or `-1` when there is none.
    pub fn move_code(&self) -> i32 {
        self.best_move.map_or(-1, |m| m as i32)
    }
}

/// Trait that all automated players implement.
///
/// `search` is synchronous; a host that needs to stay responsive wraps the
/// call in whatever task or thread model it already uses.
pub trait Engine: Send {
    /// Choose a move for `board.to_move`.
    ///
    /// # Arguments
    /// * `board` - Current board, never modified
    /// * `probabilities` - Outcome odds for this match, never modified
    /// * `limits` - Depth range and time budget for this turn
    fn search(
        &mut self,
        board: &Board,
        probabilities: &ProbabilityTable,
        limits: SearchLimits,
    ) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
