//! Expectimax Engine
//!
//! Expected-value alpha-beta search for stochastic tic-tac-toe, driven by a
//! time-boxed iterative-deepening controller.

pub mod deepening;
mod eval;
pub mod flat;
mod search;

use ttt_core::{Board, Engine, ProbabilityTable, SearchLimits, SearchResult};

pub use deepening::{iterative_deepening, DeepeningReport, IterationInfo, Phase};
pub use eval::{evaluate, Heuristic, ZeroHeuristic};
pub use search::{evaluate_position, pick_best_move, WIN_SCORE};

/// Automated player using expected-value minimax.
///
/// This engine uses:
/// - Minimax over the probability-weighted mean of each move's three outcomes
/// - Per-move alpha-beta cutoffs
/// - A pluggable depth-cutoff heuristic (zero by default)
/// - Iterative deepening inside a per-turn time budget
#[derive(Debug, Clone, Default)]
pub struct ExpectimaxEngine<H = ZeroHeuristic> {
    heuristic: H,
    /// Node counter for statistics
    nodes: u64,
}

impl ExpectimaxEngine {
    pub fn new() -> Self {
        Self::with_heuristic(ZeroHeuristic)
    }
}

impl<H: Heuristic> ExpectimaxEngine<H> {
    pub fn with_heuristic(heuristic: H) -> Self {
        Self {
            heuristic,
            nodes: 0,
        }
    }

    /// Synchronous move choice for hosts that only need the cell.
    pub fn choose_move(
        &mut self,
        board: &Board,
        probabilities: &ProbabilityTable,
        limits: SearchLimits,
    ) -> Option<usize> {
        self.think(board, probabilities, limits).best_move
    }

    /// Full deepening report for one turn. Starts the turn clock.
    pub fn think(
        &mut self,
        board: &Board,
        probabilities: &ProbabilityTable,
        mut limits: SearchLimits,
    ) -> DeepeningReport {
        limits.start();
        let report = iterative_deepening(board, probabilities, &self.heuristic, &limits);
        self.nodes = report.nodes;
        report
    }

    /// Nodes searched during the last turn.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl<H: Heuristic + Send> Engine for ExpectimaxEngine<H> {
    fn search(
        &mut self,
        board: &Board,
        probabilities: &ProbabilityTable,
        limits: SearchLimits,
    ) -> SearchResult {
        let report = self.think(board, probabilities, limits);
        SearchResult {
            best_move: report.best_move,
            score: report.score,
            depth: report.depth_reached,
            nodes: report.nodes,
            stopped: report.stopped,
        }
    }

    fn name(&self) -> &str {
        "Expectimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// Single fixed-depth search with the zero heuristic.
pub fn minimax_move(board: &Board, probabilities: &ProbabilityTable, depth: u8) -> Option<usize> {
    let mut nodes = 0;
    pick_best_move(board, probabilities, &ZeroHeuristic, depth, &mut nodes).map(|(mv, _)| mv)
}
