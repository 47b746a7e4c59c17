//! Depth-cutoff evaluation

use ttt_core::{Board, Player};

/// Static score of a non-terminal board for one player.
///
/// The search uses the difference `heuristic(for) - heuristic(other)` at the
/// depth limit. That difference must stay strictly inside
/// `(-WIN_SCORE, WIN_SCORE)` so forced wins and losses always dominate.
pub trait Heuristic {
    fn heuristic(&self, board: &Board, player: Player) -> f64;
}

/// Scores every position as zero.
///
/// With this heuristic the depth limit only matters when a win or a full
/// board lies within reach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    #[inline]
    fn heuristic(&self, _board: &Board, _player: Player) -> f64 {
        0.0
    }
}

impl<F> Heuristic for F
where
    F: Fn(&Board, Player) -> f64,
{
    fn heuristic(&self, board: &Board, player: Player) -> f64 {
        self(board, player)
    }
}

/// Depth-cutoff value of `board` from `for_player`'s perspective.
#[inline]
pub fn evaluate<H: Heuristic + ?Sized>(heuristic: &H, board: &Board, for_player: Player) -> f64 {
    heuristic.heuristic(board, for_player) - heuristic.heuristic(board, for_player.other())
}
