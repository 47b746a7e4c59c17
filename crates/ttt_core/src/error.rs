//! Validation and move-resolution errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("board state must have {expected} values, got {got}")]
    InvalidStateLength { expected: usize, got: usize },

    #[error("invalid cell value {value} at index {index} (expected 0, 1 or 2)")]
    InvalidCell { index: usize, value: i32 },

    #[error("invalid turn indicator {value} (expected 1 or 2)")]
    InvalidTurn { value: i32 },

    #[error("probability table must have {expected} values, got {got}")]
    InvalidTableLength { expected: usize, got: usize },

    #[error("probability {value} for cell {cell} is outside 0..=100")]
    ProbabilityOutOfRange { cell: usize, value: i32 },

    #[error("probabilities for cell {cell} sum to {sum}, expected 100")]
    ProbabilitySum { cell: usize, sum: i32 },

    #[error("cell index {index} is out of range")]
    CellOutOfRange { index: usize },

    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("game is already over")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, Error>;
