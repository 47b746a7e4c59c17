use std::fmt;

use crate::error::{Error, Result};
use crate::types::*;

/// Length of the flat host encoding: 9 cells plus the turn indicator.
pub const STATE_LEN: usize = CELLS + 1;

/// Winning lines in check order: columns, rows, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// The 3x3 board plus the player whose turn is next.
///
/// `Board` is `Copy`: hypothetical successors are always fresh values, so
/// nothing explored during search can alias the caller's board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub cells: [Option<Player>; CELLS],
    pub to_move: Player,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

impl Board {
    pub fn new(first: Player) -> Self {
        Board {
            cells: [None; CELLS],
            to_move: first,
        }
    }

    /// Decodes the flat host encoding (`0` empty, `1` X, `2` O, last value is the turn).
    pub fn from_state(state: &[i32]) -> Result<Self> {
        if state.len() != STATE_LEN {
            return Err(Error::InvalidStateLength {
                expected: STATE_LEN,
                got: state.len(),
            });
        }
        let mut cells = [None; CELLS];
        for (index, &value) in state[..CELLS].iter().enumerate() {
            cells[index] = match value {
                0 => None,
                code => Some(Player::from_code(code).ok_or(Error::InvalidCell { index, value })?),
            };
        }
        let turn = state[CELLS];
        let to_move = Player::from_code(turn).ok_or(Error::InvalidTurn { value: turn })?;
        Ok(Board { cells, to_move })
    }

    pub fn to_state(&self) -> [i32; STATE_LEN] {
        let mut state = [0; STATE_LEN];
        for (slot, cell) in state.iter_mut().zip(self.cells.iter()) {
            *slot = cell.map_or(0, Player::code);
        }
        state[CELLS] = self.to_move.code();
        state
    }

    #[inline]
    pub fn cell(&self, index: usize) -> Option<Player> {
        self.cells[index]
    }

    #[inline]
    pub fn is_empty_at(&self, index: usize) -> bool {
        self.cells[index].is_none()
    }

    /// Empty cell indices in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELLS).filter(move |&i| self.cells[i].is_none())
    }

    /// True when no cell is empty. A full board may still have a winner.
    pub fn is_tie(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Owner of the first complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|&[a, b, c]| match self.cells[a] {
            Some(p) if self.cells[b] == Some(p) && self.cells[c] == Some(p) => Some(p),
            _ => None,
        })
    }

    /// Winner checked first, tie as the fallback.
    pub fn status(&self) -> GameStatus {
        if let Some(p) = self.winner() {
            GameStatus::Won(p)
        } else if self.is_tie() {
            GameStatus::Tied
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_over()
    }

    /// Builds the board that results from `outcome` at `index`.
    ///
    /// Every outcome passes the turn, including `Neutral`. The caller
    /// guarantees `index` is an empty cell.
    pub fn successor(&self, index: usize, outcome: Outcome) -> Board {
        let mut next = *self;
        match outcome {
            Outcome::Success => next.cells[index] = Some(self.to_move),
            Outcome::Neutral => {}
            Outcome::Failure => next.cells[index] = Some(self.to_move.other()),
        }
        next.to_move = self.to_move.other();
        next
    }

    /// Resolves a move in place. This is the only mutation path for a live game.
    pub fn apply(&mut self, index: usize, outcome: Outcome) -> Result<GameStatus> {
        if index >= CELLS {
            return Err(Error::CellOutOfRange { index });
        }
        if self.is_terminal() {
            return Err(Error::GameOver);
        }
        if !self.is_empty_at(index) {
            return Err(Error::CellOccupied { index });
        }
        *self = self.successor(index, outcome);
        Ok(self.status())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(3) {
            let line: String = row
                .iter()
                .map(|c| c.map_or('.', Player::symbol))
                .collect();
            writeln!(f, "{line}")?;
        }
        write!(f, "{} to move", self.to_move)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
