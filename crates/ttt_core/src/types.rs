use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELLS: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}
impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }
    /// Integer code used by the flat host encoding (1 = X, 2 = O).
    pub fn code(self) -> i32 {
        match self {
            Player::X => 1,
            Player::O => 2,
        }
    }
    pub fn from_code(code: i32) -> Option<Player> {
        match code {
            1 => Some(Player::X),
            2 => Some(Player::O),
            _ => None,
        }
    }
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Result of attempting to place a mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The mover's mark lands on the cell.
    Success,
    /// Nothing lands, the turn still passes.
    Neutral,
    /// The opponent's mark lands on the cell.
    Failure,
}

impl Outcome {
    /// Outcomes in probability-table order.
    pub const ALL: [Outcome; 3] = [Outcome::Success, Outcome::Neutral, Outcome::Failure];

    pub fn idx(self) -> usize {
        match self {
            Outcome::Success => 0,
            Outcome::Neutral => 1,
            Outcome::Failure => 2,
        }
    }
}
