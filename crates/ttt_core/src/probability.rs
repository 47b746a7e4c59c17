//! Per-cell outcome probabilities.
//!
//! Every cell carries three integer percentages (success, neutral, failure)
//! that sum to 100. A table is generated once per match and stays fixed until
//! the next reset; the search engine only ever reads it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Outcome, CELLS};

/// Length of the flat host encoding: three percentages per cell.
pub const TABLE_LEN: usize = CELLS * 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutcomeOdds {
    pub success: u8,
    pub neutral: u8,
    pub failure: u8,
}

impl OutcomeOdds {
    /// A move that always lands as intended.
    pub const CERTAIN: OutcomeOdds = OutcomeOdds {
        success: 100,
        neutral: 0,
        failure: 0,
    };

    pub fn new(success: u8, neutral: u8, failure: u8) -> Result<Self> {
        let odds = OutcomeOdds {
            success,
            neutral,
            failure,
        };
        odds.validate(0)?;
        Ok(odds)
    }

    fn validate(&self, cell: usize) -> Result<()> {
        let sum = i32::from(self.success) + i32::from(self.neutral) + i32::from(self.failure);
        if sum != 100 {
            return Err(Error::ProbabilitySum { cell, sum });
        }
        Ok(())
    }

    /// Percentage for a single outcome.
    #[inline]
    pub fn weight(&self, outcome: Outcome) -> u8 {
        match outcome {
            Outcome::Success => self.success,
            Outcome::Neutral => self.neutral,
            Outcome::Failure => self.failure,
        }
    }

    /// Draws an outcome according to these odds.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Outcome {
        let roll: u8 = rng.gen_range(0..100);
        if roll < self.success {
            Outcome::Success
        } else if u16::from(roll) < u16::from(self.success) + u16::from(self.neutral) {
            Outcome::Neutral
        } else {
            Outcome::Failure
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProbabilityTable {
    odds: [OutcomeOdds; CELLS],
}

impl ProbabilityTable {
    pub fn new(odds: [OutcomeOdds; CELLS]) -> Result<Self> {
        for (cell, o) in odds.iter().enumerate() {
            o.validate(cell)?;
        }
        Ok(Self { odds })
    }

    /// Same odds on every cell.
    pub fn uniform(odds: OutcomeOdds) -> Self {
        Self {
            odds: [odds; CELLS],
        }
    }

    /// Every move always succeeds. The game becomes ordinary tic-tac-toe.
    pub fn certain() -> Self {
        Self::uniform(OutcomeOdds::CERTAIN)
    }

    /// Decodes the flat host encoding, row-major by cell index.
    pub fn from_flat(values: &[i32]) -> Result<Self> {
        if values.len() != TABLE_LEN {
            return Err(Error::InvalidTableLength {
                expected: TABLE_LEN,
                got: values.len(),
            });
        }
        let mut odds = [OutcomeOdds::CERTAIN; CELLS];
        for (cell, chunk) in values.chunks_exact(3).enumerate() {
            let mut pct = [0u8; 3];
            for (slot, &value) in pct.iter_mut().zip(chunk) {
                *slot = u8::try_from(value)
                    .ok()
                    .filter(|v| *v <= 100)
                    .ok_or(Error::ProbabilityOutOfRange { cell, value })?;
            }
            odds[cell] = OutcomeOdds {
                success: pct[0],
                neutral: pct[1],
                failure: pct[2],
            };
        }
        Self::new(odds)
    }

    pub fn to_flat(&self) -> [i32; TABLE_LEN] {
        let mut flat = [0; TABLE_LEN];
        for (chunk, o) in flat.chunks_exact_mut(3).zip(self.odds.iter()) {
            chunk[0] = i32::from(o.success);
            chunk[1] = i32::from(o.neutral);
            chunk[2] = i32::from(o.failure);
        }
        flat
    }

    /// Returns a copy with one cell's odds replaced.
    pub fn with_cell(mut self, index: usize, odds: OutcomeOdds) -> Result<Self> {
        if index >= CELLS {
            return Err(Error::CellOutOfRange { index });
        }
        odds.validate(index)?;
        self.odds[index] = odds;
        Ok(self)
    }

    #[inline]
    pub fn odds(&self, index: usize) -> OutcomeOdds {
        self.odds[index]
    }

    /// Generates a fresh table for a new match.
    ///
    /// Each value is a positive multiple of 5: success is drawn from 5..=90,
    /// neutral from what is left leaving at least 5 for failure.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut odds = [OutcomeOdds::CERTAIN; CELLS];
        for o in odds.iter_mut() {
            let success = 5 + 5 * rng.gen_range(0..18u8);
            let neutral_steps = (100 - success) / 5 - 1;
            let neutral = 5 + 5 * rng.gen_range(0..neutral_steps);
            *o = OutcomeOdds {
                success,
                neutral,
                failure: 100 - success - neutral,
            };
        }
        Self { odds }
    }
}

impl Default for ProbabilityTable {
    fn default() -> Self {
        Self::certain()
    }
}

#[cfg(test)]
#[path = "probability_tests.rs"]
mod probability_tests;
