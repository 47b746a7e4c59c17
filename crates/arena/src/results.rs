//! Match reports and their JSON storage

use serde::{Deserialize, Serialize};
use std::path::Path;
use ttt_core::Player;

use crate::config::PlayerConfig;
use crate::error::{ArenaError, Result};
use crate::match_state::{MoveRecord, Scoreboard};

/// One finished (or capped) game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game: u32,
    pub starter: Player,
    /// None for a tie or a capped game
    pub winner: Option<Player>,
    /// True when the turn cap ended the game
    pub capped: bool,
    pub moves: Vec<MoveRecord>,
}

/// A seat in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatEntry {
    pub name: String,
    pub config: PlayerConfig,
}

/// Complete match results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub x: SeatEntry,
    pub o: SeatEntry,
    pub seed: u64,
    pub score: Scoreboard,
    pub capped_games: u32,
    pub games: Vec<GameRecord>,
}

impl MatchReport {
    pub fn total_games(&self) -> u32 {
        self.score.x_wins + self.score.o_wins + self.score.ties
    }

    /// Score from X's perspective (1 for win, 0.5 for tie, 0 for loss)
    pub fn x_score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.score.x_wins as f64 + 0.5 * self.score.ties as f64) / total
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ArenaError::Io {
            operation: "write report",
            path: path.display().to_string(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ArenaError::Io {
            operation: "read report",
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Match: {} (X) vs {} (O) ===\n\n", self.x.name, self.o.name));
        report.push_str(&format!("Seed: {}\n", self.seed));
        report.push_str(&format!(
            "{:<10} {:>6} {:>6} {:>6} {:>8}\n",
            "", "X", "O", "Tie", "Capped"
        ));
        report.push_str(&"-".repeat(40));
        report.push('\n');
        report.push_str(&format!(
            "{:<10} {:>6} {:>6} {:>6} {:>8}\n",
            "Games", self.score.x_wins, self.score.o_wins, self.score.ties, self.capped_games
        ));
        report.push_str(&format!("\nX score: {:.1}%\n", self.x_score() * 100.0));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
