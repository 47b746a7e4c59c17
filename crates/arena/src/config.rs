//! Player types and difficulty tiers
//!
//! Each seat has a `PlayerConfig`. Humans are not automated; automated tiers
//! search at a fixed depth, optionally deepening towards a maximum within the
//! turn budget. Tier settings can be overridden from a TOML file:
//!
//! ```toml
//! time_budget_ms = 3000
//!
//! [master]
//! search_depth = 7
//! max_search_depth = 15
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use ttt_core::SearchLimits;

use crate::error::{ArenaError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Easy,
    Medium,
    Hard,
    Master,
}

impl PlayerKind {
    pub const ALL: [PlayerKind; 5] = [
        PlayerKind::Human,
        PlayerKind::Easy,
        PlayerKind::Medium,
        PlayerKind::Hard,
        PlayerKind::Master,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Easy => "easy",
            PlayerKind::Medium => "medium",
            PlayerKind::Hard => "hard",
            PlayerKind::Master => "master",
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerKind {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self> {
        PlayerKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ArenaError::UnknownPlayerKind(s.to_string()))
    }
}

/// How one seat is played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub automated: bool,
    pub search_depth: Option<u8>,
    pub max_search_depth: Option<u8>,
    pub time_budget_ms: u64,
}

impl PlayerConfig {
    pub fn human() -> Self {
        Self {
            automated: false,
            search_depth: None,
            max_search_depth: None,
            time_budget_ms: 0,
        }
    }

    pub fn automated(search_depth: u8, max_search_depth: Option<u8>, time_budget_ms: u64) -> Self {
        Self {
            automated: true,
            search_depth: Some(search_depth),
            max_search_depth,
            time_budget_ms,
        }
    }

    /// Limits for one turn, or None for a human seat.
    pub fn search_limits(&self) -> Option<SearchLimits> {
        if !self.automated {
            return None;
        }
        let min_depth = self.search_depth.unwrap_or(DEFAULT_DEPTH);
        Some(SearchLimits::deepening(
            min_depth,
            self.max_search_depth,
            Duration::from_millis(self.time_budget_ms),
        ))
    }
}

const DEFAULT_DEPTH: u8 = 4;
const DEFAULT_BUDGET_MS: u64 = 3000;

/// Settings for one automated tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSettings {
    pub search_depth: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_search_depth: Option<u8>,
    /// Overrides the shared budget for this tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_budget_ms: Option<u64>,
}

impl TierSettings {
    const fn fixed(search_depth: u8) -> Self {
        Self {
            search_depth,
            max_search_depth: None,
            time_budget_ms: None,
        }
    }
}

/// All automated tiers plus the shared per-turn budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierConfig {
    pub time_budget_ms: u64,
    pub easy: TierSettings,
    pub medium: TierSettings,
    pub hard: TierSettings,
    pub master: TierSettings,
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            time_budget_ms: DEFAULT_BUDGET_MS,
            easy: TierSettings::fixed(4),
            medium: TierSettings::fixed(5),
            hard: TierSettings::fixed(6),
            master: TierSettings {
                search_depth: 7,
                max_search_depth: Some(15),
                time_budget_ms: None,
            },
        }
    }
}

impl TierConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ArenaError::Io {
            operation: "read tier config",
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn tier(&self, kind: PlayerKind) -> Option<&TierSettings> {
        match kind {
            PlayerKind::Human => None,
            PlayerKind::Easy => Some(&self.easy),
            PlayerKind::Medium => Some(&self.medium),
            PlayerKind::Hard => Some(&self.hard),
            PlayerKind::Master => Some(&self.master),
        }
    }

    /// Seat configuration for a player type.
    pub fn player(&self, kind: PlayerKind) -> PlayerConfig {
        match self.tier(kind) {
            None => PlayerConfig::human(),
            Some(t) => PlayerConfig::automated(
                t.search_depth,
                t.max_search_depth,
                t.time_budget_ms.unwrap_or(self.time_budget_ms),
            ),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
