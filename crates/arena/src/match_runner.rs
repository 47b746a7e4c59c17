//! Match runner for playing automated games between two seats

use expectimax_engine::ExpectimaxEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use ttt_core::{Engine, GameStatus, Player};

use crate::config::{PlayerConfig, PlayerKind, TierConfig};
use crate::error::{ArenaError, Result};
use crate::match_state::Match;
use crate::results::{GameRecord, MatchReport, SeatEntry};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Turns per game before it is abandoned as a tie
    pub max_turns: u32,
    /// Seed for probability tables and outcome rolls
    pub seed: u64,
    /// Player who opens the first game
    pub first_player: Player,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_turns: 200,
            seed: 0,
            first_player: Player::X,
        }
    }
}

/// One side of a match.
pub struct Seat<'a> {
    pub name: String,
    pub config: PlayerConfig,
    pub engine: &'a mut dyn Engine,
}

/// Runs matches between two automated seats
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match. `x` always plays X; who opens each game follows the
    /// next-starter rule, and a capped game passes the opening to the other side.
    pub fn run_match<'a>(&self, mut x: Seat<'a>, mut o: Seat<'a>) -> Result<MatchReport> {
        if !x.config.automated {
            return Err(ArenaError::HumanSeat(Player::X));
        }
        if !o.config.automated {
            return Err(ArenaError::HumanSeat(Player::O));
        }

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut state = Match::new([x.config, o.config], self.config.first_player, &mut rng);
        let mut capped_games = 0;
        let mut games = Vec::with_capacity(self.config.num_games as usize);

        for game in 0..self.config.num_games {
            x.engine.new_game();
            o.engine.new_game();
            let starter = state.board().to_move;
            let mut moves = Vec::new();

            while !state.status().is_over() && (moves.len() as u32) < self.config.max_turns {
                let engine: &mut dyn Engine = match state.board().to_move {
                    Player::X => &mut *x.engine,
                    Player::O => &mut *o.engine,
                };
                let resolution = state.play_turn(engine, &mut rng)?;
                moves.push(resolution.record);
            }

            // Wins and ties are already on the match scoreboard
            let (winner, capped) = match state.status() {
                GameStatus::Won(p) => (Some(p), false),
                GameStatus::Tied => (None, false),
                GameStatus::InProgress => {
                    capped_games += 1;
                    (None, true)
                }
            };

            info!(
                game = game + 1,
                of = self.config.num_games,
                starter = %starter,
                winner = ?winner,
                capped,
                turns = moves.len(),
                "game finished"
            );

            games.push(GameRecord {
                game: game + 1,
                starter,
                winner,
                capped,
                moves,
            });

            let next = state.next_starter().unwrap_or(starter.other());
            state.reset(next, &mut rng);
        }

        // A capped game counts as a tie
        let mut score = state.score();
        score.ties += capped_games;

        Ok(MatchReport {
            x: SeatEntry {
                name: x.name,
                config: x.config,
            },
            o: SeatEntry {
                name: o.name,
                config: o.config,
            },
            seed: self.config.seed,
            score,
            capped_games,
            games,
        })
    }
}

/// Quick utility: match two tiers with fresh expectimax engines
pub fn tier_match(
    tiers: &TierConfig,
    x_kind: PlayerKind,
    o_kind: PlayerKind,
    config: MatchConfig,
) -> Result<MatchReport> {
    let mut x_engine = ExpectimaxEngine::new();
    let mut o_engine = ExpectimaxEngine::new();
    let runner = MatchRunner::new(config);
    runner.run_match(
        Seat {
            name: x_kind.to_string(),
            config: tiers.player(x_kind),
            engine: &mut x_engine,
        },
        Seat {
            name: o_kind.to_string(),
            config: tiers.player(o_kind),
            engine: &mut o_engine,
        },
    )
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
