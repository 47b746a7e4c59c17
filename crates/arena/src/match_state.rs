//! Match aggregate: board, probabilities, seats and running score
//!
//! Engines only ever receive copies of the board and the table. The live
//! board changes exclusively through `resolve_move`, or by starting a new game.

use rand::Rng;
use serde::{Deserialize, Serialize};
use ttt_core::{Board, Engine, GameStatus, Outcome, Player, ProbabilityTable};

use crate::config::{PlayerConfig, PlayerKind, TierConfig};
use crate::error::{ArenaError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub ties: u32,
}

impl Scoreboard {
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Tied => self.ties += 1,
            GameStatus::InProgress => {}
        }
    }
}

/// What happened on one resolved move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Player,
    pub cell: usize,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResolution {
    pub record: MoveRecord,
    pub status: GameStatus,
}

#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    probabilities: ProbabilityTable,
    players: [PlayerConfig; 2],
    score: Scoreboard,
}

impl Match {
    /// Starts a match with a fresh board and a freshly generated table.
    pub fn new<R: Rng + ?Sized>(players: [PlayerConfig; 2], first: Player, rng: &mut R) -> Self {
        Self {
            board: Board::new(first),
            probabilities: ProbabilityTable::random(rng),
            players,
            score: Scoreboard::default(),
        }
    }

    /// Starts a match on a given position and table.
    pub fn with_position(
        players: [PlayerConfig; 2],
        board: Board,
        probabilities: ProbabilityTable,
    ) -> Self {
        Self {
            board,
            probabilities,
            players,
            score: Scoreboard::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn probabilities(&self) -> &ProbabilityTable {
        &self.probabilities
    }

    pub fn score(&self) -> Scoreboard {
        self.score
    }

    pub fn player(&self, player: Player) -> &PlayerConfig {
        &self.players[player.idx()]
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// Changes a seat's type. Takes effect from that seat's next turn.
    pub fn set_player(&mut self, player: Player, config: PlayerConfig) {
        self.players[player.idx()] = config;
    }

    /// Switches a seat to a player type from `tiers`. Takes effect from that seat's next turn.
    pub fn set_player_kind(&mut self, player: Player, kind: PlayerKind, tiers: &TierConfig) {
        self.set_player(player, tiers.player(kind));
    }

    /// Clears the board and rolls a new probability table.
    pub fn reset<R: Rng + ?Sized>(&mut self, initial: Player, rng: &mut R) {
        self.board = Board::new(initial);
        self.probabilities = ProbabilityTable::random(rng);
    }

    pub fn is_automated_turn(&self) -> bool {
        !self.status().is_over() && self.player(self.board.to_move).automated
    }

    /// Asks `engine` for a move on behalf of the automated player to move.
    ///
    /// Returns None when the game is over or the player to move is human.
    pub fn choose_move(&self, engine: &mut dyn Engine) -> Option<usize> {
        if !self.is_automated_turn() {
            return None;
        }
        let limits = self.player(self.board.to_move).search_limits()?;
        engine
            .search(&self.board, &self.probabilities, limits)
            .best_move
    }

    /// Applies a move whose outcome has already been decided.
    pub fn resolve_move(&mut self, cell: usize, outcome: Outcome) -> Result<MoveResolution> {
        let player = self.board.to_move;
        let status = self.board.apply(cell, outcome)?;
        self.score.record(status);
        Ok(MoveResolution {
            record: MoveRecord {
                player,
                cell,
                outcome,
            },
            status,
        })
    }

    /// Rolls an outcome from the cell's odds and resolves it.
    pub fn attempt_move<R: Rng + ?Sized>(&mut self, cell: usize, rng: &mut R) -> Result<MoveResolution> {
        if cell >= ttt_core::CELLS {
            return Err(ttt_core::Error::CellOutOfRange { index: cell }.into());
        }
        let outcome = self.probabilities.odds(cell).sample(rng);
        self.resolve_move(cell, outcome)
    }

    /// Lets the automated player to move take its turn.
    pub fn play_turn<R: Rng + ?Sized>(
        &mut self,
        engine: &mut dyn Engine,
        rng: &mut R,
    ) -> Result<MoveResolution> {
        if self.status().is_over() {
            return Err(ttt_core::Error::GameOver.into());
        }
        let to_move = self.board.to_move;
        if !self.player(to_move).automated {
            return Err(ArenaError::HumanSeat(to_move));
        }
        let cell = self.choose_move(engine).ok_or(ttt_core::Error::GameOver)?;
        self.attempt_move(cell, rng)
    }

    /// Who opens the next game: the winner, or after a tie the player who
    /// did not make the final move.
    pub fn next_starter(&self) -> Option<Player> {
        match self.status() {
            GameStatus::Won(p) => Some(p),
            GameStatus::Tied => Some(self.board.to_move),
            GameStatus::InProgress => None,
        }
    }

    /// Resets for the next game once the current one is decided.
    pub fn start_next_game<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Player> {
        let starter = self.next_starter().ok_or(ArenaError::GameInProgress)?;
        self.reset(starter, rng);
        Ok(starter)
    }
}

#[cfg(test)]
#[path = "match_state_tests.rs"]
mod match_state_tests;
