//! Match hosting for stochastic tic-tac-toe
//!
//! This crate provides:
//! - The `Match` aggregate that owns the live board and probability table
//! - Per-seat player types and difficulty tiers (configurable from TOML)
//! - An automated match runner with JSON reports
//!
//! # Usage
//!
//! ```bash
//! # Play 20 games of easy (X) against master (O)
//! cargo run -p ttt_arena -- match easy master --games 20 --seed 7
//!
//! # Ask the engine for a move on a flat position
//! cargo run -p ttt_arena -- choose --state 1,1,0,2,2,0,0,0,0,1 --kind hard
//! ```

mod config;
mod error;
mod match_runner;
mod match_state;
mod results;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use match_state::*;
pub use results::*;
