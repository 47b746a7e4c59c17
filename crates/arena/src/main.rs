//! Arena CLI
//!
//! Run automated matches between difficulty tiers and query the engine on
//! flat positions.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use expectimax_engine::ExpectimaxEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;
use ttt_arena::{tier_match, MatchConfig, PlayerKind, TierConfig};
use ttt_core::{Board, Engine, ProbabilityTable, SearchLimits};

fn print_usage() {
    println!("Stochastic tic-tac-toe arena");
    println!();
    println!("Usage:");
    println!("  arena match <x> <o> [--games N] [--seed S] [--max-turns T] [--config FILE] [--out FILE]");
    println!("  arena choose --state CELLS [--probs ODDS] [--kind K | --depth D] [--seed S] [--config FILE]");
    println!("  arena tiers [--config FILE]");
    println!();
    println!("Player kinds:");
    println!("  easy, medium, hard  - fixed-depth search (4, 5, 6 by default)");
    println!("  master              - deepens from 7 up to 15 within the turn budget");
    println!();
    println!("CELLS is 10 comma-separated integers (0 empty, 1 X, 2 O, then the turn as 1 or 2).");
    println!("ODDS is 27 comma-separated percentages, success/neutral/failure per cell.");
    println!();
    println!("Examples:");
    println!("  arena match easy master --games 20 --seed 7");
    println!("  arena choose --state 1,1,0,2,2,0,0,0,0,1 --depth 3");
}

/// Minimal `--flag value` parser over the arguments after the subcommand.
struct Flags<'a> {
    positional: Vec<&'a str>,
    pairs: Vec<(&'a str, &'a str)>,
}

impl<'a> Flags<'a> {
    fn parse(args: &'a [String]) -> Result<Self> {
        let mut positional = Vec::new();
        let mut pairs = Vec::new();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if let Some(name) = arg.strip_prefix("--") {
                let value = iter
                    .next()
                    .with_context(|| format!("missing value for --{name}"))?;
                pairs.push((name, value.as_str()));
            } else {
                positional.push(arg.as_str());
            }
        }
        Ok(Self { positional, pairs })
    }

    fn get(&self, name: &str) -> Option<&'a str> {
        self.pairs.iter().rev().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }

    fn parsed<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: std::str::FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.get(name)
            .map(|v| v.parse::<T>().with_context(|| format!("invalid value '{v}' for --{name}")))
            .transpose()
    }
}

fn parse_csv(values: &str) -> Result<Vec<i32>> {
    values
        .split(',')
        .map(|v| v.trim().parse::<i32>().with_context(|| format!("'{v}' is not an integer")))
        .collect()
}

fn load_tiers(flags: &Flags<'_>) -> Result<TierConfig> {
    match flags.get("config") {
        Some(path) => TierConfig::load(&PathBuf::from(path))
            .with_context(|| format!("loading tiers from {path}")),
        None => Ok(TierConfig::default()),
    }
}

fn run_match(args: &[String]) -> Result<()> {
    let flags = Flags::parse(args)?;
    let [x, o] = flags.positional[..] else {
        bail!("match requires two player kinds, e.g. `arena match easy master`");
    };
    let x_kind: PlayerKind = x.parse()?;
    let o_kind: PlayerKind = o.parse()?;
    let tiers = load_tiers(&flags)?;

    let defaults = MatchConfig::default();
    let config = MatchConfig {
        num_games: flags.parsed("games")?.unwrap_or(defaults.num_games),
        max_turns: flags.parsed("max-turns")?.unwrap_or(defaults.max_turns),
        seed: flags.parsed("seed")?.unwrap_or(defaults.seed),
        ..defaults
    };

    println!("=== Match: {x_kind} (X) vs {o_kind} (O) ===");
    println!("Games: {}, Seed: {}", config.num_games, config.seed);
    println!();

    let report = tier_match(&tiers, x_kind, o_kind, config)?;
    report.print_report();

    if let Some(out) = flags.get("out") {
        report
            .save(&PathBuf::from(out))
            .with_context(|| format!("saving report to {out}"))?;
        println!("Report written to {out}");
    }
    Ok(())
}

fn run_choose(args: &[String]) -> Result<()> {
    let flags = Flags::parse(args)?;
    let state = flags.get("state").context("choose requires --state")?;
    let board = Board::from_state(&parse_csv(state)?)?;

    let probabilities = match flags.get("probs") {
        Some(odds) => ProbabilityTable::from_flat(&parse_csv(odds)?)?,
        None => {
            let seed = flags.parsed("seed")?.unwrap_or(0);
            ProbabilityTable::random(&mut StdRng::seed_from_u64(seed))
        }
    };

    let limits = match (flags.parsed::<u8>("depth")?, flags.get("kind")) {
        (Some(depth), _) => SearchLimits::depth(depth),
        (None, kind) => {
            let kind: PlayerKind = kind.unwrap_or("medium").parse()?;
            load_tiers(&flags)?
                .player(kind)
                .search_limits()
                .with_context(|| format!("{kind} is not an automated player"))?
        }
    };

    println!("{board}");
    println!("Probabilities: {:?}", probabilities.to_flat());

    let mut engine = ExpectimaxEngine::new();
    let result = engine.search(&board, &probabilities, limits);
    println!(
        "Move: {} (score {:.3}, depth {}, {} nodes)",
        result.move_code(),
        result.score,
        result.depth,
        result.nodes
    );
    Ok(())
}

fn show_tiers(args: &[String]) -> Result<()> {
    let flags = Flags::parse(args)?;
    print!("{}", load_tiers(&flags)?.to_toml_string()?);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "choose" => run_choose(&args[2..]),
        "tiers" => show_tiers(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}
