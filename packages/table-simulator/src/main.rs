//! Table simulator CLI: plays Fodinha games in memory.
//!
//! Batch mode plays seeded games with random legal actions and writes one JSON
//! line per game. `--interactive` plays a single hot-seat game on stdin.

mod interactive;
mod output;
mod simulator;

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use fodinha_engine::{CarryPolicy, EngineConfig};
use output::OutputWriter;
use rand::Rng;
use simulator::Simulator;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "table-simulator")]
#[command(about = "In-memory Fodinha table simulator")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Seats at the table
    #[arg(long, default_value = "3")]
    seats: u8,

    /// Lives every participant starts with
    #[arg(long, default_value = "5")]
    lives: u8,

    /// What happens to a cancellation pending at round end
    #[arg(long, default_value = "next-round")]
    carry: Carry,

    /// Base seed; game N uses seed + N - 1. Random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Play one game interactively from stdin
    #[arg(long)]
    interactive: bool,

    /// JSON-lines output file (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Carry {
    NextRound,
    Discard,
}

impl From<Carry> for CarryPolicy {
    fn from(carry: Carry) -> Self {
        match carry {
            Carry::NextRound => CarryPolicy::NextRound,
            Carry::Discard => CarryPolicy::Discard,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays valid JSON lines
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = EngineConfig {
        seat_capacity: args.seats,
        starting_lives: args.lives,
        carry_policy: args.carry.into(),
    };
    config.validate()?;
    let base_seed = args.seed.unwrap_or_else(|| rand::rng().random());

    if args.interactive {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        interactive::run(config, base_seed, stdin.lock(), &mut stdout)?;
        return Ok(());
    }

    let mut writer = OutputWriter::new(args.output.as_deref())?;
    let start = Instant::now();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let seed = base_seed.wrapping_add(u64::from(game_num - 1));
        match Simulator::new(config, seed).simulate_game(game_num) {
            Ok(result) => writer.write_line(&result)?,
            Err(e) => {
                errors += 1;
                warn!(game_num, seed, error = %e, "Game failed");
            }
        }
    }

    if let Some(path) = writer.path() {
        info!(path = %path.display(), "Results written");
    }
    writer.finish()?;
    info!(
        games = args.games,
        errors,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Simulation finished"
    );
    Ok(())
}
