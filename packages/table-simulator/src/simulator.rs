//! Plays whole games in memory with random legal actions.

use fodinha_engine::{AppError, EngineConfig, Game, RoundSummary, Seat};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::debug;

/// One line of simulator output.
#[derive(Debug, Clone, Serialize)]
pub struct GameResult {
    pub game_num: u32,
    pub seed: u64,
    pub seats: u8,
    pub rounds: u16,
    pub tricks: u32,
    pub cancelled_tricks: u32,
    pub final_lives: Vec<u8>,
    pub winners: Vec<Seat>,
    pub round_summaries: Vec<RoundSummary>,
}

pub struct Simulator {
    config: EngineConfig,
    seed: u64,
}

impl Simulator {
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        Self { config, seed }
    }

    /// Run one game to completion. The same seed always yields the same result.
    pub fn simulate_game(&self, game_num: u32) -> Result<GameResult, AppError> {
        let mut game = Game::seeded(self.config, self.seed)?;
        for seat in 0..self.config.seat_capacity {
            game.register(format!("bot{seat}"))?;
        }
        game.start()?;

        // Player decisions use their own stream so they never disturb the deck
        let mut choices = ChaCha8Rng::seed_from_u64(self.seed.rotate_left(32));
        let mut tricks = 0;
        let mut cancelled_tricks = 0;
        let mut round_summaries = Vec::new();

        while !game.is_over() {
            let snap = game.snapshot();
            let Some(seat) = snap.active_seat else {
                break;
            };
            if snap.phase.is_bidding() {
                let bid = random_bid(&game, seat, &mut choices);
                game.bid(seat, bid)?;
                continue;
            }

            let hand_size = game.player_view(seat).map(|v| v.hand.len()).unwrap_or(0);
            let outcome = game.play(seat, choices.random_range(0..hand_size.max(1)))?;
            if let Some(trick) = outcome.trick {
                tricks += 1;
                if trick.winner.is_none() {
                    cancelled_tricks += 1;
                }
            }
            if let Some(summary) = outcome.round {
                debug!(game_num, round_no = summary.round_no, "Round finished");
                round_summaries.push(summary);
            }
        }

        let snap = game.snapshot();
        Ok(GameResult {
            game_num,
            seed: self.seed,
            seats: self.config.seat_capacity,
            rounds: snap.round_number,
            tricks,
            cancelled_tricks,
            final_lives: snap.players.iter().map(|p| p.lives).collect(),
            winners: game.winners(),
            round_summaries,
        })
    }
}

/// Uniform bid in 0..=turns, re-drawn when it would break the pé rule.
pub fn random_bid<R: Rng>(game: &Game, seat: Seat, rng: &mut R) -> u8 {
    let snap = game.snapshot();
    let alive = snap.players.iter().filter(|p| p.lives > 0).count();
    let total: u32 = snap.bids.iter().map(|b| b.value as u32).sum();
    let is_last = snap.bids.len() + 1 == alive;
    let turns = snap.turns_this_round;

    let bid = rng.random_range(0..=turns);
    if is_last && total + bid as u32 == turns as u32 {
        debug!(seat, bid, "Avoiding pé bid");
        // One of bid-1 and bid+1 is always legal
        if bid == 0 {
            1
        } else {
            bid - 1
        }
    } else {
        bid
    }
}
