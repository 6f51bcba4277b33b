#![allow(dead_code)]

use fodinha_engine::{EngineConfig, Game, GameSnapshot, PlayOutcome, RoundSummary, Seat};
use rand::Rng;

// Logging is auto-installed for every test binary that declares `mod common`
#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}

/// Names used for seats in the order they register.
pub const NAMES: [&str; 6] = ["ana", "bia", "caio", "duda", "enzo", "fabi"];

/// A seeded game with every seat registered and the first round dealt.
pub fn started_game(config: EngineConfig, seed: u64) -> Game {
    let mut game = Game::seeded(config, seed).expect("valid config");
    for name in NAMES.iter().take(config.seat_capacity as usize) {
        game.register(*name).expect("seat available");
    }
    game.start().expect("full roster starts");
    game
}

/// A bid the active seat may always place: zero, or one when zero would be pé.
pub fn safe_bid(snap: &GameSnapshot) -> u8 {
    let alive = snap.players.iter().filter(|p| p.lives > 0).count();
    let total: u32 = snap.bids.iter().map(|b| b.value as u32).sum();
    if snap.bids.len() + 1 == alive && total == snap.turns_this_round as u32 {
        1
    } else {
        0
    }
}

pub fn active_seat(game: &Game) -> Seat {
    game.snapshot().active_seat.expect("a seat is active")
}

/// Place a safe bid for every seat until play starts.
pub fn bid_round(game: &mut Game) {
    while game.phase().is_bidding() {
        let snap = game.snapshot();
        let seat = snap.active_seat.expect("bidder");
        game.bid(seat, safe_bid(&snap)).expect("safe bid accepted");
    }
}

/// Play the active seat's card at a random position.
pub fn play_random<R: Rng>(game: &mut Game, rng: &mut R) -> PlayOutcome {
    let seat = active_seat(game);
    let hand = game.player_view(seat).expect("seat exists").hand.len();
    game.play(seat, rng.random_range(0..hand)).expect("legal play")
}

/// Drive a game to GameOver with safe bids and random plays.
pub fn play_to_end<R: Rng>(game: &mut Game, rng: &mut R) -> Vec<RoundSummary> {
    let mut rounds = Vec::new();
    while !game.is_over() {
        match game.phase() {
            phase if phase.is_bidding() => bid_round(game),
            phase if phase.is_playing() => {
                if let Some(summary) = play_random(game, rng).round {
                    rounds.push(summary);
                }
            }
            other => panic!("unexpected phase {other:?}"),
        }
    }
    rounds
}
