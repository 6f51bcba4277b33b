//! The engine entry point: one `Game` per table.
//!
//! `Game` is a single-threaded automaton. Every call runs to completion and
//! either applies fully or returns one `DomainError` with the state unchanged;
//! callers sharing a game across threads must serialize access themselves
//! (see `services::table_registry`).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::engine::EngineConfig;
use crate::domain::bidding::place_bid;
use crate::domain::participant::Participant;
use crate::domain::round::start_round;
use crate::domain::scoring::leaders;
use crate::domain::snapshot::{player_view, snapshot, GameSnapshot, PlayerView};
use crate::domain::state::{GameState, Phase, Seat};
use crate::domain::tricks::{play_card, PlayOutcome};
use crate::error::AppError;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone)]
pub struct Game<R = ChaCha8Rng> {
    config: EngineConfig,
    state: GameState,
    rng: R,
}

impl Game<ChaCha8Rng> {
    /// Game whose shuffles are fully determined by `seed`.
    pub fn seeded(config: EngineConfig, seed: u64) -> Result<Self, AppError> {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn new(config: EngineConfig, rng: R) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(
                config.seat_capacity,
                config.starting_lives,
                config.carry_policy,
            ),
            config,
            rng,
        })
    }

    /// Take the next free seat.
    pub fn register(&mut self, name: impl Into<String>) -> Result<Seat, DomainError> {
        let capacity = self.state.capacity;
        if self.state.seat_count() >= capacity as usize {
            return Err(DomainError::LobbyFull { capacity });
        }
        if self.state.phase != Phase::Lobby {
            return Err(self.state.phase.mismatch());
        }
        let seat = self.state.seat_count() as Seat;
        let participant = Participant::new(seat, name, self.state.starting_lives);
        info!(seat, name = %participant.name, "Participant registered");
        self.state.participants.push(participant);
        Ok(seat)
    }

    /// Deal the first round. Only valid once, with every seat filled.
    pub fn start(&mut self) -> Result<(), DomainError> {
        if self.state.phase != Phase::Lobby {
            return Err(self.state.phase.mismatch());
        }
        let registered = self.state.seat_count() as u8;
        if registered < self.state.capacity {
            return Err(DomainError::IncompleteRoster {
                registered,
                capacity: self.state.capacity,
            });
        }
        info!(seats = registered, "Game starting");
        start_round(&mut self.state, &mut self.rng)
    }

    pub fn bid(&mut self, seat: Seat, value: u8) -> Result<(), DomainError> {
        place_bid(&mut self.state, seat, value).inspect_err(|err| {
            debug!(seat, value, error = %err, "Bid rejected");
        })
    }

    pub fn play(&mut self, seat: Seat, position: usize) -> Result<PlayOutcome, DomainError> {
        play_card(&mut self.state, seat, position, &mut self.rng).inspect_err(|err| {
            debug!(seat, position, error = %err, "Play rejected");
        })
    }

    pub fn snapshot(&self) -> GameSnapshot {
        snapshot(&self.state)
    }

    /// Snapshot plus the private hand of `seat`.
    pub fn player_view(&self, seat: Seat) -> Option<PlayerView> {
        player_view(&self.state, seat)
    }

    /// Seats with the most lives once the game is over; empty while it runs.
    pub fn winners(&self) -> Vec<Seat> {
        if self.state.phase == Phase::GameOver {
            leaders(&self.state)
        } else {
            Vec::new()
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_over(&self) -> bool {
        self.state.phase == Phase::GameOver
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}
