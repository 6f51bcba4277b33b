use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::dealing::DECK_SIZE;
use crate::error::AppError;

pub const DEFAULT_SEAT_CAPACITY: u8 = 3;
pub const DEFAULT_STARTING_LIVES: u8 = 5;

/// What happens to a cancellation still pending when a round's last trick closes.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarryPolicy {
    /// The accumulated value goes to the next round's first decided trick.
    #[default]
    NextRound,
    /// The accumulated value is dropped when the next round is dealt.
    Discard,
}

impl FromStr for CarryPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "next_round" => Ok(CarryPolicy::NextRound),
            "discard" => Ok(CarryPolicy::Discard),
            other => Err(AppError::config(format!(
                "carry policy must be 'next_round' or 'discard', got '{other}'"
            ))),
        }
    }
}

/// Per-table engine settings.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub seat_capacity: u8,
    pub starting_lives: u8,
    pub carry_policy: CarryPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seat_capacity: DEFAULT_SEAT_CAPACITY,
            starting_lives: DEFAULT_STARTING_LIVES,
            carry_policy: CarryPolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_capacity(seat_capacity: u8) -> Self {
        Self {
            seat_capacity,
            ..Self::default()
        }
    }

    /// Build from `FODINHA_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let config = Self {
            seat_capacity: parse_var("FODINHA_SEAT_CAPACITY")?.unwrap_or(DEFAULT_SEAT_CAPACITY),
            starting_lives: parse_var("FODINHA_STARTING_LIVES")?
                .unwrap_or(DEFAULT_STARTING_LIVES),
            carry_policy: match env::var("FODINHA_CARRY_POLICY") {
                Ok(v) => v.parse()?,
                Err(_) => CarryPolicy::default(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject tables that could not be dealt from a single deck.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.seat_capacity < 2 {
            return Err(AppError::config(format!(
                "seat capacity must be at least 2, got {}",
                self.seat_capacity
            )));
        }
        if self.starting_lives == 0 {
            return Err(AppError::config("starting lives must be at least 1"));
        }
        // Every hand at full lives plus the face-up reference card.
        let needed = self.seat_capacity as usize * self.starting_lives as usize + 1;
        if needed > DECK_SIZE {
            return Err(AppError::config(format!(
                "{} seats with {} lives need {needed} cards, deck has {DECK_SIZE}",
                self.seat_capacity, self.starting_lives
            )));
        }
        Ok(())
    }
}

/// Parse an optional numeric environment variable.
pub(crate) fn parse_var<T: FromStr>(key: &str) -> Result<Option<T>, AppError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::config(format!("{key} is not a valid number: '{raw}'"))),
        Err(_) => Ok(None),
    }
}
