//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod game;
pub mod game_transition;
pub mod participant;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod tests_game_transition;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use bidding::Bid;
pub use cards_logic::{manilla_strength, resolve_trick, TrickResolution};
pub use cards_types::{Card, Rank, Suit};
pub use dealing::Deck;
pub use game::Game;
pub use game_transition::{derive_transitions, GameTransition};
pub use participant::Participant;
pub use rules::turns_for_round;
pub use scoring::{LifeLoss, RoundSummary};
pub use seed_derivation::derive_table_seed;
pub use snapshot::{GameSnapshot, PlayerView};
pub use state::{GameState, Phase, RoundState, Seat};
pub use tricks::{PlayOutcome, TrickResult};
