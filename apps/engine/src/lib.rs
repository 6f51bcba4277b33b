#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::{CarryPolicy, EngineConfig, RegistryConfig};
pub use domain::{
    derive_transitions, Card, Game, GameSnapshot, GameTransition, Phase, PlayOutcome, PlayerView,
    Rank, RoundSummary, Seat, Suit, TrickResult,
};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use services::table_registry::{TableId, TableRegistry, TableSummary};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
