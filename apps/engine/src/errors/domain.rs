//! Domain-level error type returned by every engine operation.
//!
//! Each variant is a rejected action: the engine state is left untouched.
//! `DeckExhausted` and `NoLivingDealer` are the exception; they signal a broken
//! internal invariant and should never be reachable under a validated config.

use thiserror::Error;

use crate::domain::state::Seat;
use crate::errors::error_code::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("lobby is full ({capacity} seats)")]
    LobbyFull { capacity: u8 },
    #[error("roster incomplete: {registered} of {capacity} seats filled")]
    IncompleteRoster { registered: u8, capacity: u8 },
    #[error("action not allowed in phase {phase}")]
    WrongPhase { phase: &'static str },
    #[error("not seat {seat}'s turn")]
    NotYourTurn { seat: Seat },
    #[error("seat {seat} has no lives left")]
    ParticipantDead { seat: Seat },
    #[error("seat {seat} holds no cards")]
    NoCardsInHand { seat: Seat },
    #[error("seat {seat} has no card at position {position} (hand size {hand_size})")]
    InvalidCardIndex {
        seat: Seat,
        position: usize,
        hand_size: usize,
    },
    #[error("bid {bid} from the last bidder would make the total equal {turns}")]
    ForbiddenPeBid { bid: u8, turns: u8 },
    #[error("deck exhausted while dealing")]
    DeckExhausted,
    #[error("no living participant can deal")]
    NoLivingDealer,
    #[error("parse card: {0}")]
    ParseCard(String),
}

impl DomainError {
    pub const fn code(&self) -> ErrorCode {
        match self {
            DomainError::LobbyFull { .. } => ErrorCode::LobbyFull,
            DomainError::IncompleteRoster { .. } => ErrorCode::IncompleteRoster,
            DomainError::WrongPhase { .. } => ErrorCode::WrongPhase,
            DomainError::NotYourTurn { .. } => ErrorCode::NotYourTurn,
            DomainError::ParticipantDead { .. } => ErrorCode::ParticipantDead,
            DomainError::NoCardsInHand { .. } => ErrorCode::NoCardsInHand,
            DomainError::InvalidCardIndex { .. } => ErrorCode::InvalidCardIndex,
            DomainError::ForbiddenPeBid { .. } => ErrorCode::ForbiddenPeBid,
            DomainError::DeckExhausted => ErrorCode::DeckExhausted,
            DomainError::NoLivingDealer => ErrorCode::NoLivingDealer,
            DomainError::ParseCard(_) => ErrorCode::ParseCard,
        }
    }

    /// True for invariant violations that indicate a defect rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, DomainError::DeckExhausted | DomainError::NoLivingDealer)
    }

    pub fn parse_card(detail: impl Into<String>) -> Self {
        Self::ParseCard(detail.into())
    }
}
