//! Error codes surfaced to callers of the engine.
//!
//! All error codes are SCREAMING_SNAKE_CASE and stay stable across releases,
//! so a transport layer can forward them without matching on messages.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lobby
    /// Every seat is already taken
    LobbyFull,
    /// Game started before every seat was filled
    IncompleteRoster,

    // Action validation
    /// Action does not match the current phase
    WrongPhase,
    /// Seat acted out of turn
    NotYourTurn,
    /// Seat has been eliminated
    ParticipantDead,
    /// Seat has nothing to play
    NoCardsInHand,
    /// Hand position out of bounds
    InvalidCardIndex,
    /// Last bidder tried to make the bid total equal the trick count
    ForbiddenPeBid,
    /// Card token could not be parsed
    ParseCard,

    // Invariant violations
    DeckExhausted,
    NoLivingDealer,

    // Service layer
    /// No table registered under the given id
    TableNotFound,
    /// Registry already holds the maximum number of tables
    RegistryFull,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LobbyFull => "LOBBY_FULL",
            Self::IncompleteRoster => "INCOMPLETE_ROSTER",

            Self::WrongPhase => "WRONG_PHASE",
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::ParticipantDead => "PARTICIPANT_DEAD",
            Self::NoCardsInHand => "NO_CARDS_IN_HAND",
            Self::InvalidCardIndex => "INVALID_CARD_INDEX",
            Self::ForbiddenPeBid => "FORBIDDEN_PE_BID",
            Self::ParseCard => "PARSE_CARD",

            Self::DeckExhausted => "DECK_EXHAUSTED",
            Self::NoLivingDealer => "NO_LIVING_DEALER",

            Self::TableNotFound => "TABLE_NOT_FOUND",
            Self::RegistryFull => "REGISTRY_FULL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
