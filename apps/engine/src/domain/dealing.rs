//! Deck generation, shuffling and drawing.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

pub const DECK_SIZE: usize = 52;

/// Suit order used while building a fresh deck, per rank.
const BUILD_SUIT_ORDER: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs];

/// A depletable sequence of cards; draws come off the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Full 52-card deck in deterministic construction order (Ace first).
    pub fn generate() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in Rank::ALL {
            for suit in BUILD_SUIT_ORDER {
                cards.push(Card { suit, rank });
            }
        }
        Self { cards }
    }

    /// Fresh deck shuffled with the given random source.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::generate();
        deck.shuffle(rng);
        deck
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn draw_one(&mut self) -> Result<Card, DomainError> {
        self.cards.pop().ok_or(DomainError::DeckExhausted)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
