//! A seated participant: identity, remaining lives and current hand.

use crate::domain::state::Seat;
use crate::domain::Card;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub seat: Seat,
    pub name: String,
    pub lives: u8,
    /// Cards in draw order; `play` addresses them by position.
    pub hand: Vec<Card>,
}

impl Participant {
    pub fn new(seat: Seat, name: impl Into<String>, lives: u8) -> Self {
        Self {
            seat,
            name: name.into(),
            lives,
            hand: Vec::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }

    /// Remove `loss` lives, flooring at zero. Returns the lives actually removed.
    pub fn lose_lives(&mut self, loss: u8) -> u8 {
        let removed = loss.min(self.lives);
        self.lives -= removed;
        removed
    }

    pub fn take_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Remove the card at `position`, if there is one.
    pub fn play_card(&mut self, position: usize) -> Option<Card> {
        (position < self.hand.len()).then(|| self.hand.remove(position))
    }

    pub fn discard_hand(&mut self) {
        self.hand.clear();
    }
}
