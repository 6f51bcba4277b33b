//! Card tokens: two characters, rank then suit (e.g., "QH", "7D", "TC")

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

impl Rank {
    pub const fn token(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }

    fn from_token(ch: char) -> Option<Rank> {
        Rank::ALL.iter().copied().find(|r| r.token() == ch)
    }
}

impl Suit {
    pub const fn token(self) -> char {
        match self {
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
        }
    }

    fn from_token(ch: char) -> Option<Suit> {
        Suit::ALL.iter().copied().find(|s| s.token() == ch)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.token(), self.suit.token())
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(DomainError::parse_card(format!("expected 2 characters: {s}")));
        };
        let rank = Rank::from_token(rank_ch)
            .ok_or_else(|| DomainError::parse_card(format!("invalid rank in {s}")))?;
        let suit = Suit::from_token(suit_ch)
            .ok_or_else(|| DomainError::parse_card(format!("invalid suit in {s}")))?;
        Ok(Card { suit, rank })
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
