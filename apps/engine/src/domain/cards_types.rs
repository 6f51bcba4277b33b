//! Core card-related types: Card, Rank, Suit

/// Suits in manilla tie-break order, weakest first.
///
/// The derived `Ord` is the tie-break order: Diamonds < Spades < Hearts < Clubs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Diamonds,
    Spades,
    Hearts,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Spades, Suit::Hearts, Suit::Clubs];
}

/// Face ranks. `value()` is the printed face value (Ace = 1, King = 13).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// Ranks in face-value order, Ace first.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub const fn value(self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
        }
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.iter().copied().find(|r| r.value() == value)
    }

    /// Trump-independent strength, 1 (Three) through 13 (Two).
    ///
    /// Weakest to strongest: 3 4 5 6 7 8 9 10 Q J K A 2.
    pub const fn strength(self) -> u8 {
        match self {
            Rank::Three => 1,
            Rank::Four => 2,
            Rank::Five => 3,
            Rank::Six => 4,
            Rank::Seven => 5,
            Rank::Eight => 6,
            Rank::Nine => 7,
            Rank::Ten => 8,
            Rank::Queen => 9,
            Rank::Jack => 10,
            Rank::King => 11,
            Rank::Ace => 12,
            Rank::Two => 13,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    pub const fn strength(&self) -> u8 {
        self.rank.strength()
    }
}
