//! Card game logic: manilla derivation and trick winner determination

use std::collections::BTreeMap;

use super::cards_types::Card;
use crate::domain::state::Seat;

/// Highest plain strength (the Two).
pub const MAX_STRENGTH: u8 = 13;

/// Strength that acts as trump ("manilla") for a round, given the face-up card.
///
/// It is the strength one above the reference card, wrapping from the Two back to the Three.
pub fn manilla_strength(reference: Card) -> u8 {
    let strength = reference.strength();
    if strength == MAX_STRENGTH {
        1
    } else {
        strength + 1
    }
}

/// How a closed trick was decided.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TrickResolution {
    /// The seat that takes the trick.
    Winner(Seat),
    /// Every plain strength was matched by another card: nobody takes it.
    Cancelled,
}

/// Resolve a trick from its plays (in play order) and the round's manilla strength.
///
/// - Several manillas: the one with the strongest suit wins.
/// - One manilla: it wins.
/// - No manilla: the highest strength played exactly once wins; strengths that
///   appear more than once cancel each other out.
pub fn resolve_trick(plays: &[(Seat, Card)], manilla: u8) -> TrickResolution {
    let best_manilla = plays
        .iter()
        .filter(|(_, card)| card.strength() == manilla)
        .max_by_key(|(_, card)| card.suit);
    if let Some(&(seat, _)) = best_manilla {
        return TrickResolution::Winner(seat);
    }

    let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
    for (_, card) in plays {
        *counts.entry(card.strength()).or_default() += 1;
    }
    let unique_best = counts
        .iter()
        .rev()
        .find(|(_, &count)| count == 1)
        .map(|(&strength, _)| strength);

    match unique_best {
        Some(strength) => plays
            .iter()
            .find(|(_, card)| card.strength() == strength)
            .map(|&(seat, _)| TrickResolution::Winner(seat))
            .unwrap_or(TrickResolution::Cancelled),
        None => TrickResolution::Cancelled,
    }
}
