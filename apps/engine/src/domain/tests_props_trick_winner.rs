//! Property tests for trick resolution against a brute-force reference.

use proptest::prelude::*;

use crate::domain::cards_logic::{resolve_trick, TrickResolution};
use crate::domain::state::Seat;
use crate::domain::test_gens;
use crate::domain::test_prelude::proptest_config;
use crate::domain::{Card, Suit};

fn suit_rank(suit: Suit) -> usize {
    Suit::ALL
        .iter()
        .position(|&s| s == suit)
        .unwrap_or_default()
}

/// Scan strengths from the top, the slow way.
fn oracle(plays: &[(Seat, Card)], manilla: u8) -> Option<Seat> {
    let mut best: Option<(Seat, Card)> = None;
    for &(seat, card) in plays {
        if card.strength() != manilla {
            continue;
        }
        match best {
            Some((_, held)) if suit_rank(held.suit) >= suit_rank(card.suit) => {}
            _ => best = Some((seat, card)),
        }
    }
    if let Some((seat, _)) = best {
        return Some(seat);
    }

    for strength in (1..=13u8).rev() {
        let matching: Vec<Seat> = plays
            .iter()
            .filter(|(_, c)| c.strength() == strength)
            .map(|&(s, _)| s)
            .collect();
        if matching.len() == 1 {
            return Some(matching[0]);
        }
    }
    None
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn prop_resolution_matches_reference((plays, manilla) in test_gens::trick_with_manilla()) {
        let expected = oracle(&plays, manilla);
        match resolve_trick(&plays, manilla) {
            TrickResolution::Winner(seat) => prop_assert_eq!(Some(seat), expected),
            TrickResolution::Cancelled => prop_assert_eq!(None, expected),
        }
    }

    #[test]
    fn prop_winner_is_a_player((plays, manilla) in test_gens::trick_with_manilla()) {
        if let TrickResolution::Winner(seat) = resolve_trick(&plays, manilla) {
            prop_assert!(plays.iter().any(|&(s, _)| s == seat));
        }
    }

    #[test]
    fn prop_any_manilla_decides_the_trick((plays, manilla) in test_gens::trick_with_manilla()) {
        let has_manilla = plays.iter().any(|(_, c)| c.strength() == manilla);
        let resolution = resolve_trick(&plays, manilla);
        if has_manilla {
            prop_assert!(matches!(resolution, TrickResolution::Winner(_)));
        }
    }

    #[test]
    fn prop_play_order_does_not_matter((plays, manilla) in test_gens::trick_with_manilla()) {
        let mut reversed = plays.clone();
        reversed.reverse();
        prop_assert_eq!(resolve_trick(&plays, manilla), resolve_trick(&reversed, manilla));
    }
}
