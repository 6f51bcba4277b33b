//! Round setup: shuffle, trump reference, dealer rotation, trick count and deal.

use rand::Rng;
use tracing::{info, warn};

use crate::config::engine::CarryPolicy;
use crate::domain::cards_logic::manilla_strength;
use crate::domain::dealing::Deck;
use crate::domain::rules::turns_for_round;
use crate::domain::state::{GameState, Phase, RoundState};
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// Deal a new round.
///
/// Everything that can fail is computed before the state is touched, so an
/// error leaves the previous round intact.
pub fn start_round<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> Result<(), DomainError> {
    let mut deck = Deck::shuffled(rng);
    let trump_reference = deck.draw_one()?;
    let dealer = state.next_dealer()?;
    let turns = turns_for_round(state.participants.iter().map(|p| p.lives));

    let mut hands: Vec<Vec<Card>> = Vec::with_capacity(state.seat_count());
    for participant in &state.participants {
        let mut hand = Vec::with_capacity(participant.lives as usize);
        if participant.is_alive() {
            for _ in 0..participant.lives {
                hand.push(deck.draw_one()?);
            }
        }
        hands.push(hand);
    }

    let pending = state.round.win_multiplier;
    let win_multiplier = match state.carry_policy {
        CarryPolicy::NextRound => pending,
        CarryPolicy::Discard => {
            if pending > 1 {
                warn!(
                    round_no = state.round_no,
                    pending, "Discarding unresolved cancellation at round end"
                );
            }
            1
        }
    };

    state.round_no += 1;
    state.dealer = Some(dealer);
    state.turn = Some(dealer);
    state.round = RoundState {
        trump_reference: Some(trump_reference),
        turns,
        trick_index: 0,
        bids: Vec::new(),
        wins: vec![0; state.seat_count()],
        trick_plays: Vec::new(),
        win_multiplier,
        last_trick: state.round.last_trick.take(),
    };
    for (participant, hand) in state.participants.iter_mut().zip(hands) {
        participant.hand = hand;
    }
    state.phase = Phase::bidding_for(state.alive_count());

    info!(
        round_no = state.round_no,
        dealer,
        turns,
        trump_reference = %trump_reference,
        manilla_strength = manilla_strength(trump_reference),
        win_multiplier,
        phase = state.phase.as_str(),
        "Round dealt"
    );
    Ok(())
}
