use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::bidding::ensure_actor;
use crate::domain::cards_logic::{manilla_strength, resolve_trick, TrickResolution};
use crate::domain::scoring::{settle_round, RoundSummary};
use crate::domain::state::{GameState, Phase, Seat};
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// A closed trick and what it was worth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickResult {
    /// 0-based index of the trick within its round.
    pub trick_index: u8,
    pub plays: Vec<(Seat, Card)>,
    /// None when every strength cancelled out.
    pub winner: Option<Seat>,
    /// Tricks credited to the winner (0 on cancellation).
    pub awarded: u8,
    /// Value the next decided trick will carry.
    pub next_multiplier: u8,
}

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub card: Card,
    /// Set when this play closed the trick.
    pub trick: Option<TrickResult>,
    /// Set when the closed trick was the last of its round.
    pub round: Option<RoundSummary>,
    pub phase_after: Phase,
}

/// Play the card at `position` of the seat's hand into the current trick.
pub fn play_card<R: Rng + ?Sized>(
    state: &mut GameState,
    seat: Seat,
    position: usize,
    rng: &mut R,
) -> Result<PlayOutcome, DomainError> {
    if !state.phase.is_playing() {
        return Err(state.phase.mismatch());
    }
    ensure_actor(state, seat)?;
    let hand_size = state.participants[seat as usize].hand.len();
    if hand_size == 0 {
        return Err(DomainError::NoCardsInHand { seat });
    }
    let card = state.participants[seat as usize]
        .play_card(position)
        .ok_or(DomainError::InvalidCardIndex {
            seat,
            position,
            hand_size,
        })?;

    state.round.trick_plays.push((seat, card));
    debug!(
        seat,
        card = %card,
        round_no = state.round_no,
        trick_index = state.round.trick_index,
        "Card played"
    );

    if !trick_is_complete(state, seat) {
        state.turn = state.next_actor_after(seat);
        return Ok(PlayOutcome {
            card,
            trick: None,
            round: None,
            phase_after: state.phase,
        });
    }

    let (trick, round) = close_trick(state, rng)?;
    Ok(PlayOutcome {
        card,
        trick: Some(trick),
        round,
        phase_after: state.phase,
    })
}

/// Whether `seat`'s play finished the trick.
///
/// The trick is complete when nobody holds cards any more, or when moving on to
/// the next card holder would reach or pass the dealer: every holder since the
/// leader has then played once.
fn trick_is_complete(state: &GameState, seat: Seat) -> bool {
    match (state.next_actor_after(seat), state.dealer) {
        (None, _) | (Some(_), None) => true,
        (Some(next), Some(dealer)) => {
            state.steps_between(seat, dealer) <= state.steps_between(seat, next)
        }
    }
}

/// Resolve the current trick, credit the winner and move on.
///
/// Settles the round after its last trick.
pub fn close_trick<R: Rng + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
) -> Result<(TrickResult, Option<RoundSummary>), DomainError> {
    let plays = std::mem::take(&mut state.round.trick_plays);
    // Without a reference card no strength is trump.
    let manilla = state
        .round
        .trump_reference
        .map(manilla_strength)
        .unwrap_or(0);

    let value = state.round.win_multiplier;
    let (winner, awarded) = match resolve_trick(&plays, manilla) {
        TrickResolution::Winner(seat) => {
            let tally = &mut state.round.wins[seat as usize];
            *tally = tally.saturating_add(value);
            state.round.win_multiplier = 1;
            (Some(seat), value)
        }
        TrickResolution::Cancelled => {
            state.round.win_multiplier = value.saturating_add(1);
            (None, 0)
        }
    };

    let trick = TrickResult {
        trick_index: state.round.trick_index,
        plays: plays.clone(),
        winner,
        awarded,
        next_multiplier: state.round.win_multiplier,
    };
    state.round.last_trick = Some(plays);
    state.round.trick_index += 1;
    debug!(
        round_no = state.round_no,
        trick_index = trick.trick_index,
        winner = ?winner,
        awarded,
        next_multiplier = trick.next_multiplier,
        "Trick closed"
    );

    if state.round.trick_index >= state.round.turns {
        let summary = settle_round(state, rng)?;
        return Ok((trick, Some(summary)));
    }

    match state.trick_leader() {
        Some(leader) => {
            state.turn = Some(leader);
            Ok((trick, None))
        }
        None => {
            warn!(
                round_no = state.round_no,
                trick_index = state.round.trick_index,
                turns = state.round.turns,
                "No card holders left before the last trick; settling early"
            );
            let summary = settle_round(state, rng)?;
            Ok((trick, Some(summary)))
        }
    }
}
