use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::rules::is_forbidden_pe_bid;
use crate::domain::state::{GameState, Seat};
use crate::errors::domain::DomainError;

/// A guess of how many tricks a seat will take, paired with that seat when recorded.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Bid {
    pub seat: Seat,
    pub value: u8,
}

/// Shared turn validation for bids and plays, in rejection order.
pub(crate) fn ensure_actor(state: &GameState, seat: Seat) -> Result<(), DomainError> {
    if state.turn != Some(seat) {
        return Err(DomainError::NotYourTurn { seat });
    }
    let participant = state
        .participant(seat)
        .ok_or(DomainError::NotYourTurn { seat })?;
    if !participant.is_alive() {
        return Err(DomainError::ParticipantDead { seat });
    }
    Ok(())
}

/// True when the next bid closes the bidding for this round.
pub fn is_last_bid(state: &GameState) -> bool {
    state.round.bids.len() + 1 == state.alive_count()
}

/// Record a bid, enforcing phase, turn, and the "pé" rule for the last bidder.
pub fn place_bid(state: &mut GameState, seat: Seat, value: u8) -> Result<(), DomainError> {
    if !state.phase.is_bidding() {
        return Err(state.phase.mismatch());
    }
    ensure_actor(state, seat)?;

    let last = is_last_bid(state);
    if last && is_forbidden_pe_bid(state.round.bid_total(), value, state.round.turns) {
        debug!(seat, value, turns = state.round.turns, "Rejected pé bid");
        return Err(DomainError::ForbiddenPeBid {
            bid: value,
            turns: state.round.turns,
        });
    }

    state.round.bids.push(Bid { seat, value });
    debug!(
        seat,
        value,
        round_no = state.round_no,
        bids_placed = state.round.bids.len(),
        "Bid accepted"
    );

    if last {
        state.phase = state.phase.play_after_bidding();
        state.turn = state.trick_leader();
    } else {
        state.turn = state.next_actor_after(seat);
    }
    Ok(())
}
