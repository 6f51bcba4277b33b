use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::bidding::Bid;
use crate::domain::round::start_round;
use crate::domain::state::{GameState, Phase, Seat};
use crate::errors::domain::DomainError;

/// Per-seat settlement line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeLoss {
    pub seat: Seat,
    pub bid: u8,
    pub won: u8,
    /// Lives actually removed (the mismatch, floored at remaining lives).
    pub lost: u8,
}

/// Final state of a settled round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round_no: u16,
    pub turns: u8,
    pub bids: Vec<Bid>,
    pub wins: Vec<u8>,
    pub losses: Vec<LifeLoss>,
    /// Seats that reached zero lives in this round.
    pub eliminated: Vec<Seat>,
    /// Cancellation value still pending when the round closed (1 = none).
    pub pending_multiplier: u8,
}

/// Apply life losses for the round, then deal the next round or end the game.
///
/// The game ends when at most one participant is alive, or after any round
/// that was played as a final (two-participant) round.
pub fn settle_round<R: Rng + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
) -> Result<RoundSummary, DomainError> {
    let was_final = state.phase.is_final();

    let mut losses = Vec::with_capacity(state.round.bids.len());
    let mut eliminated = Vec::new();
    for bid in &state.round.bids {
        let won = state.round.wins[bid.seat as usize];
        let participant = &mut state.participants[bid.seat as usize];
        let was_alive = participant.is_alive();
        let lost = participant.lose_lives(bid.value.abs_diff(won));
        if was_alive && !participant.is_alive() {
            eliminated.push(bid.seat);
        }
        losses.push(LifeLoss {
            seat: bid.seat,
            bid: bid.value,
            won,
            lost,
        });
    }

    let summary = RoundSummary {
        round_no: state.round_no,
        turns: state.round.turns,
        bids: state.round.bids.clone(),
        wins: state.round.wins.clone(),
        losses,
        eliminated,
        pending_multiplier: state.round.win_multiplier,
    };
    for loss in &summary.losses {
        info!(
            round_no = summary.round_no,
            seat = loss.seat,
            bid = loss.bid,
            won = loss.won,
            lost = loss.lost,
            "Round settled for seat"
        );
    }
    state.previous_round = Some(summary.clone());

    let alive = state.alive_count();
    if alive <= 1 || was_final {
        state.phase = Phase::GameOver;
        state.turn = None;
        info!(
            round_no = state.round_no,
            alive,
            was_final, "Game over"
        );
    } else {
        start_round(state, rng)?;
    }
    Ok(summary)
}

/// Alive seats holding the most lives; empty when nobody survived.
pub fn leaders(state: &GameState) -> Vec<Seat> {
    let best = state
        .participants
        .iter()
        .filter(|p| p.is_alive())
        .map(|p| p.lives)
        .max();
    match best {
        Some(best) => state
            .participants
            .iter()
            .filter(|p| p.lives == best)
            .map(|p| p.seat)
            .collect(),
        None => Vec::new(),
    }
}
