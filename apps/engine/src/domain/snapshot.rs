//! Public snapshot API for observing game state without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::Bid;
use crate::domain::cards_logic::manilla_strength;
use crate::domain::scoring::RoundSummary;
use crate::domain::state::{GameState, Phase, Seat};
use crate::domain::Card;

/// Public info about a single seat (no private hand).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub seat: Seat,
    pub name: String,
    pub lives: u8,
    pub hand_size: usize,
}

/// A card in the current or last trick, tagged with who played it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayPublic {
    pub seat: Seat,
    pub card: Card,
}

/// Read-only projection of a game, suitable for any wire format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub round_number: u16,
    pub trump_reference_card: Option<Card>,
    /// Strength that is trump this round (derived from the reference card).
    pub manilla_strength: Option<u8>,
    pub players: Vec<PlayerPublic>,
    pub active_seat: Option<Seat>,
    pub dealer_seat: Option<Seat>,
    pub turns_this_round: u8,
    pub current_trick_index: u8,
    pub phase: Phase,
    pub bids: Vec<Bid>,
    pub wins_tally: Vec<u8>,
    pub trick_pile: Vec<PlayPublic>,
    pub pending_win_multiplier: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_trick: Option<Vec<PlayPublic>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_round: Option<RoundSummary>,
}

/// What a single seat is allowed to see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub seat: Seat,
    /// The seat's hand in draw order; `play` positions index into it.
    pub hand: Vec<Card>,
    pub your_turn: bool,
    pub game: GameSnapshot,
}

fn plays_public(plays: &[(Seat, Card)]) -> Vec<PlayPublic> {
    plays
        .iter()
        .map(|&(seat, card)| PlayPublic { seat, card })
        .collect()
}

/// Produce a snapshot of the current game state. Never mutates.
pub fn snapshot(state: &GameState) -> GameSnapshot {
    let players = state
        .participants
        .iter()
        .map(|p| PlayerPublic {
            seat: p.seat,
            name: p.name.clone(),
            lives: p.lives,
            hand_size: p.hand.len(),
        })
        .collect();

    GameSnapshot {
        round_number: state.round_no,
        trump_reference_card: state.round.trump_reference,
        manilla_strength: state.round.trump_reference.map(manilla_strength),
        players,
        active_seat: state.turn,
        dealer_seat: state.dealer,
        turns_this_round: state.round.turns,
        current_trick_index: state.round.trick_index,
        phase: state.phase,
        bids: state.round.bids.clone(),
        wins_tally: state.round.wins.clone(),
        trick_pile: plays_public(&state.round.trick_plays),
        pending_win_multiplier: state.round.win_multiplier,
        last_trick: state.round.last_trick.as_deref().map(plays_public),
        previous_round: state.previous_round.clone(),
    }
}

/// Snapshot plus the private hand of `seat`; None for an unknown seat.
pub fn player_view(state: &GameState, seat: Seat) -> Option<PlayerView> {
    let participant = state.participant(seat)?;
    Some(PlayerView {
        seat,
        hand: participant.hand.clone(),
        your_turn: state.turn == Some(seat),
        game: snapshot(state),
    })
}
