use serde::{Deserialize, Serialize};

use crate::config::engine::CarryPolicy;
use crate::domain::bidding::Bid;
use crate::domain::participant::Participant;
use crate::domain::scoring::RoundSummary;
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// Stable 0-based seat index, assigned at registration and never reused.
pub type Seat = u8;

/// Overall game progression phases.
///
/// The `Final*` variants are used for rounds that start with exactly two
/// participants alive; settling such a round always ends the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Seats are still being filled; the game has not started.
    Lobby,
    AwaitingBid,
    AwaitingFinalBid,
    AwaitingPlay,
    AwaitingFinalPlay,
    GameOver,
}

impl Phase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Phase::Lobby => "LOBBY",
            Phase::AwaitingBid => "AWAITING_BID",
            Phase::AwaitingFinalBid => "AWAITING_FINAL_BID",
            Phase::AwaitingPlay => "AWAITING_PLAY",
            Phase::AwaitingFinalPlay => "AWAITING_FINAL_PLAY",
            Phase::GameOver => "GAME_OVER",
        }
    }

    pub const fn is_bidding(&self) -> bool {
        matches!(self, Phase::AwaitingBid | Phase::AwaitingFinalBid)
    }

    pub const fn is_playing(&self) -> bool {
        matches!(self, Phase::AwaitingPlay | Phase::AwaitingFinalPlay)
    }

    pub const fn is_final(&self) -> bool {
        matches!(self, Phase::AwaitingFinalBid | Phase::AwaitingFinalPlay)
    }

    /// Bidding phase for a round with `alive` participants.
    pub const fn bidding_for(alive: usize) -> Phase {
        if alive == 2 {
            Phase::AwaitingFinalBid
        } else {
            Phase::AwaitingBid
        }
    }

    /// The play phase that follows this bidding phase.
    pub const fn play_after_bidding(&self) -> Phase {
        if self.is_final() {
            Phase::AwaitingFinalPlay
        } else {
            Phase::AwaitingPlay
        }
    }

    pub fn mismatch(&self) -> DomainError {
        DomainError::WrongPhase {
            phase: self.as_str(),
        }
    }
}

/// Per-round state, rebuilt at every round boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// Face-up card whose next strength is this round's manilla.
    pub trump_reference: Option<Card>,
    /// Number of tricks in this round.
    pub turns: u8,
    /// 0-based index of the trick being played.
    pub trick_index: u8,
    /// Bids in bidding order, each paired with its seat.
    pub bids: Vec<Bid>,
    /// Tricks won this round, indexed by seat (dead seats stay at zero).
    pub wins: Vec<u8>,
    /// Ordered plays for the current trick (who, card).
    pub trick_plays: Vec<(Seat, Card)>,
    /// Value of the next decided trick; above 1 only after cancellations.
    pub win_multiplier: u8,
    /// Last closed trick, for display purposes.
    pub last_trick: Option<Vec<(Seat, Card)>>,
}

impl RoundState {
    pub fn empty(seats: usize) -> Self {
        Self {
            trump_reference: None,
            turns: 0,
            trick_index: 0,
            bids: Vec::new(),
            wins: vec![0; seats],
            trick_plays: Vec::new(),
            win_multiplier: 1,
            last_trick: None,
        }
    }

    pub fn bid_total(&self) -> u32 {
        self.bids.iter().map(|b| b.value as u32).sum()
    }
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub phase: Phase,
    /// Number of seats the table was created with.
    pub capacity: u8,
    pub starting_lives: u8,
    pub carry_policy: CarryPolicy,
    pub participants: Vec<Participant>,
    /// 1-based round number; 0 before the game starts.
    pub round_no: u16,
    /// Dealer seat; None until the first round is dealt.
    pub dealer: Option<Seat>,
    /// Seat whose action is awaited; None in Lobby and GameOver.
    pub turn: Option<Seat>,
    pub round: RoundState,
    /// Summary of the most recently settled round.
    pub previous_round: Option<RoundSummary>,
}

impl GameState {
    pub fn new(capacity: u8, starting_lives: u8, carry_policy: CarryPolicy) -> Self {
        Self {
            phase: Phase::Lobby,
            capacity,
            starting_lives,
            carry_policy,
            participants: Vec::with_capacity(capacity as usize),
            round_no: 0,
            dealer: None,
            turn: None,
            round: RoundState::empty(capacity as usize),
            previous_round: None,
        }
    }

    pub fn seat_count(&self) -> usize {
        self.participants.len()
    }

    pub fn participant(&self, seat: Seat) -> Option<&Participant> {
        self.participants.get(seat as usize)
    }

    pub fn alive_count(&self) -> usize {
        self.participants.iter().filter(|p| p.is_alive()).count()
    }

    pub fn can_act(&self, seat: Seat) -> bool {
        self.participant(seat)
            .is_some_and(|p| p.is_alive() && p.has_cards())
    }

    /// Seats in rotation starting at `start`, visiting every seat once.
    pub fn seats_from(&self, start: Seat) -> impl Iterator<Item = Seat> {
        let count = self.seat_count();
        (0..count).map(move |i| ((start as usize + i) % count) as Seat)
    }

    /// Next living seat after the current dealer (seat 0 for the first round).
    pub fn next_dealer(&self) -> Result<Seat, DomainError> {
        if self.seat_count() == 0 {
            return Err(DomainError::NoLivingDealer);
        }
        let start = match self.dealer {
            Some(d) => ((d as usize + 1) % self.seat_count()) as Seat,
            None => 0,
        };
        self.seats_from(start)
            .find(|&s| self.participants[s as usize].is_alive())
            .ok_or(DomainError::NoLivingDealer)
    }

    /// Next seat after `seat` that is alive and holds cards, wrapping around.
    ///
    /// `seat` itself is the last candidate, so a lone card holder finds itself.
    pub fn next_actor_after(&self, seat: Seat) -> Option<Seat> {
        if self.seat_count() == 0 {
            return None;
        }
        let start = ((seat as usize + 1) % self.seat_count()) as Seat;
        self.seats_from(start).find(|&s| self.can_act(s))
    }

    /// The dealer leads every trick, or the nearest card holder after the dealer.
    pub fn trick_leader(&self) -> Option<Seat> {
        let dealer = self.dealer?;
        self.seats_from(dealer).find(|&s| self.can_act(s))
    }

    /// Clockwise distance from `from` to `to`, in 1..=seat_count.
    pub fn steps_between(&self, from: Seat, to: Seat) -> usize {
        let count = self.seat_count();
        let d = (to as usize + count - from as usize) % count;
        if d == 0 {
            count
        } else {
            d
        }
    }
}
