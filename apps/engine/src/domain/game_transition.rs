use serde::{Deserialize, Serialize};

use crate::domain::snapshot::GameSnapshot;
use crate::domain::state::{Phase, Seat};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameTransition {
    /// Edge-triggered: Game moved from Lobby to its first round.
    GameStarted,

    /// Edge-triggered: a new round was dealt.
    RoundStarted { round_number: u16, dealer: Seat },

    /// Edge-triggered: a seat lost lives at settlement.
    LivesLost { seat: Seat, lost: u8, remaining: u8 },

    /// Edge-triggered: the turn became a specific seat.
    TurnBecame { seat: Seat },

    /// Edge-triggered: Game moved to GameOver.
    GameEnded,
}

/// Derive transitions from before/after snapshots of the same game.
pub fn derive_transitions(before: &GameSnapshot, after: &GameSnapshot) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Game start
    if before.phase == Phase::Lobby && after.phase != Phase::Lobby {
        transitions.push(GameTransition::GameStarted);
    }

    // 2. Life losses
    for (old, new) in before.players.iter().zip(&after.players) {
        if new.lives < old.lives {
            transitions.push(GameTransition::LivesLost {
                seat: new.seat,
                lost: old.lives - new.lives,
                remaining: new.lives,
            });
        }
    }

    // 3. New round
    if after.round_number > before.round_number {
        if let Some(dealer) = after.dealer_seat {
            transitions.push(GameTransition::RoundStarted {
                round_number: after.round_number,
                dealer,
            });
        }
    }

    // 4. Turn change; a new round always announces its first actor
    if let Some(seat) = after.active_seat {
        if before.active_seat != Some(seat) || after.round_number != before.round_number {
            transitions.push(GameTransition::TurnBecame { seat });
        }
    }

    // 5. Game end
    if before.phase != Phase::GameOver && after.phase == Phase::GameOver {
        transitions.push(GameTransition::GameEnded);
    }

    transitions
}
