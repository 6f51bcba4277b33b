use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::bidding::{place_bid, Bid};
use crate::domain::scoring::{leaders, settle_round, LifeLoss};
use crate::domain::state::{GameState, Phase};
use crate::domain::test_state_helpers::{make_game_state, MakeGameStateArgs};
use crate::domain::tricks::play_card;
use crate::errors::domain::DomainError;

fn finished_round(lives: Vec<u8>, bids: &[u8], wins: Vec<u8>, phase: Phase) -> GameState {
    let seats = lives.len();
    let mut state = make_game_state(
        vec![Vec::new(); seats],
        MakeGameStateArgs {
            phase,
            lives,
            turns: wins.iter().sum(),
            ..Default::default()
        },
    );
    state.round.bids = bids
        .iter()
        .enumerate()
        .map(|(seat, &value)| Bid {
            seat: seat as u8,
            value,
        })
        .collect();
    state.round.wins = wins;
    state.round.trick_index = state.round.turns;
    state
}

#[test]
fn mismatch_costs_the_difference() {
    let mut state = finished_round(vec![3, 3], &[1, 2], vec![1, 1], Phase::AwaitingFinalPlay);
    let summary = settle_round(&mut state, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();

    assert_eq!(
        summary.losses,
        vec![
            LifeLoss {
                seat: 0,
                bid: 1,
                won: 1,
                lost: 0
            },
            LifeLoss {
                seat: 1,
                bid: 2,
                won: 1,
                lost: 1
            },
        ]
    );
    assert_eq!(state.participants[0].lives, 3);
    assert_eq!(state.participants[1].lives, 2);
    assert_eq!(state.previous_round.as_ref(), Some(&summary));
}

#[test]
fn over_and_under_bids_both_cost_lives() {
    let mut state = finished_round(
        vec![5, 5, 5],
        &[0, 3, 1],
        vec![2, 0, 3],
        Phase::AwaitingPlay,
    );
    let summary = settle_round(&mut state, &mut ChaCha8Rng::seed_from_u64(2)).unwrap();
    let lost: Vec<u8> = summary.losses.iter().map(|l| l.lost).collect();
    assert_eq!(lost, vec![2, 3, 2]);
    assert!(summary.eliminated.is_empty());
    // Three alive: the next round is dealt immediately
    assert_eq!(state.round_no, 2);
    assert_eq!(state.phase, Phase::AwaitingBid);
    assert_eq!(state.round.turns, 3);
}

#[test]
fn lives_never_drop_below_zero() {
    let mut state = finished_round(
        vec![1, 4, 4],
        &[4, 0, 0],
        vec![0, 0, 4],
        Phase::AwaitingPlay,
    );
    let summary = settle_round(&mut state, &mut ChaCha8Rng::seed_from_u64(3)).unwrap();
    assert_eq!(summary.losses[0].lost, 1);
    assert_eq!(summary.eliminated, vec![0, 2]);
    assert_eq!(state.participants[0].lives, 0);
    assert_eq!(state.participants[2].lives, 0);
    // Only seat 1 survives
    assert_eq!(state.phase, Phase::GameOver);
    assert_eq!(state.turn, None);
    assert_eq!(leaders(&state), vec![1]);
}

#[test]
fn final_round_always_ends_the_game() {
    let mut state = finished_round(vec![4, 4], &[1, 0], vec![1, 0], Phase::AwaitingFinalPlay);
    settle_round(&mut state, &mut ChaCha8Rng::seed_from_u64(4)).unwrap();
    assert_eq!(state.phase, Phase::GameOver);
    // Nobody lost anything: both share the lead
    assert_eq!(leaders(&state), vec![0, 1]);
}

#[test]
fn actions_after_game_over_are_wrong_phase() {
    let mut state = finished_round(vec![2, 2], &[0, 1], vec![1, 0], Phase::AwaitingFinalPlay);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    settle_round(&mut state, &mut rng).unwrap();
    assert_eq!(state.phase, Phase::GameOver);

    let expected = DomainError::WrongPhase { phase: "GAME_OVER" };
    assert_eq!(place_bid(&mut state, 0, 0), Err(expected.clone()));
    assert_eq!(play_card(&mut state, 0, 0, &mut rng), Err(expected));
}

#[test]
fn leaders_is_empty_when_everyone_is_dead() {
    let mut state = finished_round(vec![1, 1], &[1, 1], vec![0, 0], Phase::AwaitingFinalPlay);
    let summary = settle_round(&mut state, &mut ChaCha8Rng::seed_from_u64(6)).unwrap();
    assert_eq!(summary.eliminated, vec![0, 1]);
    assert_eq!(state.phase, Phase::GameOver);
    assert!(leaders(&state).is_empty());
}
