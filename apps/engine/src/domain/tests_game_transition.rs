use crate::config::engine::EngineConfig;
use crate::domain::game::Game;
use crate::domain::game_transition::{derive_transitions, GameTransition};
use crate::domain::state::Phase;

fn lobby(seats: u8) -> Game {
    let mut game = Game::seeded(EngineConfig::with_capacity(seats), 21).unwrap();
    for i in 0..seats {
        game.register(format!("p{i}")).unwrap();
    }
    game
}

#[test]
fn start_emits_game_round_and_turn() {
    let mut game = lobby(3);
    let before = game.snapshot();
    game.start().unwrap();
    let after = game.snapshot();

    assert_eq!(
        derive_transitions(&before, &after),
        vec![
            GameTransition::GameStarted,
            GameTransition::RoundStarted {
                round_number: 1,
                dealer: 0
            },
            GameTransition::TurnBecame { seat: 0 },
        ]
    );
}

#[test]
fn bid_moves_turn_only() {
    let mut game = lobby(3);
    game.start().unwrap();
    let before = game.snapshot();
    game.bid(0, 1).unwrap();
    let after = game.snapshot();

    assert_eq!(
        derive_transitions(&before, &after),
        vec![GameTransition::TurnBecame { seat: 1 }]
    );
}

#[test]
fn identical_snapshots_emit_nothing() {
    let mut game = lobby(2);
    game.start().unwrap();
    let snap = game.snapshot();
    assert!(derive_transitions(&snap, &snap).is_empty());
}

#[test]
fn lives_lost_and_game_end_are_reported() {
    let mut game = lobby(2);
    game.start().unwrap();
    let before = game.snapshot();

    let mut after = before.clone();
    after.players[1].lives -= 2;
    after.phase = Phase::GameOver;
    after.active_seat = None;

    assert_eq!(
        derive_transitions(&before, &after),
        vec![
            GameTransition::LivesLost {
                seat: 1,
                lost: 2,
                remaining: after.players[1].lives
            },
            GameTransition::GameEnded,
        ]
    );
}

#[test]
fn transitions_serialize_with_type_tag() {
    let json = serde_json::to_value(GameTransition::TurnBecame { seat: 2 }).unwrap();
    assert_eq!(json["type"], "turn_became");
    assert_eq!(json["seat"], 2);
}
