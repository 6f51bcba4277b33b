//! Hot-seat console play: every seat is driven from one input stream.

use std::io::{BufRead, Write};

use fodinha_engine::{EngineConfig, Game, PlayOutcome, PlayerView};

type SessionResult<T> = Result<T, Box<dyn std::error::Error>>;

fn describe(view: &PlayerView, out: &mut impl Write) -> std::io::Result<()> {
    let game = &view.game;
    writeln!(
        out,
        "round {} | dealer {} | tricks {} | face up {}",
        game.round_number,
        game.dealer_seat.map_or("-".to_string(), |s| s.to_string()),
        game.turns_this_round,
        game.trump_reference_card
            .map_or("-".to_string(), |c| c.to_string()),
    )?;
    for p in &game.players {
        writeln!(out, "  seat {} {:<8} lives {}", p.seat, p.name, p.lives)?;
    }
    if !game.bids.is_empty() {
        let bids: Vec<String> = game
            .bids
            .iter()
            .map(|b| format!("{}:{}", b.seat, b.value))
            .collect();
        writeln!(out, "  bids {}", bids.join(" "))?;
    }
    if !game.trick_pile.is_empty() {
        let pile: Vec<String> = game
            .trick_pile
            .iter()
            .map(|p| format!("{}:{}", p.seat, p.card))
            .collect();
        writeln!(out, "  table {}", pile.join(" "))?;
    }
    let hand: Vec<String> = view
        .hand
        .iter()
        .enumerate()
        .map(|(i, c)| format!("[{i}]{c}"))
        .collect();
    writeln!(out, "seat {} hand {}", view.seat, hand.join(" "))
}

fn report(outcome: &PlayOutcome, out: &mut impl Write) -> std::io::Result<()> {
    if let Some(trick) = &outcome.trick {
        match trick.winner {
            Some(winner) => writeln!(out, "seat {winner} takes {}", trick.awarded)?,
            None => writeln!(
                out,
                "cancelled, next trick worth {}",
                trick.next_multiplier
            )?,
        }
    }
    if let Some(round) = &outcome.round {
        for loss in round.losses.iter().filter(|l| l.lost > 0) {
            writeln!(out, "seat {} loses {}", loss.seat, loss.lost)?;
        }
    }
    Ok(())
}

/// Run a session until the game ends or the input closes.
///
/// Each line is a number: a bid while bidding, a hand position while playing.
/// Rejected inputs are reported and the same seat is asked again.
pub fn run<I: BufRead, O: Write>(
    config: EngineConfig,
    seed: u64,
    input: I,
    out: &mut O,
) -> SessionResult<Game> {
    let mut game = Game::seeded(config, seed)?;
    for seat in 0..config.seat_capacity {
        game.register(format!("seat{seat}"))?;
    }
    game.start()?;

    let mut lines = input.lines();
    while !game.is_over() {
        let Some(seat) = game.snapshot().active_seat else {
            break;
        };
        let Some(view) = game.player_view(seat) else {
            break;
        };
        describe(&view, out)?;
        let verb = if view.game.phase.is_bidding() {
            "bid"
        } else {
            "play"
        };
        write!(out, "{verb}> ")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            return Ok(game);
        };
        let Ok(value) = line.trim().parse::<usize>() else {
            writeln!(out, "enter a number")?;
            continue;
        };

        if verb == "bid" {
            match u8::try_from(value) {
                Ok(bid) => {
                    if let Err(e) = game.bid(seat, bid) {
                        writeln!(out, "rejected: {e}")?;
                    }
                }
                Err(_) => writeln!(out, "rejected: bid too large")?,
            }
            continue;
        }
        match game.play(seat, value) {
            Ok(outcome) => report(&outcome, out)?,
            Err(e) => writeln!(out, "rejected: {e}")?,
        }
    }

    writeln!(out, "game over, winners {:?}", game.winners())?;
    Ok(game)
}
