use std::io::{BufRead, Write};

use crate::choice::{Choice, Outcome};
use crate::input::read_choice;
use crate::report::{report, MAXIMUM_ROUNDS};
use crate::Result;

/// Score of a match in progress. Drawn and skipped rounds leave it untouched.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub struct Match {
    pub rounds_played: u32,
    pub player_wins: u32,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Event {
    Skipped,
    Drawn {
        player: Choice,
        opponent: Choice,
    },
    Decided {
        player: Choice,
        opponent: Choice,
        outcome: Outcome,
    },
}

impl Match {
    pub fn new() -> Match {
        Match::default()
    }

    pub fn is_over(&self) -> bool {
        self.rounds_played >= MAXIMUM_ROUNDS
    }

    pub fn losses(&self) -> u32 {
        self.rounds_played - self.player_wins
    }

    pub fn advance(self, player: Option<Choice>, opponent: Choice) -> (Match, Event) {
        let player = match player {
            Some(p) => p,
            None => return (self, Event::Skipped),
        };

        match Outcome::of(player, opponent) {
            Outcome::Draw => (self, Event::Drawn { player, opponent }),
            outcome => {
                let won = outcome == Outcome::PlayerWin;
                let next = Match {
                    rounds_played: self.rounds_played + 1,
                    player_wins: self.player_wins + won as u32,
                };
                (
                    next,
                    Event::Decided {
                        player,
                        opponent,
                        outcome,
                    },
                )
            }
        }
    }
}

fn narrate<W: Write>(out: &mut W, event: &Event) -> Result<()> {
    match *event {
        Event::Skipped => {}
        Event::Drawn { player, opponent } => {
            writeln!(out, "You picked {}", player)?;
            writeln!(out, "Opponent picked {}", opponent)?;
            writeln!(out, "It's a draw!")?;
        }
        Event::Decided {
            player,
            opponent,
            outcome,
        } => {
            writeln!(out, "You picked {}", player)?;
            writeln!(out, "Opponent picked {}", opponent)?;
            if outcome == Outcome::PlayerWin {
                writeln!(out, "Your {} beats the opponent's {}!", player, opponent)?;
            } else {
                writeln!(out, "The opponent's {} beats your {}!", opponent, player)?;
            }
        }
    }
    Ok(())
}

/// Plays a best-of-three match until three rounds have been decided.
///
/// Unparseable input silently repeats the prompt, and the opponent is only
/// consulted once the player has made a valid choice. Note that an exhausted
/// reader keeps yielding empty lines, so `input` must eventually produce
/// enough valid choices to finish the match.
pub fn play<R, W, F>(input: &mut R, out: &mut W, mut opponent: F) -> Result<Match>
where
    R: BufRead,
    W: Write,
    F: FnMut() -> Choice,
{
    writeln!(out, "Welcome to Rock Paper Scissors!")?;

    let mut state = Match::new();
    while !state.is_over() {
        writeln!(out, "Pick one: R, P, S")?;
        out.flush()?;

        let player = match read_choice(input, out) {
            Some(p) => p,
            None => {
                log::debug!("skipping round: no valid choice");
                continue;
            }
        };

        let (next, event) = state.advance(Some(player), opponent());
        log::debug!("{:?} -> {:?} ({:?})", state, next, event);
        narrate(out, &event)?;
        state = next;
    }

    report(out, state.player_wins)?;
    Ok(state)
}

/// A single prompt with no retry. Returns `None` when the input is not a choice.
pub fn play_once<R, W, F>(input: &mut R, out: &mut W, opponent: F) -> Result<Option<Outcome>>
where
    R: BufRead,
    W: Write,
    F: FnOnce() -> Choice,
{
    writeln!(out, "Pick one: R, P, S")?;
    out.flush()?;

    let player = match read_choice(input, out) {
        Some(p) => p,
        None => {
            writeln!(out, "Invalid choice.")?;
            return Ok(None);
        }
    };

    let (_, event) = Match::new().advance(Some(player), opponent());
    narrate(out, &event)?;

    Ok(Some(match event {
        Event::Decided { outcome, .. } => outcome,
        _ => Outcome::Draw,
    }))
}
