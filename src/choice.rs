use std::fmt;

use rand::distributions::{Distribution, Standard};
use rand::Rng;

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Outcome {
    Draw,
    PlayerWin,
    OpponentWin,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Single-letter input, case-insensitive. Anything else is `None`.
    pub fn parse(s: &str) -> Option<Choice> {
        match s.to_uppercase().as_str() {
            "R" => Some(Choice::Rock),
            "P" => Some(Choice::Paper),
            "S" => Some(Choice::Scissors),
            _ => None,
        }
    }

    pub fn ordinal(self) -> u8 {
        match self {
            Choice::Rock => 0,
            Choice::Paper => 1,
            Choice::Scissors => 2,
        }
    }

    pub fn from_ordinal(n: u8) -> Option<Choice> {
        Choice::ALL.get(n as usize).copied()
    }

    /// Uniform draw from the thread-local generator.
    pub fn random() -> Choice {
        rand::random()
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Choice {
        rng.gen()
    }

    /// The choice this one defeats.
    fn victim(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Scissors => Choice::Paper,
            Choice::Paper => Choice::Rock,
        }
    }

    pub fn beats(self, other: Choice) -> bool {
        self != other && self.victim() == other
    }

    pub fn describe(self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

impl Distribution<Choice> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Choice {
        Choice::ALL[rng.gen_range(0..Choice::ALL.len())]
    }
}

impl Outcome {
    pub fn of(player: Choice, opponent: Choice) -> Outcome {
        if player == opponent {
            Outcome::Draw
        } else if player.beats(opponent) {
            Outcome::PlayerWin
        } else {
            Outcome::OpponentWin
        }
    }
}
