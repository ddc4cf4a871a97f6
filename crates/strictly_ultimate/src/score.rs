//! Running tally of finished games.
//!
//! The engine never owns this; the presentation layer records each macro
//! result once and keeps the tally across resets.

use crate::types::{Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Wins per player and draws across games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games won by First.
    first_wins: u32,
    /// Games won by Second.
    second_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one finished game. Undecided outcomes are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::WonBy(Player::First) => self.first_wins += 1,
            Outcome::WonBy(Player::Second) => self.second_wins += 1,
            Outcome::Drawn => self.draws += 1,
            Outcome::Undecided => return,
        }
        debug!(score = ?self, "Score updated");
    }

    /// Total number of recorded games.
    pub fn games(&self) -> u32 {
        self.first_wins + self.second_wins + self.draws
    }

    /// Zeroes the tally.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}  {}: {}  Draws: {}",
            Player::First,
            self.first_wins,
            Player::Second,
            self.second_wins,
            self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_each_outcome_once() {
        let mut score = Scoreboard::new();
        score.record(Outcome::WonBy(Player::First));
        score.record(Outcome::WonBy(Player::Second));
        score.record(Outcome::WonBy(Player::Second));
        score.record(Outcome::Drawn);
        score.record(Outcome::Undecided);

        assert_eq!(*score.first_wins(), 1);
        assert_eq!(*score.second_wins(), 2);
        assert_eq!(*score.draws(), 1);
        assert_eq!(score.games(), 4);
        assert_eq!(score.to_string(), "○: 1  ×: 2  Draws: 1");
    }

    #[test]
    fn test_reset() {
        let mut score = Scoreboard::new();
        score.record(Outcome::Drawn);
        score.reset();
        assert_eq!(score, Scoreboard::default());
    }
}
