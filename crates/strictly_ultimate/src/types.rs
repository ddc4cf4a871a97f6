//! Core domain types shared by micro and macro boards.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player (○, always moves first).
    First,
    /// Second player (×).
    Second,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Symbol used when rendering this player's marks.
    pub fn symbol(self) -> char {
        match self {
            Player::First => '○',
            Player::Second => '×',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single cell of a micro board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Mark {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

impl Mark {
    /// Returns the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Occupied(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        Mark::Occupied(player)
    }
}

/// Result of a board, used for each micro board and for the macro grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Outcome {
    /// Still in play.
    #[default]
    Undecided,
    /// A player completed a line.
    WonBy(Player),
    /// Filled up (or, at macro level, every micro board decided) without a line.
    Drawn,
}

impl Outcome {
    /// Returns true once the outcome is final.
    pub fn is_decided(self) -> bool {
        !matches!(self, Outcome::Undecided)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::WonBy(player) => Some(player),
            Outcome::Undecided | Outcome::Drawn => None,
        }
    }

    /// Checks whether moving from `self` to `next` is allowed.
    ///
    /// Outcomes only ever move out of `Undecided`, and never change afterwards.
    #[instrument]
    pub fn can_become(self, next: Outcome) -> bool {
        self == next || self == Outcome::Undecided
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "Undecided"),
            Outcome::WonBy(player) => write!(f, "{} wins", player),
            Outcome::Drawn => write!(f, "Draw"),
        }
    }
}
