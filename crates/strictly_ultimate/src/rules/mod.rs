//! Game rules shared by micro boards and the macro grid.
//!
//! This module contains pure functions for evaluating a nine-cell grid.
//! A micro board is a grid of [`Mark`]s and the macro grid is a grid of
//! micro [`Outcome`]s; both are evaluated with the same line checks.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, winning_line};

use crate::types::{Mark, Outcome, Player};

/// A cell of a nine-cell grid that rules can evaluate.
pub trait GridCell: Copy {
    /// The player this cell counts for when checking lines.
    fn owner(self) -> Option<Player>;

    /// Whether the cell can still change.
    fn is_vacant(self) -> bool;
}

impl GridCell for Mark {
    fn owner(self) -> Option<Player> {
        self.player()
    }

    fn is_vacant(self) -> bool {
        self.is_empty()
    }
}

// Drawn micro boards are decided but belong to nobody, so they block lines.
impl GridCell for Outcome {
    fn owner(self) -> Option<Player> {
        self.winner()
    }

    fn is_vacant(self) -> bool {
        !self.is_decided()
    }
}
